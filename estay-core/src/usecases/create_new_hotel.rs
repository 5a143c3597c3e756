use time::Date;

use super::{authorize_role, prelude::*};

#[derive(Debug, Clone)]
pub struct NewHotel {
    pub name: String,
    pub name_en: String,
    pub address: Address,
    pub pos: MapPoint,
    pub star_rating: u8,
    pub base_price: f64,
    pub opening_date: Date,
    pub description: String,
    pub room_types: Vec<NewRoomType>,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
    pub main_image: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewRoomType {
    pub name: String,
    pub nightly_price: f64,
    pub description: Option<String>,
}

pub fn create_new_hotel<R>(repo: &R, creator: &User, new_hotel: NewHotel) -> Result<Hotel>
where
    R: HotelRepo,
{
    authorize_role(creator, Role::Merchant)?;

    let NewHotel {
        name,
        name_en,
        address,
        pos,
        star_rating,
        base_price,
        opening_date,
        description,
        room_types,
        amenities,
        images,
        main_image,
    } = new_hotel;

    if name.trim().is_empty() {
        return Err(Error::Name);
    }
    let star_rating = StarRating::try_from(star_rating)?;
    if base_price < 0.0 {
        return Err(Error::Price);
    }
    let room_types = room_types
        .into_iter()
        .map(|rt| {
            if rt.name.trim().is_empty() {
                return Err(Error::RoomTypeNotFound);
            }
            if rt.nightly_price < 0.0 {
                return Err(Error::Price);
            }
            Ok(RoomType {
                name: rt.name,
                nightly_price: rt.nightly_price,
                description: rt.description,
                occupied: None,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    // Listings of admins skip the review queue.
    let status = if creator.role == Role::Admin {
        PublicationStatus::Approved
    } else {
        PublicationStatus::Pending
    };

    let hotel = Hotel {
        id: Id::new(),
        name,
        name_en,
        address,
        pos,
        star_rating,
        base_price,
        opening_date,
        description,
        status,
        room_types,
        amenities,
        images,
        main_image,
        reject_reason: None,
        created_by: creator.id.clone(),
        created_at: Timestamp::now(),
        rating: RatingAggregate::default(),
    };
    log::info!("Creating new hotel {} ({})", hotel.name, hotel.id);
    repo.create_hotel(hotel.clone())?;
    Ok(hotel)
}
