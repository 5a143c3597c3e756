use time::Date;

use super::{authorize_hotel_owner, prelude::*, NewRoomType};

#[derive(Debug, Clone)]
pub struct UpdateHotel {
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

/// Apply a merchant edit.
///
/// Every edit resubmits the listing: the publication status is reset to
/// `Pending` and a previous reject reason is cleared. This is also the only
/// way out of the `Rejected` state.
pub fn update_hotel<R>(repo: &R, user: &User, id: &Id, update: UpdateHotel) -> Result<Hotel>
where
    R: HotelRepo,
{
    let mut hotel = repo.get_hotel(id.as_str())?;
    authorize_hotel_owner(user, &hotel)?;

    let UpdateHotel {
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
    } = update;

    if name.trim().is_empty() {
        return Err(Error::Name);
    }
    if base_price < 0.0 {
        return Err(Error::Price);
    }

    // Occupancies of unchanged room types survive the edit.
    let room_types = room_types
        .into_iter()
        .map(|rt| {
            if rt.nightly_price < 0.0 {
                return Err(Error::Price);
            }
            let occupied = hotel
                .room_types
                .iter()
                .find(|old| old.name == rt.name)
                .and_then(|old| old.occupied.clone());
            Ok(RoomType {
                name: rt.name,
                nightly_price: rt.nightly_price,
                description: rt.description,
                occupied,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    hotel.name = name;
    hotel.name_en = name_en;
    hotel.address = address;
    hotel.pos = pos;
    hotel.star_rating = StarRating::try_from(star_rating)?;
    hotel.base_price = base_price;
    hotel.opening_date = opening_date;
    hotel.description = description;
    hotel.amenities = amenities;
    hotel.images = images;
    hotel.main_image = main_image;
    hotel.room_types = room_types;

    if hotel.status != PublicationStatus::Pending {
        debug_assert!(hotel.status.allows_transition_to(PublicationStatus::Pending));
        hotel.status = PublicationStatus::Pending;
    }
    hotel.reject_reason = None;

    log::info!("Updating hotel {} and resubmitting it for review", hotel.id);
    repo.update_hotel(&hotel)?;
    Ok(hotel)
}
