use thiserror::Error;
use time::Date;

use crate::{address::*, geo::*, id::*, publication::*, rating::*, stay::*, time::*};

/// Star class of a hotel, 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StarRating(u8);

#[derive(Debug, Error)]
#[error("Invalid star rating: {0}")]
pub struct InvalidStarRating(u8);

impl StarRating {
    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(5)
    }
}

impl TryFrom<u8> for StarRating {
    type Error = InvalidStarRating;
    fn try_from(from: u8) -> Result<Self, Self::Error> {
        if !(Self::min().0..=Self::max().0).contains(&from) {
            return Err(InvalidStarRating(from));
        }
        Ok(Self(from))
    }
}

impl From<StarRating> for u8 {
    fn from(from: StarRating) -> Self {
        from.0
    }
}

/// The single currently-booked date range of a room type.
///
/// There is no booking calendar; a room type carries at most one
/// occupancy at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupancy {
    pub period: StayPeriod,
    pub booking_id: Id,
    pub customer_id: Id,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct RoomType {
    pub name          : String,
    pub nightly_price : f64,
    pub description   : Option<String>,
    pub occupied      : Option<Occupancy>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    pub id            : Id,
    pub name          : String,
    pub name_en       : String,
    pub address       : Address,
    pub pos           : MapPoint,
    pub star_rating   : StarRating,
    pub base_price    : f64,
    pub opening_date  : Date,
    pub description   : String,
    pub status        : PublicationStatus,
    pub room_types    : Vec<RoomType>,
    pub amenities     : Vec<String>,
    pub images        : Vec<String>,
    pub main_image    : Option<String>,
    pub reject_reason : Option<String>,
    pub created_by    : Id,
    pub created_at    : Timestamp,
    pub rating        : RatingAggregate,
}

impl Hotel {
    pub fn is_publicly_visible(&self) -> bool {
        self.status.is_publicly_visible()
    }

    pub fn room_type(&self, name: &str) -> Option<&RoomType> {
        self.room_types.iter().find(|rt| rt.name == name)
    }

    pub fn room_type_mut(&mut self, name: &str) -> Option<&mut RoomType> {
        self.room_types.iter_mut().find(|rt| rt.name == name)
    }

    pub fn has_all_amenities<'a>(&self, wanted: impl IntoIterator<Item = &'a str>) -> bool {
        wanted
            .into_iter()
            .all(|w| self.amenities.iter().any(|a| a == w))
    }
}
