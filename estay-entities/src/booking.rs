use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::*;
use strum::{EnumIter, EnumString};
use thiserror::Error;

use crate::{id::*, stay::*, time::*};

pub type BookingStatusPrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BookingStatus {
    Cancelled = -1,
    Pending   =  0,
    Confirmed =  1,
    Completed =  2,
}

impl BookingStatus {
    /// Whether the booking still holds its room occupancy.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }
}

#[derive(Debug, Error)]
#[error("Invalid booking status primitive: {0}")]
pub struct InvalidBookingStatusPrimitive(BookingStatusPrimitive);

impl TryFrom<i16> for BookingStatus {
    type Error = InvalidBookingStatusPrimitive;
    fn try_from(from: BookingStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidBookingStatusPrimitive(from))
    }
}

impl From<BookingStatus> for BookingStatusPrimitive {
    fn from(from: BookingStatus) -> Self {
        from.to_i16().expect("Booking status primitive")
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id          : Id,
    pub customer_id : Id,
    pub hotel_id    : Id,
    pub stay        : StayPeriod,
    pub room_type   : String,
    pub room_count  : u32,
    pub total_price : f64,
    pub status      : BookingStatus,
    pub created_at  : Timestamp,
}

impl Booking {
    pub fn nights(&self) -> u32 {
        self.stay.nights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_states_hold_the_room() {
        assert!(BookingStatus::Pending.is_active());
        assert!(BookingStatus::Confirmed.is_active());
        assert!(!BookingStatus::Cancelled.is_active());
        assert!(!BookingStatus::Completed.is_active());
    }
}
