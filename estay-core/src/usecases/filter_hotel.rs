use crate::availability::Available;

use super::prelude::*;

/// Strip room types that conflict with the requested stay.
///
/// Returns `None` when no bookable room remains; such hotels are hidden
/// from results entirely. Applied uniformly wherever rooms are listed
/// (search, detail, featured).
pub fn filter_hotel(mut hotel: Hotel, stay: Option<&StayPeriod>) -> Option<Hotel> {
    let Some(stay) = stay else {
        return Some(hotel);
    };
    hotel.room_types.retain(|rt| rt.is_available_for(stay));
    if hotel.room_types.is_empty() {
        return None;
    }
    Some(hotel)
}
