use crate::entities::*;

/// Room availability for a requested stay.
///
/// Both the requested and the occupied range are half-open
/// `[check_in, check_out)` intervals, so a checkout day equals the next
/// checkin day without conflict. This test is the single place where
/// occupancy conflicts are decided; every surface (search, detail,
/// featured list, booking) must go through it.
pub trait Available {
    fn is_available_for(&self, requested: &StayPeriod) -> bool;
}

impl Available for RoomType {
    fn is_available_for(&self, requested: &StayPeriod) -> bool {
        match &self.occupied {
            // A room without an occupancy record is always bookable.
            None => true,
            Some(occupancy) => !occupancy.period.overlaps(requested),
        }
    }
}

impl Available for Hotel {
    fn is_available_for(&self, requested: &StayPeriod) -> bool {
        self.room_types
            .iter()
            .any(|rt| rt.is_available_for(requested))
    }
}
