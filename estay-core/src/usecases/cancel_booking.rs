use super::prelude::*;

/// Cancel an active booking and release its room occupancy.
///
/// Allowed for the booking customer and for admins. Only the occupancy
/// that points back at this booking is cleared; an occupancy taken over
/// by a later booking stays untouched.
pub fn cancel_booking<D: Db>(db: &D, user: &User, id: &Id) -> Result<Booking> {
    let mut booking = db.get_booking(id.as_str())?;
    if booking.customer_id != user.id && user.role != Role::Admin {
        return Err(Error::Forbidden);
    }
    if !booking.status.is_active() {
        return Err(Error::BookingNotActive);
    }
    booking.status = BookingStatus::Cancelled;
    db.update_booking(&booking)?;

    let mut hotel = db.get_hotel(booking.hotel_id.as_str())?;
    let released = hotel.room_types.iter_mut().any(|rt| {
        let held_by_booking =
            matches!(&rt.occupied, Some(occupancy) if occupancy.booking_id == booking.id);
        if held_by_booking {
            rt.occupied = None;
        }
        held_by_booking
    });
    if released {
        db.update_hotel(&hotel)?;
    }
    log::info!("Cancelled booking {} of hotel {}", booking.id, hotel.id);
    Ok(booking)
}
