use crate::availability::Available;

use super::{authorize_role, prelude::*};

#[derive(Debug, Clone)]
pub struct NewBooking {
    pub hotel_id: Id,
    pub room_type: String,
    pub stay: StayPeriod,
    pub room_count: u32,
}

/// Book a room type for a stay.
///
/// Only published hotels accept bookings. The availability check uses the
/// same half-open interval comparison as the search filter, so a stay that
/// starts on the day an earlier guest checks out goes through. On success
/// the room type carries the new occupancy and the booking is confirmed.
pub fn create_booking<D: Db>(db: &D, customer: &User, new_booking: NewBooking) -> Result<Booking> {
    authorize_role(customer, Role::Customer)?;
    let NewBooking {
        hotel_id,
        room_type,
        stay,
        room_count,
    } = new_booking;
    if room_count < 1 {
        return Err(Error::RoomCount);
    }

    let mut hotel = db.get_hotel(hotel_id.as_str())?;
    if hotel.status != PublicationStatus::Published {
        return Err(Error::NotBookable);
    }
    let room = hotel
        .room_type(&room_type)
        .ok_or(Error::RoomTypeNotFound)?;
    if !room.is_available_for(&stay) {
        return Err(Error::RoomOccupied);
    }

    let total_price = room.nightly_price * f64::from(stay.nights()) * f64::from(room_count);
    let booking = Booking {
        id: Id::new(),
        customer_id: customer.id.clone(),
        hotel_id: hotel.id.clone(),
        stay,
        room_type: room_type.clone(),
        room_count,
        total_price,
        status: BookingStatus::Confirmed,
        created_at: Timestamp::now(),
    };

    // Checked above that the room type exists.
    if let Some(room) = hotel.room_type_mut(&room_type) {
        room.occupied = Some(Occupancy {
            period: stay,
            booking_id: booking.id.clone(),
            customer_id: customer.id.clone(),
        });
    }
    db.update_hotel(&hotel)?;
    db.create_booking(booking.clone())?;
    log::info!(
        "Created booking {} for hotel {} ({})",
        booking.id,
        hotel.id,
        room_type
    );
    Ok(booking)
}
