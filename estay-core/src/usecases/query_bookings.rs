use super::{authorize_hotel_owner, prelude::*};

/// The booking history of a customer, newest first.
pub fn bookings_of_customer<R>(repo: &R, user: &User) -> Result<Vec<Booking>>
where
    R: BookingRepo,
{
    let mut bookings = repo.bookings_of_customer(user.id.as_str())?;
    bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(bookings)
}

/// All bookings of a hotel, visible to its merchant and to admins.
pub fn bookings_of_hotel<D: Db>(db: &D, user: &User, hotel_id: &Id) -> Result<Vec<Booking>> {
    let hotel = db.get_hotel(hotel_id.as_str())?;
    authorize_hotel_owner(user, &hotel)?;
    let mut bookings = db.bookings_of_hotel(hotel_id.as_str())?;
    bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(bookings)
}
