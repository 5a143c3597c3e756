use super::*;

/// Booking record and room occupancy are written in one transaction.
pub fn create_booking(
    connections: &mem::Connections,
    customer: &User,
    new_booking: usecases::NewBooking,
) -> Result<Booking> {
    let connection = connections.exclusive();
    let booking = connection.transaction(|db| {
        usecases::create_booking(db, customer, new_booking.clone())
            .map_err(TransactionError::Usecase)
    })?;
    Ok(booking)
}
