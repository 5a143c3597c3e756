use super::*;

pub fn cancel_booking(connections: &mem::Connections, user: &User, id: &Id) -> Result<Booking> {
    let connection = connections.exclusive();
    let booking = connection.transaction(|db| {
        usecases::cancel_booking(db, user, id).map_err(TransactionError::Usecase)
    })?;
    Ok(booking)
}
