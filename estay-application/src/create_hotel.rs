use super::*;

pub fn create_hotel(
    connections: &mem::Connections,
    user: &User,
    new_hotel: usecases::NewHotel,
) -> Result<Hotel> {
    let connection = connections.exclusive();
    let hotel = connection.transaction(|db| {
        usecases::create_new_hotel(db, user, new_hotel).map_err(TransactionError::Usecase)
    })?;
    Ok(hotel)
}
