use super::*;

pub fn update_hotel(
    connections: &mem::Connections,
    user: &User,
    id: &Id,
    update: usecases::UpdateHotel,
) -> Result<Hotel> {
    let connection = connections.exclusive();
    let hotel = connection.transaction(|db| {
        usecases::update_hotel(db, user, id, update.clone()).map_err(TransactionError::Usecase)
    })?;
    Ok(hotel)
}
