use super::*;

pub fn change_publication(
    connections: &mem::Connections,
    user: &User,
    id: &Id,
    status: PublicationStatus,
) -> Result<Hotel> {
    let connection = connections.exclusive();
    let hotel = connection.transaction(|db| {
        usecases::change_publication(db, user, id, status).map_err(TransactionError::Usecase)
    })?;
    Ok(hotel)
}
