use super::*;

pub fn update_rating(
    connections: &mem::Connections,
    user: &User,
    id: &Id,
    update: usecases::UpdateRating,
) -> Result<Rating> {
    let connection = connections.exclusive();
    let rating = run_with_retry(|| {
        connection.transaction(|db| {
            let rating = usecases::update_rating(db, user, id, update.clone())
                .map_err(TransactionError::Usecase)?;
            usecases::recompute_rating_aggregate(db, &rating.hotel_id)
                .map_err(TransactionError::Usecase)?;
            Ok(rating)
        })
    })?;
    Ok(rating)
}
