use super::*;

/// Store a new rating and synchronously recompute the hotel aggregate.
///
/// Both writes happen in one transaction: readers either see the new
/// rating together with the updated aggregate or neither of them.
pub fn create_rating(
    connections: &mem::Connections,
    rate_hotel: usecases::RateHotel,
) -> Result<Rating> {
    let connection = connections.exclusive();
    let rating = run_with_retry(|| {
        connection.transaction(|db| {
            let storable = usecases::prepare_new_rating(db, rate_hotel.clone())
                .map_err(TransactionError::Usecase)?;
            let hotel_id = storable.hotel_id().clone();
            let rating = usecases::store_new_rating(db, storable).map_err(|err| {
                warn!("Failed to store new rating: {err}");
                TransactionError::Rollback
            })?;
            usecases::recompute_rating_aggregate(db, &hotel_id)
                .map_err(TransactionError::Usecase)?;
            Ok(rating)
        })
    })?;
    Ok(rating)
}
