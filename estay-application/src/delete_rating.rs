use super::*;

pub fn delete_rating(connections: &mem::Connections, user: &User, id: &Id) -> Result<()> {
    let connection = connections.exclusive();
    run_with_retry(|| {
        connection.transaction(|db| {
            let hotel_id =
                usecases::delete_rating(db, user, id).map_err(TransactionError::Usecase)?;
            usecases::recompute_rating_aggregate(db, &hotel_id)
                .map_err(TransactionError::Usecase)?;
            Ok(())
        })
    })?;
    Ok(())
}
