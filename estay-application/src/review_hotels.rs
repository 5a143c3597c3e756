use super::*;

/// Apply an admin review decision to a batch of listings and notify
/// subscribers (e.g. the merchants' dashboards) afterwards.
///
/// The decision is transactional; the notification is best-effort and
/// happens only after the commit.
pub fn review_hotels(
    connections: &mem::Connections,
    notify: &dyn NotificationGateway,
    ids: &[&str],
    review: usecases::HotelReview,
) -> Result<usize> {
    let connection = connections.exclusive();
    let (count, hotels) = connection.transaction(|db| {
        let count =
            usecases::review_hotels(db, ids, review.clone()).map_err(TransactionError::Usecase)?;
        let mut hotels = Vec::with_capacity(ids.len());
        for id in ids {
            let hotel = db
                .get_hotel(id)
                .map_err(|err| TransactionError::Usecase(err.into()))?;
            hotels.push(hotel);
        }
        Ok::<_, TransactionError>((count, hotels))
    })?;
    for hotel in &hotels {
        notify.hotel_reviewed(hotel);
    }
    Ok(count)
}
