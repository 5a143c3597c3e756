use crate::rating::Rated;

use super::prelude::*;

/// Recompute and store the rating aggregate of a hotel from its ratings.
///
/// Must be invoked after every rating write so the stored aggregate never
/// goes stale. With no ratings left the aggregate reverts to the empty
/// state (no average, count zero).
pub fn recompute_rating_aggregate<D: Db>(db: &D, hotel_id: &Id) -> Result<RatingAggregate> {
    let hotel = db.get_hotel(hotel_id.as_str())?;
    let ratings = db.ratings_of_hotel(hotel_id.as_str())?;
    let aggregate = hotel.rating_aggregate(&ratings);
    db.update_rating_aggregate(hotel_id.as_str(), aggregate)?;
    Ok(aggregate)
}

#[cfg(test)]
mod tests {
    use super::super::tests::{new_rating, MockDb};
    use super::*;
    use estay_entities::builders::*;

    #[test]
    fn aggregate_is_the_mean_of_all_ratings() {
        let db = MockDb::default();
        db.hotels.borrow_mut().push(Hotel::build().id("h").finish());
        db.ratings.borrow_mut().push(new_rating("r1", "h", "a", 4));
        db.ratings.borrow_mut().push(new_rating("r2", "h", "b", 5));
        // A rating of another hotel does not count
        db.ratings
            .borrow_mut()
            .push(new_rating("r3", "other", "a", 1));

        let aggregate = recompute_rating_aggregate(&db, &"h".into()).unwrap();
        assert_eq!(Some(AvgRatingValue::from(4.5)), aggregate.average);
        assert_eq!(2, aggregate.count);
        assert_eq!(aggregate, db.hotels.borrow()[0].rating);
    }

    #[test]
    fn aggregate_reverts_to_empty_when_the_last_rating_goes() {
        let db = MockDb::default();
        let mut hotel = Hotel::build().id("h").finish();
        hotel.rating = RatingAggregate {
            average: Some(4.0.into()),
            count: 1,
        };
        db.hotels.borrow_mut().push(hotel);

        let aggregate = recompute_rating_aggregate(&db, &"h".into()).unwrap();
        assert_eq!(None, aggregate.average);
        assert_eq!(0, aggregate.count);
        assert!(!db.hotels.borrow()[0].rating.has_ratings());
    }
}
