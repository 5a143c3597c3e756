use crate::entities::*;

pub trait Rated {
    fn rating_aggregate(&self, _: &[Rating]) -> RatingAggregate;
}

impl Rated for Hotel {
    fn rating_aggregate(&self, ratings: &[Rating]) -> RatingAggregate {
        debug_assert_eq!(
            ratings.len(),
            ratings.iter().filter(|r| r.hotel_id == self.id).count()
        );
        ratings
            .iter()
            .fold(RatingAggregateBuilder::default(), |mut acc, r| {
                acc.add(r.value);
                acc
            })
            .build()
    }
}
