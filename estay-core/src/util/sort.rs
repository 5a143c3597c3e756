use std::cmp::Ordering;

use crate::entities::*;

/// Default ordering of hotels when no explicit sort is requested.
///
/// Descending by, in priority order: has a rating at all, average rating,
/// star rating, creation time. Rated hotels always rank above unrated ones
/// regardless of their star class.
pub fn recommendation_cmp(a: &Hotel, b: &Hotel) -> Ordering {
    b.rating
        .average
        .is_some()
        .cmp(&a.rating.average.is_some())
        .then_with(|| {
            b.rating
                .average
                .partial_cmp(&a.rating.average)
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| b.star_rating.cmp(&a.star_rating))
        .then_with(|| b.created_at.cmp(&a.created_at))
}

pub trait SortByRecommendation {
    fn sort_by_recommendation(&mut self);
}

impl SortByRecommendation for [Hotel] {
    fn sort_by_recommendation(&mut self) {
        // Stable, so fully-tied hotels retain their input order.
        self.sort_by(recommendation_cmp);
    }
}

pub trait SortByDistanceTo {
    fn sort_by_distance_to(&mut self, origin: MapPoint);
}

impl SortByDistanceTo for [Hotel] {
    fn sort_by_distance_to(&mut self, origin: MapPoint) {
        self.sort_by(|a, b| {
            a.pos
                .distance_km(origin)
                .partial_cmp(&b.pos.distance_km(origin))
                .unwrap_or(Ordering::Equal)
        });
    }
}
