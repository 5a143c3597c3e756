use crate::{id::*, time::*};

/// A single rating score, integer in the range 0..=5.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct RatingValue(i8);

impl RatingValue {
    pub fn new<I: Into<i8>>(val: I) -> Self {
        let new = Self(val.into());
        debug_assert!(new.is_valid());
        new
    }

    pub const fn min() -> Self {
        Self(0)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    pub fn clamp(self) -> Self {
        Self(self.0.max(Self::min().0).min(Self::max().0))
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

impl From<i8> for RatingValue {
    fn from(from: i8) -> Self {
        Self(from)
    }
}

impl From<RatingValue> for i8 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for f64 {
    fn from(from: RatingValue) -> Self {
        f64::from(from.0)
    }
}

/// Mean of rating scores.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct AvgRatingValue(f64);

impl AvgRatingValue {
    pub const fn min() -> Self {
        Self(0.0)
    }

    pub const fn max() -> Self {
        Self(5.0)
    }

    pub fn clamp(self) -> Self {
        Self(self.0.max(Self::min().0).min(Self::max().0))
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

impl From<f64> for AvgRatingValue {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<AvgRatingValue> for f64 {
    fn from(from: AvgRatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for AvgRatingValue {
    fn from(from: RatingValue) -> Self {
        f64::from(i8::from(from)).into()
    }
}

/// Derived rating statistics stored on a hotel.
///
/// `average` is `None` iff `count` is zero.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RatingAggregate {
    pub average: Option<AvgRatingValue>,
    pub count: u64,
}

impl RatingAggregate {
    pub fn has_ratings(&self) -> bool {
        debug_assert_eq!(self.average.is_some(), self.count > 0);
        self.count > 0
    }
}

#[derive(Debug, Default, Clone)]
pub struct RatingAggregateBuilder {
    acc: i64,
    cnt: u64,
}

impl RatingAggregateBuilder {
    pub fn add(&mut self, val: RatingValue) {
        debug_assert!(val.is_valid());
        self.acc += i64::from(i8::from(val));
        self.cnt += 1;
    }

    pub fn build(self) -> RatingAggregate {
        if self.cnt > 0 {
            RatingAggregate {
                average: Some(AvgRatingValue::from(self.acc as f64 / self.cnt as f64).clamp()),
                count: self.cnt,
            }
        } else {
            Default::default()
        }
    }
}

impl std::ops::AddAssign<RatingValue> for RatingAggregateBuilder {
    fn add_assign(&mut self, rhs: RatingValue) {
        self.add(rhs);
    }
}

/// A user's rating of a hotel. The (hotel, user) pair is unique.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    pub id         : Id,
    pub hotel_id   : Id,
    pub user_id    : Id,
    pub created_at : Timestamp,
    pub value      : RatingValue,
    pub comment    : Option<String>,
}
