use thiserror::Error;
use time::Date;

/// Half-open date interval `[check_in, check_out)`.
///
/// The checkout day is exclusive, matching the hotel industry convention:
/// a room vacated on the morning of day X can be re-occupied that same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StayPeriod {
    check_in: Date,
    check_out: Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("The check-out date is not after the check-in date")]
pub struct InvalidStayPeriod;

impl StayPeriod {
    pub fn new(check_in: Date, check_out: Date) -> Result<Self, InvalidStayPeriod> {
        if check_out <= check_in {
            return Err(InvalidStayPeriod);
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    pub const fn check_in(&self) -> Date {
        self.check_in
    }

    pub const fn check_out(&self) -> Date {
        self.check_out
    }

    /// Half-open overlap test.
    ///
    /// Touching boundaries (`self.check_out == other.check_in` or vice
    /// versa) do not overlap, i.e. back-to-back stays are legal.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.check_in < other.check_out && self.check_out > other.check_in
    }

    pub fn nights(&self) -> u32 {
        (self.check_out - self.check_in).whole_days() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn stay(check_in: Date, check_out: Date) -> StayPeriod {
        StayPeriod::new(check_in, check_out).unwrap()
    }

    #[test]
    fn rejects_empty_and_inverted_ranges() {
        assert_eq!(
            Err(InvalidStayPeriod),
            StayPeriod::new(date!(2026 - 02 - 24), date!(2026 - 02 - 24))
        );
        assert_eq!(
            Err(InvalidStayPeriod),
            StayPeriod::new(date!(2026 - 02 - 26), date!(2026 - 02 - 24))
        );
    }

    #[test]
    fn touching_ranges_do_not_overlap() {
        let occupied = stay(date!(2026 - 02 - 24), date!(2026 - 02 - 26));
        let back_to_back = stay(date!(2026 - 02 - 26), date!(2026 - 02 - 27));
        assert!(!occupied.overlaps(&back_to_back));
        assert!(!back_to_back.overlaps(&occupied));

        let before = stay(date!(2026 - 02 - 20), date!(2026 - 02 - 24));
        assert!(!occupied.overlaps(&before));
    }

    #[test]
    fn contained_and_identical_ranges_overlap() {
        let occupied = stay(date!(2026 - 02 - 24), date!(2026 - 02 - 26));
        let inside = stay(date!(2026 - 02 - 24), date!(2026 - 02 - 25));
        assert!(occupied.overlaps(&inside));
        assert!(inside.overlaps(&occupied));
        assert!(occupied.overlaps(&occupied));
    }

    #[test]
    fn partial_overlaps_are_detected() {
        let occupied = stay(date!(2026 - 02 - 24), date!(2026 - 02 - 26));
        let left = stay(date!(2026 - 02 - 22), date!(2026 - 02 - 25));
        let right = stay(date!(2026 - 02 - 25), date!(2026 - 02 - 28));
        let around = stay(date!(2026 - 02 - 22), date!(2026 - 02 - 28));
        assert!(occupied.overlaps(&left));
        assert!(occupied.overlaps(&right));
        assert!(occupied.overlaps(&around));
    }

    #[test]
    fn night_count() {
        let one = stay(date!(2026 - 02 - 24), date!(2026 - 02 - 25));
        let two = stay(date!(2026 - 02 - 24), date!(2026 - 02 - 26));
        assert_eq!(1, one.nights());
        assert_eq!(2, two.nights());
    }
}
