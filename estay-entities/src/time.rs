use std::fmt;

use time::OffsetDateTime;

/// UTC timestamp with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    pub const fn from_milliseconds(milliseconds: i64) -> Self {
        Self(milliseconds)
    }

    pub const fn from_seconds(seconds: i64) -> Self {
        Self(seconds * 1000)
    }

    pub const fn into_milliseconds(self) -> i64 {
        self.0
    }

    pub const fn into_seconds(self) -> i64 {
        self.0 / 1000
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self((from.unix_timestamp_nanos() / 1_000_000) as i64)
    }
}

impl TryFrom<Timestamp> for OffsetDateTime {
    type Error = time::error::ComponentRange;
    fn try_from(from: Timestamp) -> Result<Self, Self::Error> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(from.0) * 1_000_000)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match OffsetDateTime::try_from(*self) {
            Ok(dt) => write!(f, "{dt}"),
            Err(_) => write!(f, "{} ms", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_from_into_milliseconds() {
        let t1 = Timestamp::now();
        let ms = t1.into_milliseconds();
        let t2 = Timestamp::from_milliseconds(ms);
        assert_eq!(t1, t2);
    }

    #[test]
    fn seconds_precision_is_truncated() {
        let t = Timestamp::from_milliseconds(1999);
        assert_eq!(1, t.into_seconds());
        assert_eq!(Timestamp::from_seconds(1), Timestamp::from_milliseconds(1000));
    }
}
