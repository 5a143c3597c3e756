use std::fmt;

// The Earth's radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Geographical position in degrees.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    pub fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        let res = Self { lat, lng };
        debug_assert!(res.is_valid());
        res
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }

    /// Great-circle distance in kilometers (haversine).
    pub fn distance_km(self, other: Self) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlat = (other.lat - self.lat).to_radians();
        let dlng = (other.lng - self.lng).to_radians();

        let a = (dlat / 2.0).sin() * (dlat / 2.0).sin()
            + lat1.cos() * lat2.cos() * (dlng / 2.0).sin() * (dlng / 2.0).sin();
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_between_identical_points_is_zero() {
        let p = MapPoint::from_lat_lng_deg(39.9, 116.4);
        assert!(p.distance_km(p) < f64::EPSILON);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = MapPoint::from_lat_lng_deg(39.9, 116.4);
        let b = MapPoint::from_lat_lng_deg(31.2, 121.5);
        let d1 = a.distance_km(b);
        let d2 = b.distance_km(a);
        assert!((d1 - d2).abs() < 1e-9);
        // Beijing - Shanghai is roughly 1000 km
        assert!(d1 > 900.0 && d1 < 1200.0);
    }

    #[test]
    fn validity() {
        assert!(MapPoint::from_lat_lng_deg(0.0, 0.0).is_valid());
        assert!(!MapPoint { lat: 91.0, lng: 0.0 }.is_valid());
        assert!(!MapPoint { lat: 0.0, lng: 181.0 }.is_valid());
    }
}
