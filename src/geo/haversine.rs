// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Latitude and longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Great-circle distance between two points, in kilometres.
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lat = lat2 - lat1;
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_point_is_zero() {
        let kyiv = Coordinates::new(50.4501, 30.5234);
        assert_eq!(haversine_km(kyiv, kyiv), 0.0);
    }

    #[test]
    fn test_quarter_meridian() {
        let equator = Coordinates::new(0.0, 0.0);
        let pole = Coordinates::new(90.0, 0.0);
        let expected = EARTH_RADIUS_KM * std::f64::consts::FRAC_PI_2;
        assert!((haversine_km(equator, pole) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_known_city_pair_is_symmetric() {
        let london = Coordinates::new(51.5074, -0.1278);
        let paris = Coordinates::new(48.8566, 2.3522);

        let there = haversine_km(london, paris);
        let back = haversine_km(paris, london);
        assert!((there - back).abs() < 1e-9);
        assert!((there - 343.5).abs() < 1.0, "got {}", there);
    }
}
