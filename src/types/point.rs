//! Struct definitions and implementations for [`GeoPoint`].

use serde::{Deserialize, Serialize};

/// A [`GeoPoint`] represents a geographic position as reported by a
/// positioning fix.
///
/// Coordinates are plain degree values. No range enforcement is done
/// here: a fix beyond ±90/±180 still flows through the math functions
/// and produces a mathematically defined result. Callers create these
/// transiently per call; nothing in this crate stores them.
///
/// `f64` is used because fixes arrive as double-precision values and
/// the derived distances must not lose precision to a narrower float.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a point from latitude/longitude degrees.
    pub fn new(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint {
            latitude,
            longitude,
        }
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------

#[cfg(test)]
mod point_tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        let p1 = GeoPoint::new(40.730610, -73.935242);
        let p2 = GeoPoint {
            latitude: 40.730610,
            longitude: -73.935242,
        };
        assert_eq!(p1, p2);
    }

    #[test]
    fn test_serde_round_trip() {
        let p = GeoPoint::new(37.7749, -122.4194);
        let json = serde_json::to_string(&p).unwrap();
        let back: GeoPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    /// Out-of-range coordinates are accepted as-is.
    #[test]
    fn test_no_range_enforcement() {
        let p = GeoPoint::new(120.0, 500.0);
        assert_eq!(p.latitude, 120.0);
        assert_eq!(p.longitude, 500.0);
    }
}
