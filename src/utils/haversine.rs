//! Great-circle distance and bearing between two geographic points.
//!
//! Both functions treat the Earth as a sphere of radius
//! [`EARTH_RADIUS_METERS`]. Good enough for deriving speed and heading
//! from consecutive positioning fixes; not a geodesic library.

use crate::types::point::GeoPoint;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Computes the great-circle distance between two points using the
/// haversine formula.
///
/// Symmetric and non-negative: `distance(a, b) == distance(b, a)` and
/// `distance(p, p) == 0`.
///
/// # Arguments
/// * `from` - One end of the arc.
/// * `to` - The other end of the arc.
///
/// # Returns
/// The distance in meters.
pub fn distance(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();
    let from_lat = from.latitude.to_radians();
    let to_lat = to.latitude.to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from_lat.cos() * to_lat.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Computes the initial compass bearing (forward azimuth) from `from`
/// toward `to`.
///
/// Not symmetric: the bearing from `to` back to `from` generally
/// differs by ~180 degrees plus meridian convergence. If the points
/// are identical, `atan2(0, 0)` decides the result (0 on this
/// platform); the degenerate case is deliberately not special-cased.
///
/// # Arguments
/// * `from` - The observer's position.
/// * `to` - The target position.
///
/// # Returns
/// The bearing in degrees, clockwise from true north, in [0, 360).
pub fn bearing(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let d_lon = (to.longitude - from.longitude).to_radians();
    let from_lat = from.latitude.to_radians();
    let to_lat = to.latitude.to_radians();

    let y = d_lon.sin() * to_lat.cos();
    let x = from_lat.cos() * to_lat.sin() - from_lat.sin() * to_lat.cos() * d_lon.cos();

    let bearing = y.atan2(x).to_degrees();
    if bearing < 0.0 {
        bearing + 360.0
    } else {
        bearing
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
