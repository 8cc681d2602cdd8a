//! Geographic Math Helper Library.
//! Handles distance, bearing, and speed-smoothing tasks for a
//! location-tracking client.

pub mod types {
    pub mod point;
}

pub mod utils {
    pub mod haversine;
    pub mod smoothing;
}

pub use types::point::GeoPoint;
pub use utils::haversine;
pub use utils::smoothing::dynamic_smoothing;
