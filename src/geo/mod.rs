//! Geodesic distance on the WGS-84 ellipsoid and radius filtering built on
//! top of it. Everything here is pure: no I/O, no shared state.

mod distance;
pub mod ellipsoid;
mod error;
mod haversine;
mod point;
mod proximity;

pub use distance::{distance_km, measure, DistanceMethod, Measurement};
pub use error::{GeoError, GeoResult};
pub use haversine::haversine_km;
pub use point::{GeoPoint, Located, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
pub use proximity::{find_within, ProximityFilter, ProximityOutcome, ProximityStats};
