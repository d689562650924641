pub mod address;

pub use address::{AddressRecord, NewAddress};
pub use crate::geo::GeoPoint;
