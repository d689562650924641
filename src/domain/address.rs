use serde::{Deserialize, Serialize};

use crate::geo::{GeoPoint, Located};

/// A stored postal address. `id` is assigned by the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub id: i64,
    pub street: String,
    pub city: String,
    pub country: String,
    pub location: GeoPoint,
}

impl Located for AddressRecord {
    fn location(&self) -> GeoPoint {
        self.location
    }
}

/// An address that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAddress {
    pub street: String,
    pub city: String,
    pub country: String,
    pub location: GeoPoint,
}

impl NewAddress {
    pub fn into_record(self, id: i64) -> AddressRecord {
        AddressRecord {
            id,
            street: self.street,
            city: self.city,
            country: self.country,
            location: self.location,
        }
    }
}
