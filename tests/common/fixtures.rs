#![allow(dead_code)]

use address_proximity::api::dtos::CreateAddressRequest;
use address_proximity::domain::{AddressRecord, GeoPoint, NewAddress};

pub const PARIS: (f64, f64) = (48.8566, 2.3522);
pub const LONDON: (f64, f64) = (51.5074, -0.1278);
pub const BERLIN: (f64, f64) = (52.5200, 13.4050);

pub fn new_address(street: &str, city: &str, country: &str, at: (f64, f64)) -> NewAddress {
    NewAddress {
        street: street.to_string(),
        city: city.to_string(),
        country: country.to_string(),
        location: GeoPoint {
            latitude: at.0,
            longitude: at.1,
        },
    }
}

pub fn london() -> NewAddress {
    new_address("221B Baker Street", "London", "United Kingdom", LONDON)
}

pub fn berlin() -> NewAddress {
    new_address("Pariser Platz 1", "Berlin", "Germany", BERLIN)
}

pub fn paris() -> NewAddress {
    new_address("5 Avenue Anatole France", "Paris", "France", PARIS)
}

/// London, Berlin, Paris with ids 1, 2, 3.
pub fn european_capitals() -> Vec<AddressRecord> {
    vec![london(), berlin(), paris()]
        .into_iter()
        .zip(1..)
        .map(|(address, id)| address.into_record(id))
        .collect()
}

pub fn create_request(city: &str, at: (f64, f64)) -> CreateAddressRequest {
    CreateAddressRequest {
        street: format!("1 Main Street, {city}"),
        city: city.to_string(),
        country: "Testland".to_string(),
        latitude: at.0,
        longitude: at.1,
    }
}
