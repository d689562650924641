pub mod address_dto;
pub mod common;

pub use address_dto::*;
pub use common::*;
