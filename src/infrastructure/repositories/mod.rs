mod address_repository;
mod traits;

pub use address_repository::{AddressRepositoryImpl, AddressRow};
pub use traits::AddressRepository;
