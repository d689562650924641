#![allow(dead_code)]

use std::sync::Mutex;

use address_proximity::domain::{AddressRecord, NewAddress};
use address_proximity::error::{AppError, AppResult};
use address_proximity::infrastructure::repositories::AddressRepository;
use async_trait::async_trait;

/// In-memory store; ids continue from the largest seeded id.
#[derive(Default)]
pub struct MockAddressRepo {
    pub addresses: Mutex<Vec<AddressRecord>>,
}

impl MockAddressRepo {
    pub fn with(addresses: Vec<AddressRecord>) -> Self {
        Self {
            addresses: Mutex::new(addresses),
        }
    }

    pub fn push(&self, address: AddressRecord) {
        self.addresses
            .lock()
            .expect("addresses mutex poisoned")
            .push(address);
    }

    pub fn len(&self) -> usize {
        self.addresses
            .lock()
            .expect("addresses mutex poisoned")
            .len()
    }
}

#[async_trait]
impl AddressRepository for MockAddressRepo {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<AddressRecord>> {
        Ok(self
            .addresses
            .lock()
            .expect("addresses mutex poisoned")
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn list_all(&self) -> AppResult<Vec<AddressRecord>> {
        Ok(self
            .addresses
            .lock()
            .expect("addresses mutex poisoned")
            .clone())
    }

    async fn list(&self, limit: i64, offset: i64) -> AppResult<Vec<AddressRecord>> {
        Ok(self
            .addresses
            .lock()
            .expect("addresses mutex poisoned")
            .iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn create(&self, address: &NewAddress) -> AppResult<AddressRecord> {
        let mut addresses = self.addresses.lock().expect("addresses mutex poisoned");
        let id = addresses.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let record = address.clone().into_record(id);
        addresses.push(record.clone());
        Ok(record)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut addresses = self.addresses.lock().expect("addresses mutex poisoned");
        let before = addresses.len();
        addresses.retain(|a| a.id != id);
        Ok(addresses.len() < before)
    }
}

/// Repository whose every call fails, for error-path tests.
pub struct FailingAddressRepo;

#[async_trait]
impl AddressRepository for FailingAddressRepo {
    async fn find_by_id(&self, _id: i64) -> AppResult<Option<AddressRecord>> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn list_all(&self) -> AppResult<Vec<AddressRecord>> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn list(&self, _limit: i64, _offset: i64) -> AppResult<Vec<AddressRecord>> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn create(&self, _address: &NewAddress) -> AppResult<AddressRecord> {
        Err(AppError::InternalError(anyhow::anyhow!("insert failed")))
    }

    async fn delete(&self, _id: i64) -> AppResult<bool> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}
