use async_trait::async_trait;

use crate::domain::{AddressRecord, NewAddress};
use crate::error::AppResult;

#[async_trait]
pub trait AddressRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<AddressRecord>>;
    /// Every stored address, ordered by id. This is the candidate set for
    /// proximity queries.
    async fn list_all(&self) -> AppResult<Vec<AddressRecord>>;
    async fn list(&self, limit: i64, offset: i64) -> AppResult<Vec<AddressRecord>>;
    async fn create(&self, address: &NewAddress) -> AppResult<AddressRecord>;
    /// Returns `true` when a row was removed.
    async fn delete(&self, id: i64) -> AppResult<bool>;
    async fn count_all(&self) -> AppResult<i64> {
        let all = self.list_all().await?;
        Ok(all.len() as i64)
    }
}
