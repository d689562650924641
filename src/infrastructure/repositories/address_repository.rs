use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{AddressRecord, GeoPoint, NewAddress};
use crate::error::AppResult;

use super::traits::AddressRepository;

const ADDRESS_COLUMNS: &str = "id, street, city, country, latitude, longitude";

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AddressRow {
    pub id: i64,
    pub street: String,
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<AddressRow> for AddressRecord {
    // Stored coordinates are taken as-is; a corrupted row is reported when a
    // query computes with it.
    fn from(row: AddressRow) -> Self {
        AddressRecord {
            id: row.id,
            street: row.street,
            city: row.city,
            country: row.country,
            location: GeoPoint {
                latitude: row.latitude,
                longitude: row.longitude,
            },
        }
    }
}

pub struct AddressRepositoryImpl {
    pool: PgPool,
}

impl AddressRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AddressRepository for AddressRepositoryImpl {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<AddressRecord>> {
        let row = sqlx::query_as::<_, AddressRow>(&format!(
            "SELECT {ADDRESS_COLUMNS} FROM addresses WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(AddressRecord::from))
    }

    async fn list_all(&self) -> AppResult<Vec<AddressRecord>> {
        let rows = sqlx::query_as::<_, AddressRow>(&format!(
            "SELECT {ADDRESS_COLUMNS} FROM addresses ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(AddressRecord::from).collect())
    }

    async fn list(&self, limit: i64, offset: i64) -> AppResult<Vec<AddressRecord>> {
        let rows = sqlx::query_as::<_, AddressRow>(&format!(
            "SELECT {ADDRESS_COLUMNS} FROM addresses ORDER BY id ASC LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(AddressRecord::from).collect())
    }

    async fn create(&self, address: &NewAddress) -> AppResult<AddressRecord> {
        let row = sqlx::query_as::<_, AddressRow>(&format!(
            "INSERT INTO addresses (street, city, country, latitude, longitude)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {ADDRESS_COLUMNS}"
        ))
        .bind(&address.street)
        .bind(&address.city)
        .bind(&address.country)
        .bind(address.location.latitude)
        .bind(address.location.longitude)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM addresses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count_all(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM addresses")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
