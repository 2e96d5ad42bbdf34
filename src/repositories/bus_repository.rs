use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::Bus;
use crate::utils::errors::AppError;

pub struct BusRepository {
    pool: PgPool,
}

impl BusRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, price: Decimal) -> Result<i32, AppError> {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO buses (price, status) VALUES ($1, TRUE) RETURNING id",
        )
        .bind(price)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating bus: {}", e)))?;

        Ok(id)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Bus>, AppError> {
        let bus = sqlx::query_as::<_, Bus>("SELECT * FROM buses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding bus: {}", e)))?;

        Ok(bus)
    }

    pub async fn find_all(&self) -> Result<Vec<Bus>, AppError> {
        let buses = sqlx::query_as::<_, Bus>("SELECT * FROM buses ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error listing buses: {}", e)))?;

        Ok(buses)
    }

    /// Reclama el autobús solo si sigue abierto. La comprobación y la
    /// escritura son una única sentencia condicional, así dos reservas
    /// simultáneas nunca pueden reclamar el mismo autobús.
    pub async fn claim_if_open(&self, id: i32) -> Result<bool, AppError> {
        let result =
            sqlx::query("UPDATE buses SET status = FALSE WHERE id = $1 AND status = TRUE")
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Error claiming bus: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn set_status(&self, id: i32, status: bool) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE buses SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error updating bus status: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn set_price(&self, id: i32, price: Decimal) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE buses SET price = $2 WHERE id = $1")
            .bind(id)
            .bind(price)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error updating bus price: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM buses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error deleting bus: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
