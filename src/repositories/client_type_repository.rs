use sqlx::PgPool;

use crate::models::ClientType;
use crate::utils::errors::AppError;

pub struct ClientTypeRepository {
    pool: PgPool,
}

impl ClientTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, client_name: &str, discount: i32) -> Result<i32, AppError> {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO client_types (client_name, discount) VALUES ($1, $2) RETURNING id",
        )
        .bind(client_name)
        .bind(discount)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating client type: {}", e)))?;

        Ok(id)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ClientType>, AppError> {
        let client_type =
            sqlx::query_as::<_, ClientType>("SELECT * FROM client_types WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Error finding client type: {}", e)))?;

        Ok(client_type)
    }

    pub async fn find_all(&self) -> Result<Vec<ClientType>, AppError> {
        let client_types =
            sqlx::query_as::<_, ClientType>("SELECT * FROM client_types ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Error listing client types: {}", e)))?;

        Ok(client_types)
    }

    pub async fn set_discount(&self, id: i32, discount: i32) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE client_types SET discount = $2 WHERE id = $1")
            .bind(id)
            .bind(discount)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error updating discount: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
