use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::Transaction;
use crate::utils::errors::AppError;

pub struct TransactionRepository {
    pool: PgPool,
}

impl TransactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: &str,
        client_type: i32,
        bus_id: i32,
        price: Decimal,
        date: DateTime<Utc>,
    ) -> Result<i32, AppError> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO transactions (name, client_type, price, date, bus_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(client_type)
        .bind(price)
        .bind(date)
        .bind(bus_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating transaction: {}", e)))?;

        Ok(id)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Transaction>, AppError> {
        let transaction =
            sqlx::query_as::<_, Transaction>("SELECT * FROM transactions WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Error finding transaction: {}", e)))?;

        Ok(transaction)
    }

    /// Listado completo, las transacciones más recientes primero
    pub async fn find_all(&self) -> Result<Vec<Transaction>, AppError> {
        let transactions =
            sqlx::query_as::<_, Transaction>("SELECT * FROM transactions ORDER BY id DESC")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Error listing transactions: {}", e)))?;

        Ok(transactions)
    }

    pub async fn find_by_bus(&self, bus_id: i32) -> Result<Vec<Transaction>, AppError> {
        let transactions =
            sqlx::query_as::<_, Transaction>("SELECT * FROM transactions WHERE bus_id = $1")
                .bind(bus_id)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    AppError::Database(format!("Error listing transactions by bus: {}", e))
                })?;

        Ok(transactions)
    }

    pub async fn find_by_client_type(
        &self,
        client_type: i32,
    ) -> Result<Vec<Transaction>, AppError> {
        let transactions =
            sqlx::query_as::<_, Transaction>("SELECT * FROM transactions WHERE client_type = $1")
                .bind(client_type)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    AppError::Database(format!("Error listing transactions by client type: {}", e))
                })?;

        Ok(transactions)
    }

    pub async fn find_by_date_range(
        &self,
        date_from: DateTime<Utc>,
        date_to: DateTime<Utc>,
    ) -> Result<Vec<Transaction>, AppError> {
        let transactions = sqlx::query_as::<_, Transaction>(
            "SELECT * FROM transactions WHERE date >= $1 AND date <= $2",
        )
        .bind(date_from)
        .bind(date_to)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing transactions by date: {}", e)))?;

        Ok(transactions)
    }

    pub async fn find_by_bus_and_date_range(
        &self,
        bus_id: i32,
        date_from: DateTime<Utc>,
        date_to: DateTime<Utc>,
    ) -> Result<Vec<Transaction>, AppError> {
        let transactions = sqlx::query_as::<_, Transaction>(
            "SELECT * FROM transactions WHERE bus_id = $1 AND date >= $2 AND date <= $3",
        )
        .bind(bus_id)
        .bind(date_from)
        .bind(date_to)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::Database(format!("Error listing transactions by bus and date: {}", e))
        })?;

        Ok(transactions)
    }
}
