//! Conexión a PostgreSQL
//!
//! Este módulo envuelve el pool de conexiones de SQLx.

use anyhow::Result;
use sqlx::PgPool;

use crate::config::database::DatabaseConfig;

/// Conexión compartida a la base de datos
#[derive(Clone)]
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Crear la conexión con la configuración por defecto (DATABASE_URL)
    pub async fn new_default() -> Result<Self> {
        let config = DatabaseConfig::default();
        let pool = config.create_pool().await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
