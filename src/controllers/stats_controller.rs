use num_traits::ToPrimitive;
use sqlx::PgPool;

use crate::dto::stats_dto::BusDateFilter;
use crate::repositories::TransactionRepository;
use crate::services::stats_service;
use crate::utils::errors::{validation_error, AppError};

pub struct StatsController {
    transactions: TransactionRepository,
}

impl StatsController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            transactions: TransactionRepository::new(pool),
        }
    }

    /// Ingresos totales del autobús dentro de la ventana, extremos incluidos
    pub async fn total_price(&self, filter: BusDateFilter) -> Result<f64, AppError> {
        let transactions = self
            .transactions
            .find_by_bus_and_date_range(filter.bus_id, filter.date_from, filter.date_to)
            .await?;

        let total = stats_service::total_price(&transactions);
        Ok(total.to_f64().unwrap_or(0.0))
    }

    /// Precio medio de todas las transacciones del autobús; 0 sin datos
    pub async fn average_price(&self, bus_id: i32) -> Result<f64, AppError> {
        let transactions = self.transactions.find_by_bus(bus_id).await?;

        let average = stats_service::average_price(&transactions);
        Ok(average.to_f64().unwrap_or(0.0))
    }

    /// Tasa de pasajeros por hora dentro de la ventana. Una ventana vacía
    /// o invertida se rechaza antes de tocar la base de datos.
    pub async fn human_count(&self, filter: BusDateFilter) -> Result<f64, AppError> {
        if filter.date_to <= filter.date_from {
            return Err(validation_error(
                "date_to",
                "la ventana temporal está vacía o invertida",
            ));
        }

        let transactions = self
            .transactions
            .find_by_bus_and_date_range(filter.bus_id, filter.date_from, filter.date_to)
            .await?;

        Ok(stats_service::throughput_per_hour(
            transactions.len(),
            filter.date_from,
            filter.date_to,
        ))
    }
}
