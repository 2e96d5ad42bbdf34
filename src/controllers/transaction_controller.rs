//! Máquina de estados de ocupación
//!
//! Estados por autobús: abierto (`status == true`) y ocupado
//! (`status == false`). Una reserva reclama el autobús con una única
//! actualización condicional, registra la transacción con el precio
//! calculado en ese instante y programa la reapertura diferida.

use std::time::Duration;

use chrono::Utc;
use sqlx::PgPool;
use tracing::{error, info};
use validator::Validate;

use crate::dto::transaction_dto::{NewTransactionRequest, TransactionView};
use crate::repositories::{BusRepository, ClientTypeRepository, TransactionRepository};
use crate::services::{pricing_service, reopen_service};
use crate::utils::errors::AppError;

pub struct TransactionController {
    pool: PgPool,
    transactions: TransactionRepository,
    buses: BusRepository,
    client_types: ClientTypeRepository,
    reopen_delay: Duration,
}

impl TransactionController {
    pub fn new(pool: PgPool, reopen_delay: Duration) -> Self {
        Self {
            transactions: TransactionRepository::new(pool.clone()),
            buses: BusRepository::new(pool.clone()),
            client_types: ClientTypeRepository::new(pool.clone()),
            pool,
            reopen_delay,
        }
    }

    /// Reserva: valida que el autobús está abierto, calcula el precio con
    /// el descuento de la categoría, registra la transacción y deja el
    /// autobús ocupado hasta que la tarea de reapertura lo libere.
    pub async fn reserve(&self, request: NewTransactionRequest) -> Result<i32, AppError> {
        request.validate()?;

        let bus = self
            .buses
            .find_by_id(request.bus_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Autobús {} no encontrado", request.bus_id))
            })?;

        if !bus.status {
            return Err(AppError::Conflict("El autobús está ocupado".to_string()));
        }

        let client_type = self
            .client_types
            .find_by_id(request.client_type)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Categoría de cliente {} no encontrada",
                    request.client_type
                ))
            })?;

        // Precio fijado con el autobús y la categoría tal como existen ahora
        let price = pricing_service::compute_price(bus.price, client_type.discount);

        // Reclamación atómica: si otra reserva llegó primero, rows_affected
        // es 0 y no se registra nada
        let claimed = self.buses.claim_if_open(request.bus_id).await?;
        if !claimed {
            return Err(AppError::Conflict("El autobús está ocupado".to_string()));
        }

        let transaction_id = match self
            .transactions
            .create(&request.name, request.client_type, request.bus_id, price, Utc::now())
            .await
        {
            Ok(id) => id,
            Err(e) => {
                // La reclamación ya ocupó el autobús: liberarlo antes de
                // propagar el fallo de escritura
                if let Err(release_err) = self.buses.set_status(request.bus_id, true).await {
                    error!(
                        "Error liberando el autobús {} tras un fallo de escritura: {}",
                        request.bus_id, release_err
                    );
                }
                return Err(e);
            }
        };

        info!(
            "🎫 Transacción {} registrada: autobús {} ocupado, reapertura en {:?}",
            transaction_id, request.bus_id, self.reopen_delay
        );

        reopen_service::schedule_reopen(self.pool.clone(), request.bus_id, self.reopen_delay);

        Ok(transaction_id)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<TransactionView, AppError> {
        let transaction = self
            .transactions
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Transacción {} no encontrada", id)))?;

        Ok(TransactionView::from(transaction))
    }

    /// Listado completo, las más recientes primero
    pub async fn list(&self) -> Result<Vec<TransactionView>, AppError> {
        let transactions = self.transactions.find_all().await?;
        Ok(transactions.into_iter().map(TransactionView::from).collect())
    }
}
