//! Planificador de reapertura diferida
//!
//! Cada reserva aceptada programa una tarea desacoplada del request que,
//! tras el retardo configurado, vuelve a abrir el autobús. La tarea no
//! se puede cancelar: frente a un override administrativo gana el último
//! que escribe. Los resultados se registran siempre en el log.

use std::time::Duration;

use sqlx::PgPool;
use tracing::{error, info, warn};

use crate::repositories::BusRepository;

/// Programa la reapertura del autobús tras `delay`. Devuelve de inmediato;
/// el handler que reserva nunca espera a esta tarea.
pub fn schedule_reopen(pool: PgPool, bus_id: i32, delay: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        let repository = BusRepository::new(pool);
        match repository.set_status(bus_id, true).await {
            Ok(true) => info!("🚌 Autobús {} reabierto tras el cooldown", bus_id),
            Ok(false) => warn!("Autobús {} ya no existe, reapertura omitida", bus_id),
            Err(e) => error!("Error reabriendo el autobús {}: {}", bus_id, e),
        }
    });
}
