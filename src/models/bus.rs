//! Modelo de Bus
//!
//! Registro de almacenamiento de un autobús. `status == true` significa
//! abierto (disponible para una nueva transacción); `false` significa
//! ocupado hasta que la tarea de reapertura lo libere.

use rust_decimal::Decimal;
use sqlx::FromRow;

/// Bus principal - mapea exactamente a la tabla buses
#[derive(Debug, Clone, FromRow)]
pub struct Bus {
    pub id: i32,
    pub price: Decimal,
    pub status: bool,
}
