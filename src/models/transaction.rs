//! Modelo de Transaction
//!
//! Registro inmutable de un pago de pasaje. El precio se calcula en el
//! momento de la creación y nunca se recalcula aunque cambien el precio
//! del autobús o el descuento de la categoría.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Transaction principal - mapea exactamente a la tabla transactions
#[derive(Debug, Clone, FromRow)]
pub struct Transaction {
    pub id: i32,
    pub name: String,
    pub client_type: i32,
    pub price: Decimal,
    pub date: DateTime<Utc>,
    pub bus_id: i32,
}
