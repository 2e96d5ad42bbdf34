use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Transaction;

// Request para registrar una reserva (transacción de ocupación)
#[derive(Debug, Deserialize, Validate)]
pub struct NewTransactionRequest {
    #[validate(length(min = 1))]
    pub name: String,
    pub client_type: i32,
    pub bus_id: i32,
}

// Vista pública de una transacción
#[derive(Debug, Serialize)]
pub struct TransactionView {
    pub id: i32,
    pub name: String,
    pub client_type: i32,
    pub price: f64,
    pub date: DateTime<Utc>,
    pub bus_id: i32,
}

impl From<Transaction> for TransactionView {
    fn from(transaction: Transaction) -> Self {
        Self {
            id: transaction.id,
            name: transaction.name,
            client_type: transaction.client_type,
            price: transaction.price.to_f64().unwrap_or(0.0),
            date: transaction.date,
            bus_id: transaction.bus_id,
        }
    }
}
