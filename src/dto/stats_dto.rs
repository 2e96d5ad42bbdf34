use chrono::{DateTime, Utc};
use serde::Deserialize;

// Filtro por autobús y ventana temporal (inclusive en ambos extremos)
#[derive(Debug, Deserialize)]
pub struct BusDateFilter {
    pub bus_id: i32,
    pub date_from: DateTime<Utc>,
    pub date_to: DateTime<Utc>,
}
