//! Modelos del sistema
//!
//! Este módulo contiene los registros de almacenamiento que mapean
//! exactamente al schema PostgreSQL. Las vistas públicas de cada
//! entidad viven en `dto/` con su mapeo explícito.

pub mod bus;
pub mod client_type;
pub mod transaction;

pub use bus::Bus;
pub use client_type::ClientType;
pub use transaction::Transaction;
