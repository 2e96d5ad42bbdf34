//! Repositorios de acceso a datos
//!
//! Cada repositorio encapsula todo el SQL de una entidad. Cada operación
//! es atómica por sí sola; el núcleo no asume transacciones SQL que
//! abarquen varias sentencias.

pub mod bus_repository;
pub mod client_type_repository;
pub mod transaction_repository;

pub use bus_repository::BusRepository;
pub use client_type_repository::ClientTypeRepository;
pub use transaction_repository::TransactionRepository;
