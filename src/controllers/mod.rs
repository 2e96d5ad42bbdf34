//! Controladores de la aplicación
//!
//! Orquestan repositorios y servicios por entidad. El controlador de
//! transacciones contiene la máquina de estados de ocupación.

pub mod bus_controller;
pub mod client_type_controller;
pub mod stats_controller;
pub mod transaction_controller;
