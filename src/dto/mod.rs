//! DTOs del sistema
//!
//! Este módulo contiene las formas públicas de la API: requests,
//! vistas por entidad y el sobre uniforme de respuesta.

pub mod bus_dto;
pub mod client_type_dto;
pub mod common;
pub mod stats_dto;
pub mod transaction_dto;
