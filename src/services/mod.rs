//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación:
//! la política de precios, la agregación de estadísticas y el
//! planificador de reapertura diferida.

pub mod pricing_service;
pub mod reopen_service;
pub mod stats_service;
