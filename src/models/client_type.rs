//! Modelo de ClientType
//!
//! Categoría de descuento aplicada al precio del billete.

use sqlx::FromRow;

/// ClientType principal - mapea exactamente a la tabla client_types
#[derive(Debug, Clone, FromRow)]
pub struct ClientType {
    pub id: i32,
    pub client_name: String,
    /// Porcentaje de descuento, 0-100
    pub discount: i32,
}
