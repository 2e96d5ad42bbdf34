use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::ClientType;

// Request para crear una categoría de cliente
#[derive(Debug, Deserialize, Validate)]
pub struct NewClientTypeRequest {
    #[validate(length(min = 1))]
    pub client_name: String,
    #[validate(range(min = 0, max = 100))]
    pub discount: i32,
}

// Request para actualizar el descuento de una categoría
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDiscountRequest {
    pub client_type: i32,
    #[validate(range(min = 0, max = 100))]
    pub new_discount: i32,
}

// Vista pública de una categoría de cliente
#[derive(Debug, Serialize)]
pub struct ClientTypeView {
    pub id: i32,
    pub client_name: String,
    pub discount: i32,
}

impl From<ClientType> for ClientTypeView {
    fn from(client_type: ClientType) -> Self {
        Self {
            id: client_type.id,
            client_name: client_type.client_name,
            discount: client_type.discount,
        }
    }
}
