use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Bus;

// Request para crear un autobús (se crea abierto)
#[derive(Debug, Deserialize, Validate)]
pub struct NewBusRequest {
    #[validate(range(min = 0.0))]
    pub price: f64,
}

// Request para sobrescribir el precio de un autobús
#[derive(Debug, Deserialize, Validate)]
pub struct SetPriceRequest {
    pub bus_id: i32,
    #[validate(range(min = 0.0))]
    pub new_price: f64,
}

// Request para sobrescribir el estado de un autobús
#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub bus_id: i32,
    pub new_status: bool,
}

// Vista pública de un autobús
#[derive(Debug, Serialize)]
pub struct BusView {
    pub id: i32,
    pub price: f64,
    pub status: bool,
}

impl From<Bus> for BusView {
    fn from(bus: Bus) -> Self {
        Self {
            id: bus.id,
            price: bus.price.to_f64().unwrap_or(0.0),
            status: bus.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_bus_view_mapping() {
        let bus = Bus {
            id: 1,
            price: Decimal::new(305, 1),
            status: true,
        };

        let view = BusView::from(bus);
        assert_eq!(view.id, 1);
        assert_eq!(view.price, 30.5);
        assert!(view.status);
    }
}
