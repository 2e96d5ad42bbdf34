use rust_decimal::Decimal;
use sqlx::PgPool;
use validator::Validate;

use crate::dto::bus_dto::{BusView, NewBusRequest, SetPriceRequest, SetStatusRequest};
use crate::repositories::BusRepository;
use crate::utils::errors::AppError;

pub struct BusController {
    repository: BusRepository,
}

impl BusController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: BusRepository::new(pool),
        }
    }

    pub async fn create(&self, request: NewBusRequest) -> Result<i32, AppError> {
        request.validate()?;

        let price = Decimal::from_f64_retain(request.price)
            .ok_or_else(|| AppError::BadRequest("Precio no válido".to_string()))?;

        self.repository.create(price).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<BusView, AppError> {
        let bus = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Autobús {} no encontrado", id)))?;

        Ok(BusView::from(bus))
    }

    pub async fn list(&self) -> Result<Vec<BusView>, AppError> {
        let buses = self.repository.find_all().await?;
        Ok(buses.into_iter().map(BusView::from).collect())
    }

    // Override administrativo: sobrescribe el precio en cualquier estado
    pub async fn set_price(&self, request: SetPriceRequest) -> Result<(), AppError> {
        request.validate()?;

        let price = Decimal::from_f64_retain(request.new_price)
            .ok_or_else(|| AppError::BadRequest("Precio no válido".to_string()))?;

        let updated = self.repository.set_price(request.bus_id, price).await?;
        if !updated {
            return Err(AppError::NotFound(format!(
                "Autobús {} no encontrado",
                request.bus_id
            )));
        }

        Ok(())
    }

    // Override administrativo: sobrescribe el estado sin restricciones
    // de la máquina de estados
    pub async fn set_status(&self, request: SetStatusRequest) -> Result<(), AppError> {
        let updated = self
            .repository
            .set_status(request.bus_id, request.new_status)
            .await?;
        if !updated {
            return Err(AppError::NotFound(format!(
                "Autobús {} no encontrado",
                request.bus_id
            )));
        }

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound(format!("Autobús {} no encontrado", id)));
        }

        Ok(true)
    }
}
