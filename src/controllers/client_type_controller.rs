use sqlx::PgPool;
use validator::Validate;

use crate::dto::client_type_dto::{ClientTypeView, NewClientTypeRequest, UpdateDiscountRequest};
use crate::repositories::ClientTypeRepository;
use crate::utils::errors::AppError;

pub struct ClientTypeController {
    repository: ClientTypeRepository,
}

impl ClientTypeController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ClientTypeRepository::new(pool),
        }
    }

    pub async fn create(&self, request: NewClientTypeRequest) -> Result<i32, AppError> {
        request.validate()?;

        self.repository
            .create(&request.client_name, request.discount)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<ClientTypeView, AppError> {
        let client_type = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Categoría de cliente {} no encontrada", id))
            })?;

        Ok(ClientTypeView::from(client_type))
    }

    pub async fn list(&self) -> Result<Vec<ClientTypeView>, AppError> {
        let client_types = self.repository.find_all().await?;
        Ok(client_types.into_iter().map(ClientTypeView::from).collect())
    }

    pub async fn update_discount(&self, request: UpdateDiscountRequest) -> Result<(), AppError> {
        request.validate()?;

        let updated = self
            .repository
            .set_discount(request.client_type, request.new_discount)
            .await?;
        if !updated {
            return Err(AppError::NotFound(format!(
                "Categoría de cliente {} no encontrada",
                request.client_type
            )));
        }

        Ok(())
    }
}
