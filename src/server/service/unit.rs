use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::unit::UnitRepository,
    error::AppError,
    model::unit::{CreateUnitParam, Unit},
};

pub struct UnitService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UnitService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every unit, oldest first.
    pub async fn list(&self) -> Result<Vec<Unit>, AppError> {
        Ok(UnitRepository::new(self.db).get_all().await?)
    }

    /// Creates a unit under its trimmed name, rejecting blank names.
    pub async fn create(&self, param: CreateUnitParam) -> Result<Unit, AppError> {
        let name = param.name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest(
                "O nome da unidade é obrigatório".to_string(),
            ));
        }

        let param = CreateUnitParam {
            name: name.to_string(),
        };

        Ok(UnitRepository::new(self.db).create(param).await?)
    }

    /// Seeds a unit named `name` when the database holds no unit at all.
    ///
    /// Returns the created unit, or `None` when units already existed.
    pub async fn ensure_default(&self, name: &str) -> Result<Option<Unit>, AppError> {
        let repo = UnitRepository::new(self.db);

        if repo.count().await? > 0 {
            return Ok(None);
        }

        let unit = repo
            .create(CreateUnitParam {
                name: name.to_string(),
            })
            .await?;

        tracing::info!("Created default unit '{}' with id {}", unit.name, unit.id);

        Ok(Some(unit))
    }
}
