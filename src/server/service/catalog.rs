use sea_orm::DatabaseConnection;

use crate::{
    model::service::ServicePayloadDto,
    server::{
        data::{service::ServiceRepository, unit::UnitRepository},
        error::AppError,
        model::service::{CreateServiceParam, Service, ServiceFields, UpdateServiceParam},
    },
};

/// Business operations on the service catalog of a unit.
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the services of a unit in creation order.
    ///
    /// # Returns
    /// - `Ok(Vec<Service>)` - Catalog of the unit, possibly empty
    /// - `Err(AppError::NotFound)` - Unit doesn't exist
    pub async fn list(&self, unit_id: i32) -> Result<Vec<Service>, AppError> {
        self.require_unit(unit_id).await?;

        Ok(ServiceRepository::new(self.db).get_by_unit(unit_id).await?)
    }

    /// Validates the payload and adds a new service to the unit's catalog.
    ///
    /// # Returns
    /// - `Ok(Service)` - Created service
    /// - `Err(AppError::ValidationErr)` - Payload breaks a catalog rule
    /// - `Err(AppError::NotFound)` - Unit doesn't exist
    pub async fn create(
        &self,
        unit_id: i32,
        payload: ServicePayloadDto,
    ) -> Result<Service, AppError> {
        let fields = ServiceFields::from_dto(payload)?;
        self.require_unit(unit_id).await?;

        let service = ServiceRepository::new(self.db)
            .create(CreateServiceParam { unit_id, fields })
            .await?;

        Ok(service)
    }

    /// Validates the payload and replaces the fields of a service owned by the unit.
    ///
    /// # Returns
    /// - `Ok(Service)` - Updated service
    /// - `Err(AppError::ValidationErr)` - Payload breaks a catalog rule
    /// - `Err(AppError::NotFound)` - Service doesn't exist in that unit
    pub async fn update(
        &self,
        unit_id: i32,
        service_id: i32,
        payload: ServicePayloadDto,
    ) -> Result<Service, AppError> {
        let fields = ServiceFields::from_dto(payload)?;
        self.require_service(unit_id, service_id).await?;

        let service = ServiceRepository::new(self.db)
            .update(UpdateServiceParam {
                id: service_id,
                fields,
            })
            .await?;

        Ok(service)
    }

    /// Removes a service owned by the unit.
    ///
    /// # Returns
    /// - `Ok(())` - Service deleted
    /// - `Err(AppError::NotFound)` - Service doesn't exist in that unit
    pub async fn delete(&self, unit_id: i32, service_id: i32) -> Result<(), AppError> {
        self.require_service(unit_id, service_id).await?;

        ServiceRepository::new(self.db).delete(service_id).await?;

        Ok(())
    }

    async fn require_unit(&self, unit_id: i32) -> Result<(), AppError> {
        if !UnitRepository::new(self.db).exists(unit_id).await? {
            return Err(AppError::NotFound(format!("Unidade {} não encontrada", unit_id)));
        }

        Ok(())
    }

    async fn require_service(&self, unit_id: i32, service_id: i32) -> Result<(), AppError> {
        if !ServiceRepository::new(self.db)
            .exists_in_unit(service_id, unit_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "Serviço {} não encontrado na unidade {}",
                service_id, unit_id
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::service::ServiceValidationError;
    use sea_orm::EntityTrait;
    use test_utils::{builder::TestBuilder, factory};

    fn payload(name: &str, price: f64, duration_minutes: i32) -> ServicePayloadDto {
        ServicePayloadDto {
            name: name.to_string(),
            price,
            duration_minutes,
            is_active: true,
        }
    }

    #[tokio::test]
    async fn creates_example_service_in_unit() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let unit = factory::create_unit(db).await?;

        let catalog = CatalogService::new(db);
        let service = catalog.create(unit.id, payload("Barba", 30.0, 20)).await?;

        assert_eq!(service.unit_id, unit.id);
        assert_eq!(service.price_cents, 3000);

        let listed = catalog.list(unit.id).await?;
        assert_eq!(listed, vec![service]);

        Ok(())
    }

    #[tokio::test]
    async fn rejects_invalid_payload_before_touching_database() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let unit = factory::create_unit(db).await?;

        let result = CatalogService::new(db)
            .create(unit.id, payload("", 30.0, 20))
            .await;

        assert!(matches!(
            result,
            Err(AppError::ValidationErr(ServiceValidationError::EmptyName))
        ));
        assert!(CatalogService::new(db).list(unit.id).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn rejects_price_too_large_for_cents() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let unit = factory::create_unit(db).await?;
        let existing = factory::create_service(db, unit.id).await?;
        let catalog = CatalogService::new(db);

        let created = catalog.create(unit.id, payload("Barba", 1e20, 20)).await;
        assert!(matches!(
            created,
            Err(AppError::ValidationErr(ServiceValidationError::PriceTooHigh))
        ));

        let updated = catalog
            .update(unit.id, existing.id, payload("Barba", 1e20, 20))
            .await;
        assert!(matches!(
            updated,
            Err(AppError::ValidationErr(ServiceValidationError::PriceTooHigh))
        ));

        let listed = catalog.list(unit.id).await?;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].price_cents, existing.price_cents);

        Ok(())
    }

    #[tokio::test]
    async fn lists_unknown_unit_as_not_found() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let result = CatalogService::new(db).list(42).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }

    #[tokio::test]
    async fn refuses_update_through_other_unit() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, service) = factory::create_service_with_unit(db).await?;
        let other_unit = factory::create_unit(db).await?;

        let result = CatalogService::new(db)
            .update(other_unit.id, service.id, payload("Renamed", 10.0, 10))
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        let stored = entity::prelude::Service::find_by_id(service.id)
            .one(db)
            .await?
            .unwrap();
        assert_eq!(stored.name, service.name);

        Ok(())
    }

    #[tokio::test]
    async fn updates_service_in_its_unit() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (unit, service) = factory::create_service_with_unit(db).await?;

        let updated = CatalogService::new(db)
            .update(unit.id, service.id, payload(" Corte Degradê ", 55.0, 40))
            .await?;

        assert_eq!(updated.id, service.id);
        assert_eq!(updated.name, "Corte Degradê");
        assert_eq!(updated.price_cents, 5500);

        Ok(())
    }

    #[tokio::test]
    async fn refuses_delete_through_other_unit() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (unit, service) = factory::create_service_with_unit(db).await?;
        let other_unit = factory::create_unit(db).await?;
        let catalog = CatalogService::new(db);

        let result = catalog.delete(other_unit.id, service.id).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(catalog.list(unit.id).await?.len(), 1);

        catalog.delete(unit.id, service.id).await?;
        assert!(catalog.list(unit.id).await?.is_empty());

        Ok(())
    }
}
