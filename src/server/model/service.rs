//! Service domain model and the parameters used to create and update services.
//!
//! Prices live as integer cents from the data layer up to this model; the conversion
//! to and from the floating point amounts of the API happens in `from_dto`/`into_dto`.

use chrono::{DateTime, Utc};

use crate::model::service::{
    cents_to_price, price_to_cents, ServiceDto, ServicePayloadDto, ServiceValidationError,
};

/// A service offered by a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: i32,
    pub unit_id: i32,
    pub name: String,
    pub price_cents: i64,
    pub duration_minutes: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Service {
    /// Converts the service to a DTO for API responses.
    pub fn into_dto(self) -> ServiceDto {
        ServiceDto {
            id: self.id,
            unit_id: self.unit_id,
            name: self.name,
            price: cents_to_price(self.price_cents),
            duration_minutes: self.duration_minutes,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a service.
    ///
    /// This conversion happens at the data layer boundary to ensure entity models
    /// never leak into service or controller layers.
    pub fn from_entity(entity: entity::service::Model) -> Self {
        Self {
            id: entity.id,
            unit_id: entity.unit_id,
            name: entity.name,
            price_cents: entity.price_cents,
            duration_minutes: entity.duration_minutes,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Field values shared by create and update operations.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceFields {
    pub name: String,
    pub price_cents: i64,
    pub duration_minutes: i32,
    pub is_active: bool,
}

impl ServiceFields {
    /// Validates a request payload and builds field values from it.
    ///
    /// The name is trimmed and the price rounded to whole cents.
    ///
    /// # Returns
    /// - `Ok(ServiceFields)` - Payload satisfies the catalog rules
    /// - `Err(ServiceValidationError)` - First rule the payload breaks
    pub fn from_dto(dto: ServicePayloadDto) -> Result<Self, ServiceValidationError> {
        dto.validate()?;

        Ok(Self {
            name: dto.name.trim().to_string(),
            price_cents: price_to_cents(dto.price),
            duration_minutes: dto.duration_minutes,
            is_active: dto.is_active,
        })
    }
}

/// Parameters for creating a new service inside a unit.
#[derive(Debug, Clone)]
pub struct CreateServiceParam {
    pub unit_id: i32,
    pub fields: ServiceFields,
}

/// Parameters for updating an existing service.
#[derive(Debug, Clone)]
pub struct UpdateServiceParam {
    pub id: i32,
    pub fields: ServiceFields,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_fields_from_payload() {
        let fields = ServiceFields::from_dto(ServicePayloadDto {
            name: "  Corte Degradê ".to_string(),
            price: 55.0,
            duration_minutes: 40,
            is_active: true,
        })
        .unwrap();

        assert_eq!(fields.name, "Corte Degradê");
        assert_eq!(fields.price_cents, 5500);
        assert_eq!(fields.duration_minutes, 40);
        assert!(fields.is_active);
    }

    #[test]
    fn rejects_invalid_payload() {
        let result = ServiceFields::from_dto(ServicePayloadDto {
            name: "Barba".to_string(),
            price: -1.0,
            duration_minutes: 20,
            is_active: true,
        });

        assert_eq!(result, Err(ServiceValidationError::NegativePrice));
    }

    #[test]
    fn converts_cents_to_dto_price() {
        let now = Utc::now();
        let dto = Service {
            id: 7,
            unit_id: 2,
            name: "Sobrancelha".to_string(),
            price_cents: 1550,
            duration_minutes: 10,
            is_active: false,
            created_at: now,
            updated_at: now,
        }
        .into_dto();

        assert_eq!(dto.price, 15.5);
        assert_eq!(dto.unit_id, 2);
        assert!(!dto.is_active);
    }
}
