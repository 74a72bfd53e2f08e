//! Unit domain model and parameters.

use chrono::{DateTime, Utc};

use crate::model::unit::{CreateUnitDto, UnitDto};

/// A salon location with its own service catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Unit {
    /// Converts the unit to a DTO for API responses.
    pub fn into_dto(self) -> UnitDto {
        UnitDto {
            id: self.id,
            name: self.name,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a unit at the data layer boundary.
    pub fn from_entity(entity: entity::unit::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a new unit.
#[derive(Debug, Clone)]
pub struct CreateUnitParam {
    pub name: String,
}

impl CreateUnitParam {
    /// Builds create parameters from the request body, trimming the name.
    pub fn from_dto(dto: CreateUnitDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
        }
    }
}
