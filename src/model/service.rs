use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Longest service name accepted by the catalog, in characters.
pub const MAX_SERVICE_NAME_LEN: usize = 100;

/// Highest price accepted for a service, in currency units.
///
/// Keeps every accepted price exactly representable as integer cents.
pub const MAX_PRICE: f64 = 1_000_000.0;

/// A service offered by a unit as returned by the API.
///
/// `price` is expressed in currency units (reais) with fractional cents.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ServiceDto {
    pub id: i32,
    pub unit_id: i32,
    pub name: String,
    pub price: f64,
    pub duration_minutes: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body accepted when creating or updating a service.
///
/// Updates carry the target id in the request path, so the same shape serves both.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ServicePayloadDto {
    pub name: String,
    pub price: f64,
    pub duration_minutes: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl ServicePayloadDto {
    /// Checks the payload against the catalog rules shared by the form and the API.
    ///
    /// The name is judged after trimming surrounding whitespace.
    pub fn validate(&self) -> Result<(), ServiceValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ServiceValidationError::EmptyName);
        }
        if name.chars().count() > MAX_SERVICE_NAME_LEN {
            return Err(ServiceValidationError::NameTooLong);
        }
        if !self.price.is_finite() {
            return Err(ServiceValidationError::PriceNotFinite);
        }
        if self.price < 0.0 {
            return Err(ServiceValidationError::NegativePrice);
        }
        if self.price > MAX_PRICE {
            return Err(ServiceValidationError::PriceTooHigh);
        }
        if self.duration_minutes <= 0 {
            return Err(ServiceValidationError::NonPositiveDuration);
        }

        Ok(())
    }
}

/// Reasons a service payload is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceValidationError {
    EmptyName,
    NameTooLong,
    PriceNotFinite,
    NegativePrice,
    PriceTooHigh,
    NonPositiveDuration,
}

impl fmt::Display for ServiceValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "O nome do serviço é obrigatório"),
            Self::NameTooLong => write!(
                f,
                "O nome do serviço deve ter no máximo {} caracteres",
                MAX_SERVICE_NAME_LEN
            ),
            Self::PriceNotFinite => write!(f, "Informe um preço válido"),
            Self::NegativePrice => write!(f, "O preço não pode ser negativo"),
            Self::PriceTooHigh => write!(f, "O preço deve ser de no máximo R$ 1.000.000,00"),
            Self::NonPositiveDuration => write!(f, "A duração deve ser de pelo menos 1 minuto"),
        }
    }
}

impl std::error::Error for ServiceValidationError {}

/// Converts a price in currency units to integer cents, rounding half away from zero.
pub fn price_to_cents(price: f64) -> i64 {
    (price * 100.0).round() as i64
}

/// Converts integer cents back to a price in currency units.
pub fn cents_to_price(cents: i64) -> f64 {
    cents as f64 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, price: f64, duration_minutes: i32) -> ServicePayloadDto {
        ServicePayloadDto {
            name: name.to_string(),
            price,
            duration_minutes,
            is_active: true,
        }
    }

    #[test]
    fn accepts_valid_payload() {
        assert_eq!(payload("Barba", 30.0, 20).validate(), Ok(()));
    }

    #[test]
    fn accepts_free_service() {
        assert_eq!(payload("Avaliação", 0.0, 15).validate(), Ok(()));
    }

    #[test]
    fn rejects_blank_name() {
        assert_eq!(
            payload("   ", 30.0, 20).validate(),
            Err(ServiceValidationError::EmptyName)
        );
    }

    #[test]
    fn rejects_name_over_limit() {
        let name = "A".repeat(MAX_SERVICE_NAME_LEN + 1);
        assert_eq!(
            payload(&name, 30.0, 20).validate(),
            Err(ServiceValidationError::NameTooLong)
        );
    }

    #[test]
    fn counts_name_length_in_characters() {
        let name = "ç".repeat(MAX_SERVICE_NAME_LEN);
        assert_eq!(payload(&name, 30.0, 20).validate(), Ok(()));
    }

    #[test]
    fn rejects_negative_price() {
        assert_eq!(
            payload("Barba", -0.01, 20).validate(),
            Err(ServiceValidationError::NegativePrice)
        );
    }

    #[test]
    fn rejects_price_above_limit() {
        assert_eq!(
            payload("Barba", MAX_PRICE + 0.01, 20).validate(),
            Err(ServiceValidationError::PriceTooHigh)
        );
        assert_eq!(
            payload("Barba", 1e20, 20).validate(),
            Err(ServiceValidationError::PriceTooHigh)
        );
    }

    #[test]
    fn accepted_prices_keep_their_value_in_cents() {
        assert_eq!(payload("Barba", MAX_PRICE, 20).validate(), Ok(()));
        assert_eq!(cents_to_price(price_to_cents(MAX_PRICE)), MAX_PRICE);
        assert_eq!(cents_to_price(price_to_cents(999_999.99)), 999_999.99);
    }

    #[test]
    fn rejects_non_finite_price() {
        assert_eq!(
            payload("Barba", f64::NAN, 20).validate(),
            Err(ServiceValidationError::PriceNotFinite)
        );
        assert_eq!(
            payload("Barba", f64::INFINITY, 20).validate(),
            Err(ServiceValidationError::PriceNotFinite)
        );
    }

    #[test]
    fn rejects_non_positive_duration() {
        assert_eq!(
            payload("Barba", 30.0, 0).validate(),
            Err(ServiceValidationError::NonPositiveDuration)
        );
        assert_eq!(
            payload("Barba", 30.0, -5).validate(),
            Err(ServiceValidationError::NonPositiveDuration)
        );
    }

    #[test]
    fn converts_prices_to_cents() {
        assert_eq!(price_to_cents(45.0), 4500);
        assert_eq!(price_to_cents(19.99), 1999);
        assert_eq!(price_to_cents(0.005), 1);
        assert_eq!(cents_to_price(6550), 65.5);
    }

    #[test]
    fn defaults_missing_active_flag_to_true() {
        let payload: ServicePayloadDto =
            serde_json::from_str(r#"{"name":"Barba","price":30,"duration_minutes":20}"#).unwrap();

        assert!(payload.is_active);
        assert_eq!(payload.price, 30.0);
    }
}
