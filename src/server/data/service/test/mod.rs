mod create;

use super::*;
use crate::server::model::service::ServiceFields;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

fn fields(name: &str, price_cents: i64, duration_minutes: i32) -> ServiceFields {
    ServiceFields {
        name: name.to_string(),
        price_cents,
        duration_minutes,
        is_active: true,
    }
}
