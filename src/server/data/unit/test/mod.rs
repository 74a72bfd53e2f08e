
use super::*;
use entity::prelude::Unit;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
