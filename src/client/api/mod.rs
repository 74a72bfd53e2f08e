pub mod helper;
pub mod service;
pub mod unit;

pub use service::{create_service, delete_service, get_services, update_service};
pub use unit::get_units;
