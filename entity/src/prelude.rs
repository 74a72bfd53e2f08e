pub use super::service::Entity as Service;
pub use super::unit::Entity as Unit;
