pub mod not_found;
pub mod services;

pub use not_found::NotFound;
pub use services::Services;
