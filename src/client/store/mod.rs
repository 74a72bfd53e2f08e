pub mod service;
pub mod toast;
pub mod unit;
