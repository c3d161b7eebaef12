pub mod ports;
pub mod scope;
pub mod services;
