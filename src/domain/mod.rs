pub mod models;
pub mod policy;
pub mod ports;
pub mod services;
