pub mod models;
pub mod ports;
pub mod schedule;
pub mod services;
