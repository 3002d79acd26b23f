pub mod analysis;
mod error;
pub mod models;
pub mod ports;
pub mod services;
pub mod validation;

pub use error::*;
