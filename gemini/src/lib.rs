mod auth;
mod client;
pub mod domain;
mod gemini_url;

pub(crate) use gemini_url::*;

pub use auth::*;
pub use client::*;
pub use domain::{Schema, SchemaType};
