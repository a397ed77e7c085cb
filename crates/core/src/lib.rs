//! Core types for fieldsense
//!
//! This crate contains domain types shared across all other crates.

mod alert;
mod constants;
mod env_config;
mod error;
mod field;
mod reading;
mod stats;
mod user;

pub use alert::*;
pub use constants::*;
pub use env_config::*;
pub use error::*;
pub use field::*;
pub use reading::*;
pub use stats::*;
pub use user::*;
