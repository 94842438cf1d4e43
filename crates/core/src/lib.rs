//! Core types for plant-catalog
//!
//! Domain records, enumerated code sets and the declarative migration
//! chain shared by the storage, service and HTTP crates.

mod catalog;
mod choices;
mod constants;
mod duplicate;
mod env_config;
mod error;
mod plant;
pub mod schema;

pub use catalog::*;
pub use choices::*;
pub use constants::*;
pub use duplicate::*;
pub use env_config::*;
pub use error::*;
pub use plant::*;
