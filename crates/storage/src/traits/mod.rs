//! Store traits, one per entity.
//!
//! Admin actions and services take the narrowest trait they need instead of
//! the whole [`Storage`](crate::Storage).

mod catalog;
mod plant;

pub use catalog::{NurseryStore, PlantLinkStore, ProfileStore};
pub use plant::PlantStore;
