//! Service layer for plant-catalog
//!
//! Sits between the HTTP/CLI front ends and storage. All calls are
//! synchronous; async callers run them on the blocking pool.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]

mod admin;
mod catalog_service;
mod error;

pub use admin::{
    ActionHandler, ActionInfo, ActionOutcome, AdminAction, AdminRegistry, AdminService,
    DUPLICATE_SELECTED, EntityKind,
};
pub use catalog_service::CatalogService;
pub use error::ServiceError;
