//! `itemforge-core` — domain primitives shared by the store and the HTTP edge.
//!
//! No storage or transport concerns live here.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::ItemId;
