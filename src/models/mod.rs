//! Data models for the student registry.
//!
//! Field names serialize in camelCase so the persisted layout and the JSON API share one shape.

mod form;
mod profile;

pub use form::*;
pub use profile::*;
