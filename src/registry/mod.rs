//! In-memory profile collection and its identifier source.

mod id;
mod store;

pub use id::*;
pub use store::*;
