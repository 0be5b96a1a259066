//! Registration form: validation rules, the create/edit state machine and
//! the live status region.

mod announcer;
mod controller;
mod validation;

pub use announcer::*;
pub use controller::*;
pub use validation::*;
