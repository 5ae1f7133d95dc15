//! Application layer managing state and business workflows.
//!
//! This module coordinates between the domain layer and presentation layer,
//! managing the booking state machine and the terminal UI state around it.

pub mod state;

pub use state::*;
