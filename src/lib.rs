//! TBOOK - Terminal Booking Library
//!
//! A terminal-based consultation booking flow, built in Rust.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
