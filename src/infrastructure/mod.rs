//! Infrastructure layer providing external service integrations.
//!
//! This module contains implementations for external concerns like
//! configuration file I/O and other system-level operations.

pub mod config;

pub use config::*;
