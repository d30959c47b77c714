//! Application constants module.
//!
//! This module centralizes all constant strings used throughout the
//! application, including error messages and success messages.

pub mod errors;
pub mod messages;

pub use errors::*;
pub use messages::*;
