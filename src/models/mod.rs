//! Data models organized by type.

pub mod responses;

pub use responses::*;
