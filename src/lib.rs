//! Seat booking microservice error-translation subsystem.
//!
//! Exposes the failure taxonomy ([`BookingError`]), the uniform response
//! envelope ([`ApiResponse`]), and the HTTP surface composing them.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod openapi;
pub mod routes;

pub use errors::BookingError;
pub use models::ApiResponse;
