//! Failure taxonomy and translation of failures into HTTP responses.
//!
//! Every failure that escapes request handling is one of the three
//! `BookingError` kinds and is rendered as exactly one HTTP response
//! carrying the uniform `{success, message, data}` envelope.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

use crate::constants::ERR_UNEXPECTED_PREFIX;
use crate::models::ApiResponse;

/// Failures surfaced while handling a booking request.
///
/// The enum is closed: anything not recognized as a missing resource or a
/// seat conflict must be wrapped in `Unexpected`, which is always matched
/// last so the specific kinds are never shadowed.
#[derive(Debug)]
pub enum BookingError {
    /// The requested entity does not exist.
    ResourceNotFound(String),
    /// Write conflict on a seat that is already in a booked state.
    SeatAlreadyBooked(String),
    /// Catch-all for every failure not explicitly classified.
    Unexpected(String),
}

impl fmt::Display for BookingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingError::ResourceNotFound(message) => {
                write!(f, "Resource not found: {}", message)
            }
            BookingError::SeatAlreadyBooked(message) => {
                write!(f, "Seat already booked: {}", message)
            }
            BookingError::Unexpected(message) => {
                write!(f, "Unexpected error: {}", message)
            }
        }
    }
}

impl ResponseError for BookingError {
    fn status_code(&self) -> StatusCode {
        match self {
            BookingError::ResourceNotFound(_) => StatusCode::NOT_FOUND,
            BookingError::SeatAlreadyBooked(_) => StatusCode::CONFLICT,
            BookingError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            BookingError::ResourceNotFound(message) => {
                HttpResponse::NotFound().json(ApiResponse::<()>::error(message))
            }
            BookingError::SeatAlreadyBooked(message) => {
                HttpResponse::Conflict().json(ApiResponse::<()>::error(message))
            }
            BookingError::Unexpected(message) => HttpResponse::InternalServerError().json(
                ApiResponse::<()>::error(&format!("{}{}", ERR_UNEXPECTED_PREFIX, message)),
            ),
        }
    }
}

impl From<Box<dyn std::error::Error>> for BookingError {
    fn from(err: Box<dyn std::error::Error>) -> Self {
        BookingError::Unexpected(err.to_string())
    }
}
