//! Error message constants used throughout the application.

// Translation errors
pub const ERR_UNEXPECTED_PREFIX: &str = "An error occurred: ";

// Routing errors
pub const ERR_ROUTE_NOT_FOUND: &str = "The requested resource does not exist";
