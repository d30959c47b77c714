//! Success message constants used throughout the application.

// Health messages
pub const MSG_SERVER_RUNNING: &str = "Server is running";
