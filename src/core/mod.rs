//! Sending pipeline: recipient loading, message assembly and SMTP
//! delivery, each testable on its own.
pub mod message;
pub mod recipients;
pub mod send;
pub mod types;
