pub mod cli;
pub mod core;
pub mod types;

pub use core::{
    message::build_message,
    recipients::RecipientSource,
    send::send_all,
    types::{FailureKind, Outcome, SendConfig, SendError, SendReport},
};
