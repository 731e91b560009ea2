use std::path::PathBuf;

use lettre::address::AddressError;
use lettre::transport::smtp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything needed to send one batch of mail, fixed at startup.
///
/// Built once from the CLI arguments and treated as read-only for the
/// rest of the run. The attachment, if any, is re-read from disk for
/// every recipient.
#[derive(Debug, Clone)]
pub struct SendConfig {
    pub from: String,
    pub subject: String,
    pub text: String,
    pub server: String,
    pub username: String,
    pub password: String,
    pub attachment: Option<PathBuf>,
}

/// A failure that aborts the send for one recipient only.
///
/// The run itself keeps going; `send_all` catches these, prints a
/// diagnostic and moves on to the next recipient.
#[derive(Debug, Error)]
pub enum SendError {
    #[error("invalid email address {address:?}: {source}")]
    Address { address: String, source: AddressError },

    #[error("could not read attachment {}: {}", .path.display(), .source)]
    Attachment {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not assemble message: {0}")]
    Message(String),

    #[error("authentication failed, check your username and password")]
    Authentication(#[source] smtp::Error),

    #[error("error connecting to SMTP server: {0}")]
    Connection(String),

    #[error("error sending email to {recipient}: {source}")]
    Transmission {
        recipient: String,
        source: smtp::Error,
    },
}

impl SendError {
    pub fn kind(&self) -> FailureKind {
        match self {
            SendError::Address { .. } => FailureKind::Address,
            SendError::Attachment { .. } => FailureKind::Attachment,
            SendError::Message(_) => FailureKind::Message,
            SendError::Authentication(_) => FailureKind::Authentication,
            SendError::Connection(_) => FailureKind::Connection,
            SendError::Transmission { .. } => FailureKind::Transmission,
        }
    }
}

/// Tag for the phase a per-recipient send failed in.
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Debug,
    derive_more::Display,
    Serialize,
    Deserialize,
)]
pub enum FailureKind {
    Address,
    Attachment,
    Message,
    Authentication,
    Connection,
    Transmission,
}

/// What happened to a single recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Sent,
    Failed { kind: FailureKind, detail: String },
}

impl Outcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, Outcome::Sent)
    }
}

/// Per-recipient result record, collected by `send_all` in input order.
#[derive(Debug, Clone, Serialize)]
pub struct SendReport {
    pub recipient: String,
    pub outcome: Outcome,
}
