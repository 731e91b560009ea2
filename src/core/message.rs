use lettre::Message;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use tracing::debug;

use crate::core::types::{SendConfig, SendError};

/// Assemble the MIME message for a single recipient.
///
/// The message is always multipart/mixed with one text/plain part
/// first. The attachment, if configured, is read here so that a
/// vanished file surfaces as a failure for this recipient instead of a
/// startup error. The Date header is stamped at build time.
pub fn build_message(config: &SendConfig, recipient: &str) -> Result<Message, SendError> {
    println!("Creating email message for {recipient}...");

    let from = parse_mailbox(&config.from)?;
    let to = parse_mailbox(recipient)?;

    let mut parts = MultiPart::mixed().singlepart(
        SinglePart::builder()
            .header(ContentType::TEXT_PLAIN)
            .body(config.text.clone()),
    );

    if let Some(path) = &config.attachment {
        println!("Attaching file: {}", path.display());
        let content = std::fs::read(path).map_err(|source| SendError::Attachment {
            path: path.clone(),
            source,
        })?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        debug!(%filename, bytes = content.len(), "attachment read");
        let content_type = ContentType::parse("application/octet-stream")
            .map_err(|e| SendError::Message(e.to_string()))?;
        parts = parts.singlepart(Attachment::new(filename).body(content, content_type));
    }

    Message::builder()
        .from(from)
        .to(to)
        .subject(config.subject.as_str())
        .date_now()
        .multipart(parts)
        .map_err(|e| SendError::Message(e.to_string()))
}

fn parse_mailbox(address: &str) -> Result<Mailbox, SendError> {
    address.parse().map_err(|source| SendError::Address {
        address: address.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use crate::core::types::FailureKind;

    use super::*;

    fn config() -> SendConfig {
        SendConfig {
            from: "sender@example.com".to_string(),
            subject: "Greetings".to_string(),
            text: "Hello from the test suite".to_string(),
            server: "smtp.example.com".to_string(),
            username: "u".to_string(),
            password: "p".to_string(),
            attachment: None,
        }
    }

    fn formatted(message: &Message) -> String {
        String::from_utf8(message.formatted()).unwrap()
    }

    #[test]
    fn message_carries_the_expected_headers() {
        let message = build_message(&config(), "recipient@example.com").unwrap();
        let raw = formatted(&message);
        assert!(raw.contains("From: sender@example.com"));
        assert!(raw.contains("To: recipient@example.com"));
        assert!(raw.contains("Subject: Greetings"));
        assert!(raw.contains("Date: "));
        assert!(raw.contains("Content-Type: multipart/mixed"));
    }

    #[test]
    fn message_has_exactly_one_text_part() {
        let message = build_message(&config(), "recipient@example.com").unwrap();
        let raw = formatted(&message);
        assert_eq!(raw.matches("Content-Type: text/plain").count(), 1);
        assert!(raw.contains("Hello from the test suite"));
    }

    #[test]
    fn attachment_is_named_by_base_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.bin");
        std::fs::write(&path, b"attachment payload").unwrap();

        let mut config = config();
        config.attachment = Some(path);
        let message = build_message(&config, "recipient@example.com").unwrap();
        let raw = formatted(&message);
        assert!(raw.contains(r#"Content-Disposition: attachment; filename="report.bin""#));
        assert!(raw.contains("Content-Type: application/octet-stream"));
        // still exactly one text part next to the binary one
        assert_eq!(raw.matches("Content-Type: text/plain").count(), 1);
    }

    #[test]
    fn unreadable_attachment_fails_the_build() {
        let mut config = config();
        config.attachment = Some("/nonexistent/report.bin".into());
        let err = build_message(&config, "recipient@example.com").unwrap_err();
        assert_eq!(err.kind(), FailureKind::Attachment);
    }

    #[test]
    fn invalid_recipient_fails_the_build() {
        let err = build_message(&config(), "no-at-sign").unwrap_err();
        assert_eq!(err.kind(), FailureKind::Address);
    }

    #[test]
    fn messages_are_built_per_recipient() {
        let first = build_message(&config(), "a@example.com").unwrap();
        let second = build_message(&config(), "b@example.com").unwrap();
        assert!(formatted(&first).contains("To: a@example.com"));
        assert!(formatted(&second).contains("To: b@example.com"));
    }
}
