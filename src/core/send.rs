use console::style;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::{self, SMTP_PORT};
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use tracing::{debug, trace};

use crate::core::message::build_message;
use crate::core::types::{Outcome, SendConfig, SendError, SendReport};

/// Send to every recipient in order, one independent session each.
///
/// Failures are reported as they occur and never stop the loop; the
/// returned reports mirror the input order.
pub async fn send_all(config: &SendConfig, recipients: &[String]) -> Vec<SendReport> {
    let mut reports = Vec::with_capacity(recipients.len());
    for recipient in recipients {
        let outcome = match send_one(config, recipient).await {
            Ok(()) => Outcome::Sent,
            Err(err) => {
                println!("{} {err}", style("error:").red().bold());
                debug!(%recipient, kind = %err.kind(), "send failed");
                Outcome::Failed {
                    kind: err.kind(),
                    detail: err.to_string(),
                }
            }
        };
        reports.push(SendReport {
            recipient: recipient.clone(),
            outcome,
        });
    }
    reports
}

/// One recipient, one session: Connect -> Authenticate -> Transmit -> Close.
///
/// The transport is dropped on every exit path, so no half-open session
/// outlives a failure.
async fn send_one(config: &SendConfig, recipient: &str) -> Result<(), SendError> {
    let message = build_message(config, recipient)?;

    let (host, port) = split_server(&config.server);
    trace!(host, port, "opening SMTP session");
    let mailer = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
        .port(port)
        .credentials(Credentials::new(
            config.username.clone(),
            config.password.clone(),
        ))
        .build();

    println!("Connecting to SMTP server...");
    match mailer.test_connection().await {
        Ok(true) => println!("SMTP server authentication successful."),
        Ok(false) => {
            return Err(SendError::Connection(
                "server rejected the connection check".to_string(),
            ));
        }
        Err(err) => return Err(classify_session_error(err)),
    }

    println!("Sending email to {recipient}...");
    mailer
        .send(message)
        .await
        .map_err(|source| SendError::Transmission {
            recipient: recipient.to_string(),
            source,
        })?;
    println!("Email sent successfully to {recipient}.");
    Ok(())
}

/// A permanent (5xx) reply while the session is being established means
/// the server turned our credentials down; everything else during that
/// phase is reported as one generic connection failure.
fn classify_session_error(err: smtp::Error) -> SendError {
    if err.is_permanent() {
        SendError::Authentication(err)
    } else {
        SendError::Connection(err.to_string())
    }
}

/// Split an optional `:port` suffix off the server address. Only a
/// single colon counts as a separator, so bare IPv6 addresses pass
/// through untouched.
fn split_server(server: &str) -> (&str, u16) {
    match server.rsplit_once(':') {
        Some((host, port)) if !host.contains(':') => match port.parse() {
            Ok(port) => (host, port),
            Err(_) => (server, SMTP_PORT),
        },
        _ => (server, SMTP_PORT),
    }
}
