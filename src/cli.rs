use clap::Parser;
use tracing::debug;

use crate::core::recipients::RecipientSource;
use crate::core::send::send_all;
use crate::core::types::SendConfig;
use crate::types::Args;

/// CLI entry point: parse arguments, resolve the recipient list and run
/// the sequential send loop.
///
/// Usage errors never reach this far (clap exits first); errors returned
/// from here are configuration-level, like an unreadable recipient file.
/// Per-recipient failures are reported inside the loop and do not fail
/// the run.
pub async fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    let source = RecipientSource::from_flags(args.to, args.tofile)?;
    let config = SendConfig {
        from: args.from,
        subject: args.subject,
        text: args.text,
        server: args.server,
        username: args.username,
        password: args.password,
        attachment: args.attachment,
    };

    let recipients = source.load()?;
    let reports = send_all(&config, &recipients).await;

    let failed = reports.iter().filter(|r| !r.outcome.is_sent()).count();
    debug!(attempted = reports.len(), failed, "all sends attempted");

    Ok(())
}
