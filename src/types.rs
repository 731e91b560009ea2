use std::path::PathBuf;

use clap::{ArgGroup, Parser};

/// Send an email to one or more recipients through an authenticated
/// SMTP server.
///
/// Recipients come either from a comma-separated `--to` list or from a
/// file with one address per line (`--tofile`). Each recipient gets its
/// own message and its own SMTP session, processed strictly in order.
#[derive(Parser, Debug)]
#[command(version, about)]
#[command(group(ArgGroup::new("recipients").required(true).args(["to", "tofile"])))]
pub struct Args {
    /// Sender email address.
    #[clap(long)]
    pub from: String,

    /// Recipient email address(es), comma-separated.
    #[clap(long)]
    pub to: Option<String>,

    /// Path to a file with recipient email addresses, one per line.
    ///
    /// Lines are trimmed and blank lines are skipped; everything else is
    /// taken verbatim, in file order.
    #[clap(long)]
    pub tofile: Option<PathBuf>,

    /// Email subject.
    #[clap(long)]
    pub subject: String,

    /// Email content.
    #[clap(long)]
    pub text: String,

    /// SMTP server address, either "host" or "host:port".
    ///
    /// Without an explicit port the standard SMTP port 25 is used.
    #[clap(long)]
    pub server: String,

    /// SMTP server username.
    #[clap(long)]
    pub username: String,

    /// SMTP server password.
    #[clap(long)]
    pub password: String,

    /// Path to a file to attach.
    #[clap(long)]
    pub attachment: Option<PathBuf>,
}
