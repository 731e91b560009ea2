use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use tracing::debug;

/// Where the recipient list comes from.
///
/// Exactly one source is accepted per invocation; the CLI enforces this
/// with an argument group and `from_flags` re-checks it for library
/// callers.
#[derive(Debug, Clone)]
pub enum RecipientSource {
    /// Comma-separated addresses, kept verbatim (no trimming).
    Inline(String),
    /// File with one address per line.
    File(PathBuf),
}

impl RecipientSource {
    pub fn from_flags(to: Option<String>, tofile: Option<PathBuf>) -> anyhow::Result<Self> {
        match (to, tofile) {
            (Some(list), None) => Ok(Self::Inline(list)),
            (None, Some(path)) => Ok(Self::File(path)),
            (Some(_), Some(_)) => anyhow::bail!("only one of --to or --tofile may be given"),
            (None, None) => anyhow::bail!("either --to or --tofile must be given"),
        }
    }

    /// Resolve the source into an ordered recipient list.
    ///
    /// Inline lists are split on commas as-is, so consecutive commas
    /// yield empty entries. Files are read line by line; surrounding
    /// whitespace is trimmed and blank lines are dropped. Order is
    /// preserved and duplicates are kept in both cases.
    pub fn load(&self) -> anyhow::Result<Vec<String>> {
        let recipients: Vec<String> = match self {
            Self::Inline(list) => list.split(',').map(str::to_owned).collect(),
            Self::File(path) => {
                println!("Loading email addresses from {}", path.display());
                let content = fs::read_to_string(path).with_context(|| {
                    format!("could not read recipient list from {}", path.display())
                })?;
                content
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_owned)
                    .collect()
            }
        };
        debug!(count = recipients.len(), "resolved recipient list");
        Ok(recipients)
    }
}
