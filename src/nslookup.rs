//! Subprocess wrapper around the system `nslookup` tool.
//!
//! Each lookup spawns `nslookup -q=<kind> <domain> <server>`, captures its
//! stdout and stderr, and hands the combined text to the extractors in
//! [`crate::parse`]. The tool's stderr participates in matching the same way
//! stdout does, since some builds print answers there.

use crate::error::{LookupError, Result};
use crate::parse;
use crate::record::{Mx, Ns};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Conventional install path of the system tool.
const DEFAULT_COMMAND: &str = "/usr/bin/nslookup";

/// Runs `nslookup` queries against an explicit DNS server.
///
/// # Example
///
/// ```rust,ignore
/// use nslookup_records::NsLookup;
///
/// let lookup = NsLookup::new()?;
/// let servers = lookup.lookup_ns("example.com", "8.8.8.8")?;
/// let exchangers = lookup.lookup_mx("example.com", "8.8.8.8")?;
/// let texts = lookup.lookup_txt("example.com", "8.8.8.8")?;
/// ```
#[derive(Debug, Clone)]
pub struct NsLookup {
    command: PathBuf,
}

impl NsLookup {
    /// Creates a wrapper using the conventional `/usr/bin/nslookup` path.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::ToolNotFound`] if the binary is absent.
    pub fn new() -> Result<Self> {
        let command = PathBuf::from(DEFAULT_COMMAND);
        if !command.exists() {
            return Err(LookupError::ToolNotFound {
                path: DEFAULT_COMMAND.to_string(),
            });
        }
        Ok(Self { command })
    }

    /// Creates a wrapper using a custom tool path (useful for testing or
    /// non-standard installs).
    ///
    /// The path is not checked here; a missing binary surfaces as
    /// [`LookupError::Process`] when a lookup runs.
    #[must_use]
    pub fn with_command(command: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Returns the configured tool path.
    #[must_use]
    pub fn command(&self) -> &Path {
        &self.command
    }

    /// Looks up NS records for `domain` via `server`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Process`] if the tool cannot be spawned or its
    /// output cannot be read, or [`LookupError::ToolFailed`] if it exits
    /// non-zero.
    pub fn lookup_ns(&self, domain: &str, server: &str) -> Result<Vec<Ns>> {
        let output = self.run("ns", domain, server)?;
        let records = parse::extract_name_servers(BufReader::new(output.as_slice()))?;
        tracing::info!(domain, server, count = records.len(), "NS lookup complete");
        Ok(records)
    }

    /// Looks up MX records for `domain` via `server`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Process`] if the tool cannot be spawned or its
    /// output cannot be read, or [`LookupError::ToolFailed`] if it exits
    /// non-zero.
    pub fn lookup_mx(&self, domain: &str, server: &str) -> Result<Vec<Mx>> {
        let output = self.run("mx", domain, server)?;
        let records = parse::extract_mail_exchangers(BufReader::new(output.as_slice()))?;
        tracing::info!(domain, server, count = records.len(), "MX lookup complete");
        Ok(records)
    }

    /// Looks up TXT records for `domain` via `server`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Process`] if the tool cannot be spawned or its
    /// output cannot be read, or [`LookupError::ToolFailed`] if it exits
    /// non-zero.
    pub fn lookup_txt(&self, domain: &str, server: &str) -> Result<Vec<String>> {
        let output = self.run("txt", domain, server)?;
        let records = parse::extract_text_records(BufReader::new(output.as_slice()))?;
        tracing::info!(domain, server, count = records.len(), "TXT lookup complete");
        Ok(records)
    }

    /// Runs `<tool> -q=<kind> <domain> <server>` and returns its combined
    /// stdout/stderr bytes.
    fn run(&self, kind: &str, domain: &str, server: &str) -> Result<Vec<u8>> {
        tracing::debug!(
            command = %self.command.display(),
            kind,
            domain,
            server,
            "Spawning lookup tool"
        );

        let output = Command::new(&self.command)
            .arg(format!("-q={kind}"))
            .arg(domain)
            .arg(server)
            .output()?;

        if !output.status.success() {
            tracing::warn!(
                domain,
                server,
                status = %output.status,
                "Lookup tool exited with failure"
            );
            return Err(LookupError::ToolFailed {
                status: output.status,
            });
        }

        let mut combined = output.stdout;
        combined.extend_from_slice(&output.stderr);
        Ok(combined)
    }
}
