//! Record extraction from captured `nslookup` output.
//!
//! The tool's output format is line-oriented prose, not a structured wire
//! format. Each extractor scans for a marker substring, takes everything
//! after the first `=` on the line, and builds a typed record from it.
//! Lines that do not carry the marker are ignored; matching lines that fail
//! secondary parsing (a non-numeric MX preference, a missing host field) are
//! dropped and extraction continues. Garbled output therefore degrades to
//! fewer records rather than a failed lookup.
//!
//! Callers that need a different resolver tool's format should go through
//! this module only; nothing outside it knows what the lines look like.

use crate::error::Result;
use crate::record::{Mx, Ns};
use std::io::BufRead;

/// Marker substring identifying an NS answer line.
const NS_MARKER: &str = "nameserver =";

/// Marker substring identifying an MX answer line.
const MX_MARKER: &str = "mail exchanger =";

/// Marker substring identifying a TXT answer line.
const TXT_MARKER: &str = "text =";

/// Extracts NS records from `nslookup -q=ns` output.
///
/// Returns one [`Ns`] per line containing `nameserver =`, in input order.
/// Input with no matching lines yields an empty vec.
///
/// # Errors
///
/// Returns [`LookupError::Process`](crate::LookupError::Process) if the
/// stream cannot be read.
pub fn extract_name_servers<R: BufRead>(reader: R) -> Result<Vec<Ns>> {
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.contains(NS_MARKER) {
            if let Some(host) = value_after_eq(&line) {
                records.push(Ns::new(host));
            }
        }
    }
    Ok(records)
}

/// Extracts MX records from `nslookup -q=mx` output.
///
/// Returns one [`Mx`] per line containing `mail exchanger =`, in input
/// order. The value after `=` is split on single spaces: the first field is
/// the preference, the second the host. Lines whose preference does not
/// parse as a `u16`, or that lack a host field, are dropped without error.
///
/// # Errors
///
/// Returns [`LookupError::Process`](crate::LookupError::Process) if the
/// stream cannot be read.
pub fn extract_mail_exchangers<R: BufRead>(reader: R) -> Result<Vec<Mx>> {
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.contains(MX_MARKER) {
            if let Some(mx) = value_after_eq(&line).and_then(parse_mx_value) {
                records.push(mx);
            }
        }
    }
    Ok(records)
}

/// Extracts TXT records from `nslookup -q=txt` output.
///
/// Returns one string per line containing `text =`, in input order, with
/// every leading and trailing double quote stripped.
///
/// # Errors
///
/// Returns [`LookupError::Process`](crate::LookupError::Process) if the
/// stream cannot be read.
pub fn extract_text_records<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.contains(TXT_MARKER) {
            if let Some(value) = value_after_eq(&line) {
                records.push(value.trim_matches('"').to_string());
            }
        }
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// Line helpers
// ---------------------------------------------------------------------------

/// Returns everything after the first `=` on the line, trimmed.
fn value_after_eq(line: &str) -> Option<&str> {
    line.split_once('=').map(|(_, rest)| rest.trim())
}

/// Parses `"<preference> <host>"` into an [`Mx`].
///
/// The original tool prints exactly one space between the two fields, so the
/// value is split on single spaces rather than arbitrary whitespace.
fn parse_mx_value(value: &str) -> Option<Mx> {
    let mut fields = value.split(' ');
    let preference = fields.next()?.parse::<u16>().ok()?;
    let host = fields.next()?;
    Some(Mx::new(preference, host))
}
