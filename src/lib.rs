//! # nslookup-records
//!
//! Query NS, MX, and TXT records by wrapping the system `nslookup` tool.
//!
//! This crate does no DNS protocol work itself. It spawns `nslookup` with an
//! explicit DNS server, captures the combined stdout/stderr text, and parses
//! the record lines out of it into typed values. Lines that do not look like
//! answers are ignored; answer lines that fail secondary parsing (such as a
//! non-numeric MX preference) are dropped so garbled output yields fewer
//! records instead of a failed lookup.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use nslookup_records::NsLookup;
//!
//! let lookup = NsLookup::new()?;
//!
//! let servers = lookup.lookup_ns("example.com", "8.8.8.8")?;
//! let exchangers = lookup.lookup_mx("example.com", "8.8.8.8")?;
//! let texts = lookup.lookup_txt("example.com", "8.8.8.8")?;
//! ```
//!
//! ## Parsing already-captured output
//!
//! The extractors in [`parse`] work on any [`std::io::BufRead`] stream, so
//! output captured elsewhere (a log, a test fixture, a different invocation)
//! can be parsed without spawning anything:
//!
//! ```rust
//! use nslookup_records::parse::extract_name_servers;
//!
//! let out = "example.com\tnameserver = a.iana-servers.net.\n";
//! let records = extract_name_servers(out.as_bytes()).unwrap();
//! assert_eq!(records[0].host, "a.iana-servers.net.");
//! ```
//!
//! ## Empty results vs. failures
//!
//! "No records found" and "lookup failed" are distinct: a lookup that runs
//! cleanly but matches nothing returns an empty `Vec`, while a tool that
//! cannot be spawned, cannot be read, or exits non-zero returns a
//! [`LookupError`].
//!
//! ## Record types
//!
//! Only NS, MX, and TXT are handled. CNAME and other types are future work.

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod nslookup;
pub mod parse;
pub mod record;

pub use error::{LookupError, Result};
pub use nslookup::NsLookup;
pub use record::{Mx, Ns};
