//! DNS record value types.

/// A single MX record: a mail exchanger host and its preference.
///
/// Lower preference values are preferred by sending mail servers.
///
/// # Example
///
/// ```
/// use nslookup_records::Mx;
///
/// let mx = Mx::new(10, "mail.example.com");
/// assert_eq!(mx.preference, 10);
/// assert_eq!(mx.host, "mail.example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mx {
    /// Preference value in `[0, 65535]`.
    pub preference: u16,

    /// Mail exchanger hostname (e.g., `"mail.example.com"`).
    pub host: String,
}

impl Mx {
    /// Creates a new MX record.
    #[must_use]
    pub fn new(preference: u16, host: impl Into<String>) -> Self {
        Self {
            preference,
            host: host.into(),
        }
    }
}

/// A single NS record: an authoritative nameserver hostname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ns {
    /// Nameserver hostname (e.g., `"ns1.example.com"`).
    pub host: String,
}

impl Ns {
    /// Creates a new NS record.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mx_new_sets_fields() {
        let mx = Mx::new(20, "backup.example.com");
        assert_eq!(mx.preference, 20);
        assert_eq!(mx.host, "backup.example.com");
    }

    #[test]
    fn ns_new_sets_host() {
        let ns = Ns::new("ns1.example.com");
        assert_eq!(ns.host, "ns1.example.com");
    }

    #[test]
    fn records_compare_by_value() {
        assert_eq!(Mx::new(10, "a"), Mx::new(10, "a"));
        assert_ne!(Mx::new(10, "a"), Mx::new(11, "a"));
        assert_eq!(Ns::new("a"), Ns::new("a"));
    }
}
