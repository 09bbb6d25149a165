//! Per-host check outcome types

use serde::{Serialize, Serializer};
use std::fmt;

/// Issuer label substituted when the certificate carries no organization
/// attribute, and on any per-host failure.
pub const UNKNOWN_ISSUER: &str = "Unknown Issuer";

/// Classification of a host's certificate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CertStatus {
    Valid,
    ExpiringSoon,
    Expired,
    Error(String),
}

impl fmt::Display for CertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CertStatus::Valid => write!(f, "Valid"),
            CertStatus::ExpiringSoon => write!(f, "Expiring Soon"),
            CertStatus::Expired => write!(f, "Expired"),
            CertStatus::Error(message) => write!(f, "Error: {}", message),
        }
    }
}

impl Serialize for CertStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outcome of checking a single host
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    /// Input hostname, preserved verbatim
    pub host: String,
    /// Signed whole days until expiry; `None` when the check failed
    pub days_until_expiry: Option<i64>,
    /// Status classification
    pub status: CertStatus,
    /// Issuer organization, or [`UNKNOWN_ISSUER`]
    pub issuer: String,
}

impl CheckResult {
    /// Build the error-path result for a failed host
    pub fn error(host: &str, message: impl Into<String>) -> Self {
        Self {
            host: host.to_string(),
            days_until_expiry: None,
            status: CertStatus::Error(message.into()),
            issuer: UNKNOWN_ISSUER.to_string(),
        }
    }

    /// Whether this result needs attention (anything other than `Valid`)
    pub fn is_issue(&self) -> bool {
        !matches!(self.status, CertStatus::Valid)
    }
}
