//! Custom error types for certwatch
//!
//! This module defines domain-specific error types using `thiserror` for
//! the failure modes that can occur while fetching and evaluating
//! certificates.

use thiserror::Error;

/// Top-level error type for the certwatch application
#[derive(Error, Debug)]
pub enum CertwatchError {
    #[error("Certificate fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Expiry parse error: {0}")]
    ExpiryParse(#[from] ExpiryParseError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Host list error: {0}")]
    HostList(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while acquiring a certificate from a live host
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("DNS resolution failed for {host}: {message}")]
    Dns { host: String, message: String },

    #[error("Connection to {host} failed: {message}")]
    Connection { host: String, message: String },

    #[error("Connection to {host}:{port} timed out after {secs}s")]
    ConnectTimeout { host: String, port: u16, secs: u64 },

    #[error("TLS handshake with {host} timed out after {secs}s")]
    HandshakeTimeout { host: String, secs: u64 },

    #[error("TLS handshake with {host} failed: {message}")]
    Handshake { host: String, message: String },

    #[error("Invalid hostname: {host}")]
    InvalidHostname { host: String },

    #[error("No certificate presented by {host}")]
    NoCertificate { host: String },

    #[error("Failed to parse certificate from {host}: {message}")]
    CertificateParse { host: String, message: String },
}

/// Error raised when the textual expiry field cannot be parsed
#[derive(Error, Debug)]
pub enum ExpiryParseError {
    #[error("Invalid expiry timestamp '{raw}': {message}")]
    Format { raw: String, message: String },
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },
}

/// Result type alias using CertwatchError
pub type Result<T> = std::result::Result<T, CertwatchError>;
