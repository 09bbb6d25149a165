//! certwatch
//!
//! Monitors TLS certificate validity for a set of hostnames, classifying
//! each as valid, expiring soon, or expired, and surfacing issuer and
//! expiry details. Failures are isolated per host: one unreachable or
//! misconfigured host never aborts the batch.
//!
//! # Usage
//!
//! ```rust,ignore
//! use certwatch::checks::TlsFetcher;
//! use certwatch::config::CheckSettings;
//! use certwatch::runner::ExpiryEvaluator;
//!
//! #[tokio::main]
//! async fn main() {
//!     let fetcher = TlsFetcher::new(CheckSettings::default());
//!     let evaluator = ExpiryEvaluator::new(fetcher);
//!     let hosts = vec!["example.com".to_string()];
//!     for result in evaluator.evaluate(&hosts).await {
//!         println!("{}: {} ({})", result.host, result.status, result.issuer);
//!     }
//! }
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod runner;
pub mod utils;

// Re-export commonly used types
pub use checks::{CertificateFetcher, TlsFetcher};
pub use cli::Cli;
pub use config::{CheckSettings, Settings};
pub use models::{CertStatus, CertificateInfo, CheckResult, UNKNOWN_ISSUER};
pub use runner::{CheckEvent, ExpiryEvaluator};
pub use utils::{CertwatchError, FetchError, Result};
