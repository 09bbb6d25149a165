//! Expiry evaluation engine
//!
//! Drives the fetcher once per host and turns the raw certificate fields
//! into ordered per-host results. Every per-host failure is contained here:
//! `evaluate` never fails, it produces an `Error` result for the affected
//! host and keeps going.

use crate::checks::CertificateFetcher;
use crate::models::{parse_not_after, CertStatus, CertificateInfo, CheckResult, UNKNOWN_ISSUER};
use chrono::Utc;
use futures::stream::{self, StreamExt};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of days below which a certificate counts as expiring soon
pub const DEFAULT_EXPIRY_THRESHOLD_DAYS: i64 = 30;

/// Default number of hosts checked concurrently
pub const DEFAULT_PARALLELISM: usize = 4;

/// Events emitted while a batch runs, for progress display.
///
/// Advisory only; the result list is the correctness contract.
pub enum CheckEvent {
    HostStarted {
        host: String,
    },
    HostComplete {
        host: String,
        completed: usize,
        total: usize,
    },
}

/// Expiry evaluator over a pluggable certificate fetcher
pub struct ExpiryEvaluator<F> {
    fetcher: F,
    threshold_days: i64,
    parallel: usize,
}

impl<F: CertificateFetcher> ExpiryEvaluator<F> {
    /// Create an evaluator with the default threshold and parallelism
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            threshold_days: DEFAULT_EXPIRY_THRESHOLD_DAYS,
            parallel: DEFAULT_PARALLELISM,
        }
    }

    /// Override the expiring-soon threshold in days
    pub fn with_threshold(mut self, days: i64) -> Self {
        self.threshold_days = days;
        self
    }

    /// Override how many hosts are checked concurrently.
    ///
    /// `1` reproduces a strictly sequential run.
    pub fn with_parallelism(mut self, parallel: usize) -> Self {
        self.parallel = parallel.max(1);
        self
    }

    /// Check every host and return one result per host, in input order
    pub async fn evaluate(&self, hosts: &[String]) -> Vec<CheckResult> {
        self.evaluate_with_events(hosts, &|_| {}).await
    }

    /// Check every host, reporting per-host completion through `on_event`
    pub async fn evaluate_with_events(
        &self,
        hosts: &[String],
        on_event: &dyn Fn(CheckEvent),
    ) -> Vec<CheckResult> {
        let total = hosts.len();
        let completed = AtomicUsize::new(0);

        // buffered (not buffer_unordered) keeps output order equal to input
        // order while still bounding concurrency
        stream::iter(hosts)
            .map(|host| {
                let host = host.clone();
                let completed = &completed;
                async move {
                    on_event(CheckEvent::HostStarted { host: host.clone() });
                    let result = self.check_host(&host).await;
                    let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
                    on_event(CheckEvent::HostComplete {
                        host,
                        completed: done,
                        total,
                    });
                    result
                }
            })
            .buffered(self.parallel)
            .collect()
            .await
    }

    /// Fetch-then-classify for a single host; the fault-isolation boundary
    async fn check_host(&self, host: &str) -> CheckResult {
        match self.fetcher.fetch(host).await {
            Ok(info) => self.classify(host, info),
            Err(e) => {
                tracing::warn!("check failed for {}: {}", host, e);
                CheckResult::error(host, e.to_string())
            }
        }
    }

    fn classify(&self, host: &str, info: CertificateInfo) -> CheckResult {
        let expiry = match parse_not_after(&info.not_after) {
            Ok(expiry) => expiry,
            Err(e) => return CheckResult::error(host, e.to_string()),
        };

        // "now" is sampled per host, not once for the whole batch
        let now = Utc::now();
        let days = (expiry - now).num_days();

        // A certificate that lapsed less than a day ago truncates to zero
        // days, but it is still expired
        let status = if expiry <= now {
            CertStatus::Expired
        } else if days < self.threshold_days {
            CertStatus::ExpiringSoon
        } else {
            CertStatus::Valid
        };

        CheckResult {
            host: host.to_string(),
            days_until_expiry: Some(days),
            status,
            issuer: info
                .issuer_organization
                .unwrap_or_else(|| UNKNOWN_ISSUER.to_string()),
        }
    }
}
