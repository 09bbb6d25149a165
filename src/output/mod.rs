//! Result rendering for the CLI
//!
//! Thin consumer of the evaluator's output: styled per-host lines, a batch
//! summary, and JSON dumps. No check logic lives here.

use crate::models::{CertStatus, CheckResult};
use crate::utils::Result;
use console::style;
use serde::Serialize;

/// Print one styled line per result
pub fn print_results(results: &[CheckResult], issues_only: bool) {
    println!();

    for result in results {
        if issues_only && !result.is_issue() {
            continue;
        }

        let (status_str, detail) = match &result.status {
            CertStatus::Valid => (
                style("✓ Valid   ").green().to_string(),
                format!(
                    "valid for {} more days",
                    result.days_until_expiry.unwrap_or_default()
                ),
            ),
            CertStatus::ExpiringSoon => (
                style("! Expiring").yellow().to_string(),
                format!(
                    "expires in {} days",
                    result.days_until_expiry.unwrap_or_default()
                ),
            ),
            CertStatus::Expired => (
                style("✗ Expired ").red().to_string(),
                format!(
                    "expired {} days ago",
                    result.days_until_expiry.unwrap_or_default().abs()
                ),
            ),
            CertStatus::Error(message) => {
                (style("✗ Error   ").red().dim().to_string(), message.clone())
            }
        };

        println!(
            "  {} {} {} {}",
            status_str,
            style(&result.host).bold(),
            style(&detail).dim(),
            style(format!("[{}]", result.issuer)).cyan().dim(),
        );
    }
}

/// Print aggregate counts for a batch
pub fn print_summary(results: &[CheckResult]) {
    let total = results.len();
    let valid = results
        .iter()
        .filter(|r| matches!(r.status, CertStatus::Valid))
        .count();
    let expiring = results
        .iter()
        .filter(|r| matches!(r.status, CertStatus::ExpiringSoon))
        .count();
    let expired = results
        .iter()
        .filter(|r| matches!(r.status, CertStatus::Expired))
        .count();
    let errors = results
        .iter()
        .filter(|r| matches!(r.status, CertStatus::Error(_)))
        .count();

    println!();
    println!(
        "  {} checked: {} {} / {} {} / {} {} / {} {}",
        style(total).bold(),
        style(valid).green(),
        "valid",
        style(expiring).yellow(),
        "expiring",
        style(expired).red(),
        "expired",
        style(errors).red().dim(),
        "errors",
    );
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
