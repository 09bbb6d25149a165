//! certwatch - TLS certificate expiry monitoring
//!
//! Checks the certificates of a list of hostnames and reports how long
//! each has left, which CA issued it, and whether any host needs
//! attention.

use certwatch::cli::{self, Cli, OutputFormat};
use certwatch::config::Settings;
use certwatch::checks::TlsFetcher;
use certwatch::output;
use certwatch::runner::{CheckEvent, ExpiryEvaluator};
use certwatch::utils::create_progress_bar;
use certwatch::{CheckResult, Result};
use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Install the ring crypto provider for rustls
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    match run().await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(2);
        }
    }
}

/// Run the check batch. Returns whether every host came back `Valid`.
async fn run() -> Result<bool> {
    let cli = Cli::parse();

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let mut settings = match cli.config {
        Some(ref path) => Settings::load_from_file(path)?,
        None => Settings::load_default()?,
    };

    // CLI flags override the config file
    if let Some(port) = cli.port {
        settings.check.port = port;
    }
    if let Some(timeout) = cli.timeout {
        settings.check.connect_timeout_secs = timeout;
        settings.check.handshake_timeout_secs = timeout;
    }
    if let Some(threshold) = cli.threshold {
        settings.check.expiry_threshold_days = threshold;
    }
    if let Some(parallel) = cli.parallel {
        settings.check.parallel = parallel;
    }

    let hosts = cli::collect_hosts(&cli)?;

    let fetcher = TlsFetcher::new(settings.check.clone());
    let evaluator = ExpiryEvaluator::new(fetcher)
        .with_threshold(settings.check.expiry_threshold_days)
        .with_parallelism(settings.check.parallel);

    let show_progress = !cli.quiet && cli.format == OutputFormat::Table;
    let results: Vec<CheckResult> = if show_progress {
        let bar = create_progress_bar(hosts.len() as u64, "Checking hosts");
        let results = evaluator
            .evaluate_with_events(&hosts, &|event| {
                if let CheckEvent::HostComplete { host, .. } = event {
                    bar.set_message(host);
                    bar.inc(1);
                }
            })
            .await;
        bar.finish_and_clear();
        results
    } else {
        evaluator.evaluate(&hosts).await
    };

    let all_valid = results.iter().all(|r| !r.is_issue());

    if !cli.quiet {
        match cli.format {
            OutputFormat::Json => output::print_json(&results)?,
            OutputFormat::Table => {
                output::print_results(&results, cli.issues_only);
                output::print_summary(&results);
            }
        }
    }

    Ok(all_valid)
}
