//! CLI module for certwatch

pub mod args;

pub use args::{Cli, OutputFormat};

use crate::utils::{CertwatchError, Result};
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a host list file: one host per line, blanks and '#' comments skipped,
/// entries trimmed.
pub fn read_hosts_file(path: &Path) -> Result<Vec<String>> {
    let file = std::fs::File::open(path).map_err(|e| {
        CertwatchError::HostList(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let hosts = BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect();

    Ok(hosts)
}

/// Combine positional hosts and an optional host file into the batch input
pub fn collect_hosts(cli: &Cli) -> Result<Vec<String>> {
    let mut hosts: Vec<String> = cli
        .hosts
        .iter()
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty())
        .collect();

    if let Some(ref path) = cli.file {
        hosts.extend(read_hosts_file(path)?);
    }

    if hosts.is_empty() {
        return Err(CertwatchError::HostList(
            "No hosts provided; pass hostnames or --file".to_string(),
        ));
    }

    Ok(hosts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn host_file_skips_blanks_and_comments() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# monitored hosts").unwrap();
        writeln!(file, "example.com").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  spaced.example.org  ").unwrap();
        writeln!(file, "# trailing comment").unwrap();

        let hosts = read_hosts_file(file.path()).unwrap();
        assert_eq!(hosts, vec!["example.com", "spaced.example.org"]);
    }

    #[test]
    fn missing_host_file_is_an_error() {
        let err = read_hosts_file(Path::new("/nonexistent/hosts.txt")).unwrap_err();
        assert!(matches!(err, CertwatchError::HostList(_)));
    }
}
