//! Certificate fetcher
//!
//! Opens a TLS connection to a host, performs the handshake against the
//! configured trust anchors, and extracts the raw expiry and issuer fields
//! from the peer's leaf certificate. The connection and session live only
//! for the duration of the call.

use crate::config::CheckSettings;
use crate::models::{format_not_after, CertificateInfo};
use crate::utils::FetchError;
use chrono::{DateTime, TimeZone, Utc};
use rustls::pki_types::ServerName;
use rustls::{ClientConfig, RootCertStore};
use std::sync::Arc;
use tokio::net::TcpStream;
use x509_parser::prelude::*;

/// Acquires leaf-certificate data for a host.
///
/// Abstracted as a trait so the evaluator can be driven by a mock in tests
/// instead of depending on live network and trust-store state.
pub trait CertificateFetcher {
    /// Fetch the leaf certificate's raw fields from `host`.
    ///
    /// At most one connection attempt is made; no retry.
    fn fetch(
        &self,
        host: &str,
    ) -> impl std::future::Future<Output = Result<CertificateInfo, FetchError>>;
}

/// Production fetcher: rustls handshake over tokio with webpki trust anchors
pub struct TlsFetcher {
    settings: CheckSettings,
    root_store: Arc<RootCertStore>,
}

impl TlsFetcher {
    /// Create a fetcher trusting the Mozilla root program (webpki-roots)
    pub fn new(settings: CheckSettings) -> Self {
        let root_store =
            RootCertStore::from_iter(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
        Self::with_root_store(settings, root_store)
    }

    /// Create a fetcher with injected trust anchors (private CAs, tests)
    pub fn with_root_store(settings: CheckSettings, root_store: RootCertStore) -> Self {
        // Ensure a default crypto provider is installed (needed when multiple
        // providers are available)
        let _ = rustls::crypto::ring::default_provider().install_default();
        Self {
            settings,
            root_store: Arc::new(root_store),
        }
    }
}

impl CertificateFetcher for TlsFetcher {
    async fn fetch(&self, host: &str) -> Result<CertificateInfo, FetchError> {
        let port = self.settings.port;

        let server_name =
            ServerName::try_from(host.to_string()).map_err(|_| FetchError::InvalidHostname {
                host: host.to_string(),
            })?;

        let addr = tokio::net::lookup_host((host, port))
            .await
            .map_err(|e| FetchError::Dns {
                host: host.to_string(),
                message: e.to_string(),
            })?
            .next()
            .ok_or_else(|| FetchError::Dns {
                host: host.to_string(),
                message: "no addresses found".to_string(),
            })?;

        let stream = tokio::time::timeout(
            self.settings.connect_timeout(),
            TcpStream::connect(addr),
        )
        .await
        .map_err(|_| FetchError::ConnectTimeout {
            host: host.to_string(),
            port,
            secs: self.settings.connect_timeout_secs,
        })?
        .map_err(|e| FetchError::Connection {
            host: host.to_string(),
            message: e.to_string(),
        })?;

        let config = ClientConfig::builder()
            .with_root_certificates(Arc::clone(&self.root_store))
            .with_no_client_auth();
        let connector = tokio_rustls::TlsConnector::from(Arc::new(config));

        let tls_stream = tokio::time::timeout(
            self.settings.handshake_timeout(),
            connector.connect(server_name, stream),
        )
        .await
        .map_err(|_| FetchError::HandshakeTimeout {
            host: host.to_string(),
            secs: self.settings.handshake_timeout_secs,
        })?
        .map_err(|e| FetchError::Handshake {
            host: host.to_string(),
            message: e.to_string(),
        })?;

        let (_, connection) = tls_stream.get_ref();
        let leaf = connection
            .peer_certificates()
            .and_then(|certs| certs.first())
            .ok_or_else(|| FetchError::NoCertificate {
                host: host.to_string(),
            })?;

        let info = extract_leaf_fields(host, leaf.as_ref());
        tracing::debug!("fetched certificate for {} from {}", host, addr);
        info
        // tls_stream drops here, closing connection and session
    }
}

/// Pull the expiry and issuer-organization fields out of a DER-encoded leaf
fn extract_leaf_fields(host: &str, der: &[u8]) -> Result<CertificateInfo, FetchError> {
    let (_, cert) = X509Certificate::from_der(der).map_err(|e| FetchError::CertificateParse {
        host: host.to_string(),
        message: format!("{:?}", e),
    })?;

    let not_after = format_not_after(&timestamp_to_datetime(
        host,
        cert.validity().not_after.timestamp(),
    )?);

    let issuer_organization = cert
        .issuer()
        .iter_organization()
        .next()
        .and_then(|attr| attr.as_str().ok())
        .map(|s| s.to_string());

    Ok(CertificateInfo {
        not_after,
        issuer_organization,
    })
}

/// Convert an ASN.1 validity timestamp to chrono DateTime
fn timestamp_to_datetime(host: &str, timestamp: i64) -> Result<DateTime<Utc>, FetchError> {
    Utc.timestamp_opt(timestamp, 0)
        .single()
        .ok_or_else(|| FetchError::CertificateParse {
            host: host.to_string(),
            message: "Invalid timestamp in certificate".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity_timestamp_converts_to_utc() {
        let dt = timestamp_to_datetime("example.com", 1_767_657_599).unwrap();
        assert_eq!(format_not_after(&dt), "Jan  5 23:59:59 2026 GMT");
    }

    #[test]
    fn garbage_der_is_a_parse_error() {
        let err = extract_leaf_fields("example.com", b"not a certificate").unwrap_err();
        assert!(matches!(err, FetchError::CertificateParse { .. }));
    }
}
