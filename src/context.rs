//! The built server context handed to listeners.

use rustls::server::{ClientHello, ResolvesServerCert, ServerConfig};
use rustls::sign::CertifiedKey;
use rustls::{CipherSuite, ProtocolVersion};
use std::sync::Arc;
use time::OffsetDateTime;

use crate::pem::LeafSummary;

/// Hands the one installed identity to every handshake.
#[derive(Debug)]
pub(crate) struct SingleIdentity(pub(crate) Arc<CertifiedKey>);

impl ResolvesServerCert for SingleIdentity {
    fn resolve(&self, _client_hello: ClientHello<'_>) -> Option<Arc<CertifiedKey>> {
        Some(Arc::clone(&self.0))
    }
}

/// A hardened server context: policy, certificate chain and verified key.
///
/// A context never changes once built. Listeners share it across every
/// accepted connection.
#[derive(Debug)]
pub struct TlsContext {
    server_config: Arc<ServerConfig>,
    certified_key: Arc<CertifiedKey>,
    protocol_versions: Vec<ProtocolVersion>,
    leaf: LeafSummary,
}

impl TlsContext {
    pub(crate) fn new(
        server_config: ServerConfig,
        certified_key: Arc<CertifiedKey>,
        protocol_versions: Vec<ProtocolVersion>,
        leaf: LeafSummary,
    ) -> Self {
        Self {
            server_config: Arc::new(server_config),
            certified_key,
            protocol_versions,
            leaf,
        }
    }

    /// The rustls configuration to accept connections with.
    pub fn server_config(&self) -> Arc<ServerConfig> {
        Arc::clone(&self.server_config)
    }

    /// The installed certificate chain and signing key.
    pub fn certified_key(&self) -> &Arc<CertifiedKey> {
        &self.certified_key
    }

    /// Number of certificates presented to clients, leaf included.
    pub fn chain_len(&self) -> usize {
        self.certified_key.cert.len()
    }

    /// Protocol versions offered, highest first.
    pub fn protocol_versions(&self) -> &[ProtocolVersion] {
        &self.protocol_versions
    }

    /// Cipher suites offered, in server preference order.
    pub fn cipher_suites(&self) -> Vec<CipherSuite> {
        self.server_config
            .crypto_provider()
            .cipher_suites
            .iter()
            .map(|s| s.suite())
            .collect()
    }

    /// Subject of the leaf certificate.
    pub fn leaf_subject(&self) -> &str {
        &self.leaf.subject
    }

    /// End of the leaf certificate's validity period.
    pub fn valid_until(&self) -> OffsetDateTime {
        self.leaf.not_after
    }

    /// A [`tokio_rustls::TlsAcceptor`] sharing this context.
    #[cfg(feature = "acceptor")]
    pub fn acceptor(&self) -> tokio_rustls::TlsAcceptor {
        tokio_rustls::TlsAcceptor::from(self.server_config())
    }
}
