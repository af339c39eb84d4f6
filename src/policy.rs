//! The fixed hardening policy applied to every server context.
//!
//! The policy is a table rather than a cipher string: an ordered list of
//! protocol versions, the versions that must never be offered, an ordered
//! list of cipher suites, and two toggles. [`HARDENED_POLICY`] is the only
//! instance the builder ever applies.
//!
//! | Setting             | Value                                       |
//! |---------------------|---------------------------------------------|
//! | Protocol versions   | TLS 1.3, TLS 1.2                            |
//! | Never offered       | SSLv2, SSLv3, TLS 1.0, TLS 1.1              |
//! | Compression         | off                                         |
//! | Suite selection     | server order                                |
//! | Cipher suites       | AEAD only, ECDHE key exchange for TLS 1.2   |

use log::debug;
use rustls::crypto::CryptoProvider;
use rustls::{CipherSuite, ProtocolVersion, SupportedProtocolVersion};

use crate::TlsContextError;

/// Substrings that must not appear in any suite name of a policy.
const FORBIDDEN_SUITE_FRAGMENTS: &[&str] =
    &["_anon_", "NULL", "MD5", "_DSS_", "EXPORT", "RC4", "_DES_"];

/// Protocol versions, cipher suites and handshake toggles for a server context.
#[derive(Debug)]
pub struct HardeningPolicy {
    /// Versions offered during negotiation, highest first.
    pub versions: &'static [&'static SupportedProtocolVersion],
    /// Versions that must never appear in `versions`.
    pub disabled_versions: &'static [ProtocolVersion],
    /// Suites in order of server preference, with their IANA names.
    pub cipher_suites: &'static [(&'static str, CipherSuite)],
    /// Whether TLS-level compression may be negotiated.
    pub compression: bool,
    /// Whether the server's suite order overrides the client's.
    pub server_preference: bool,
}

/// The policy installed into every context built by
/// [`crate::TlsContextBuilder`].
pub static HARDENED_POLICY: HardeningPolicy = HardeningPolicy {
    versions: &[&rustls::version::TLS13, &rustls::version::TLS12],
    disabled_versions: &[
        ProtocolVersion::SSLv2,
        ProtocolVersion::SSLv3,
        ProtocolVersion::TLSv1_0,
        ProtocolVersion::TLSv1_1,
    ],
    cipher_suites: &[
        ("TLS_AES_256_GCM_SHA384", CipherSuite::TLS13_AES_256_GCM_SHA384),
        ("TLS_AES_128_GCM_SHA256", CipherSuite::TLS13_AES_128_GCM_SHA256),
        (
            "TLS_CHACHA20_POLY1305_SHA256",
            CipherSuite::TLS13_CHACHA20_POLY1305_SHA256,
        ),
        (
            "TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384",
            CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384,
        ),
        (
            "TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384",
            CipherSuite::TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384,
        ),
        (
            "TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256",
            CipherSuite::TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256,
        ),
        (
            "TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256",
            CipherSuite::TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256,
        ),
        (
            "TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256",
            CipherSuite::TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256,
        ),
        (
            "TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256",
            CipherSuite::TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256,
        ),
    ],
    compression: false,
    server_preference: true,
};

impl HardeningPolicy {
    /// Check the policy's internal consistency.
    pub fn validate(&self) -> Result<(), TlsContextError> {
        if self.compression {
            return Err(TlsContextError::Policy(
                "TLS compression cannot be enabled".into(),
            ));
        }
        if self.versions.is_empty() {
            return Err(TlsContextError::Policy("no protocol versions".into()));
        }
        if let Some(v) = self
            .versions
            .iter()
            .find(|v| self.disabled_versions.contains(&v.version))
        {
            return Err(TlsContextError::Policy(format!(
                "{:?} is both enabled and disabled",
                v.version
            )));
        }
        if self.cipher_suites.is_empty() {
            return Err(TlsContextError::Policy("no cipher suites".into()));
        }
        for (name, _) in self.cipher_suites {
            if let Some(fragment) = FORBIDDEN_SUITE_FRAGMENTS
                .iter()
                .find(|f| name.contains(*f))
            {
                return Err(TlsContextError::Policy(format!(
                    "{} is forbidden ({})",
                    name,
                    fragment.trim_matches('_')
                )));
            }
        }
        Ok(())
    }

    /// Colon-separated suite names in preference order.
    pub fn cipher_string(&self) -> String {
        self.cipher_suites
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(":")
    }

    /// The wire versions this policy offers, highest first.
    pub fn protocol_versions(&self) -> Vec<ProtocolVersion> {
        self.versions.iter().map(|v| v.version).collect()
    }

    /// Derive a [`CryptoProvider`] from `base` that implements exactly the
    /// listed suites, in policy order. Listed suites that `base` does not
    /// implement, or that belong to a version this policy does not offer,
    /// are left out.
    pub fn provider(&self, base: &CryptoProvider) -> Result<CryptoProvider, TlsContextError> {
        let mut cipher_suites = Vec::with_capacity(self.cipher_suites.len());
        for (name, id) in self.cipher_suites {
            match base.cipher_suites.iter().find(|s| s.suite() == *id) {
                Some(suite)
                    if self
                        .versions
                        .iter()
                        .any(|v| v.version == suite.version().version) =>
                {
                    cipher_suites.push(*suite);
                }
                Some(_) => debug!("Skipping {}: protocol version not offered", name),
                None => debug!("Skipping {}: not implemented by crypto provider", name),
            }
        }
        if cipher_suites.is_empty() {
            return Err(TlsContextError::Policy(
                "crypto provider implements none of the listed cipher suites".into(),
            ));
        }
        let mut provider = base.clone();
        provider.cipher_suites = cipher_suites;
        Ok(provider)
    }
}
