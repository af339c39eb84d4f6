//! Errors reported while preparing or building a TLS context.

use thiserror::Error;

/// Error type returned by hardened_tls functions
#[derive(Debug, Error)]
pub enum TlsContextError {
    /// The private key or certificate given to the builder was empty.
    #[error("{0} is empty")]
    InvalidMaterial(&'static str),
    /// PEM or DER content could not be decoded.
    #[error("cannot parse {0}")]
    Parse(String),
    /// The private key does not belong to the leaf certificate.
    #[error("private key does not match the certificate public key")]
    KeyMismatch,
    /// Wrapper for std::io::Error
    #[error("{0}")]
    IOError(#[from] std::io::Error),
    /// The hardening policy cannot be applied as written.
    #[error("invalid TLS policy: {0}")]
    Policy(String),
    /// Wrapper for rustls::Error
    #[error("{0}")]
    TLSError(rustls::Error),
    /// Configuration names neither the key nor the certificate file.
    #[error("--tls-key-path and --tls-cert-path not given")]
    NoTlsFlags,
}

impl From<rustls::Error> for TlsContextError {
    fn from(e: rustls::Error) -> Self {
        match e {
            rustls::Error::InconsistentKeys(_) => Self::KeyMismatch,
            rustls::Error::InvalidCertificate(rustls::CertificateError::BadEncoding) => {
                Self::Parse("certificate".into())
            }
            e => Self::TLSError(e),
        }
    }
}
