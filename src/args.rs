//! Command line flags naming the key and certificate files.
//!
//! | Flag                       | Default  | Meaning                 |
//! |----------------------------|----------|-------------------------|
//! | `--tls-key-path`           | Required | File containing the PEM-format private key |
//! | `--tls-cert-path`          | Required | File containing the PEM-format certificate chain, leaf first |
//! | `--tls-single-certificate` | false    | Install only the first certificate of `--tls-cert-path` |
use std::path::PathBuf;

use crate::{TlsContextBuilder, TlsContextError};

/// Command line arguments for a [`TlsContextBuilder`]. The paths are
/// read once when the builder is created.
#[derive(clap::Args, Debug, Default)]
#[group(id = "hardened_tls_args")]
pub struct Args {
    #[arg(long, help = "Path to TLS private key in PEM format.")]
    pub tls_key_path: Option<PathBuf>,

    #[arg(
        long,
        help = "Path to TLS certificate chain in PEM format, leaf first, then intermediates, then optionally the root."
    )]
    pub tls_cert_path: Option<PathBuf>,

    #[arg(
        long,
        help = "Treat --tls-cert-path as a single certificate rather than a chain."
    )]
    pub tls_single_certificate: bool,
}

impl TlsContextBuilder {
    /// Read the files named by `args` and prepare a builder from them.
    pub fn from_args(args: &Args) -> Result<Self, TlsContextError> {
        let (Some(key_path), Some(cert_path)) = (&args.tls_key_path, &args.tls_cert_path) else {
            return Err(TlsContextError::NoTlsFlags);
        };
        let private_key = std::fs::read_to_string(key_path)?;
        let certificate = std::fs::read_to_string(cert_path)?;
        Self::new(private_key, certificate, !args.tls_single_certificate)
    }
}
