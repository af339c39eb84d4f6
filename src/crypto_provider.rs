//! Choose the [`CryptoProvider`] that contexts are derived from.

use rustls::crypto::CryptoProvider;
use std::sync::Arc;

/// The process-global default [`CryptoProvider`] if there is one,
/// otherwise the aws-lc-rs provider. The hardening policy narrows
/// whichever is chosen.
pub fn crypto_provider() -> Arc<CryptoProvider> {
    CryptoProvider::get_default()
        .cloned()
        .unwrap_or_else(|| Arc::new(rustls::crypto::aws_lc_rs::default_provider()))
}
