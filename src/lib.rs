//! Hardened TLS server contexts from in-memory PEM material.
//!
//! A [`TlsContextBuilder`] holds a PEM private key and a PEM certificate
//! (or leaf-first certificate chain). The first call to
//! [`TlsContextBuilder::get_context`] builds a [`TlsContext`]: a rustls
//! [`rustls::ServerConfig`] restricted by [`policy::HARDENED_POLICY`],
//! carrying the certificate chain and a private key that has been checked
//! against the leaf certificate. Every later call returns that same
//! context, so listeners can fetch it once per accepted connection.
//!
//! There is no reload: new material means a new builder.
//!
//! # Features
//!
//! * **acceptor** (default): [`TlsContext::acceptor`] for `tokio-rustls`.
//! * **args** (default): [`args::Args`] command line flags naming the key
//!   and certificate files.
//! * **metrics** (default): Prometheus counters of build outcomes and a
//!   gauge of the installed certificate's expiry.

#![warn(missing_docs)]

#[cfg(feature = "args")]
pub mod args;
pub mod builder;
mod chain_file;
pub mod context;
pub mod crypto_provider;
pub mod error;
#[cfg(feature = "metrics")]
mod metrics;
mod pem;
pub mod policy;
#[cfg(test)]
mod testdata;

#[cfg(feature = "args")]
pub use args::Args;
pub use builder::TlsContextBuilder;
pub use context::TlsContext;
pub use error::TlsContextError;
pub use policy::{HARDENED_POLICY, HardeningPolicy};
