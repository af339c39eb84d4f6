//! PEM decoding of in-memory key and certificate material.

use rustls_pki_types::{CertificateDer, PrivateKeyDer};
use std::io::Cursor;
use time::OffsetDateTime;
use x509_parser::certificate::X509Certificate;
use x509_parser::prelude::FromDer;

use crate::TlsContextError;

/// Every certificate in `pem`, in order. At least one is required.
pub(crate) fn certificates(pem: &[u8]) -> Result<Vec<CertificateDer<'static>>, TlsContextError> {
    let certs = rustls_pemfile::certs(&mut Cursor::new(pem))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| TlsContextError::Parse(format!("certificate: {}", e)))?;
    if certs.is_empty() {
        return Err(TlsContextError::Parse(
            "certificate: no PEM certificate found".into(),
        ));
    }
    Ok(certs)
}

/// The first private key in `pem`.
pub(crate) fn private_key(pem: &[u8]) -> Result<PrivateKeyDer<'static>, TlsContextError> {
    rustls_pemfile::private_key(&mut Cursor::new(pem))
        .map_err(|e| TlsContextError::Parse(format!("private key: {}", e)))?
        .ok_or_else(|| TlsContextError::Parse("private key: no PEM private key found".into()))
}

/// What gets logged and exported about an installed chain.
#[derive(Debug)]
pub(crate) struct LeafSummary {
    pub(crate) subject: String,
    pub(crate) not_after: OffsetDateTime,
}

/// Decode every certificate of `chain` as X.509 and summarise the leaf.
pub(crate) fn inspect_chain(
    chain: &[CertificateDer<'_>],
) -> Result<LeafSummary, TlsContextError> {
    let mut leaf = None;
    for (i, der) in chain.iter().enumerate() {
        let (_, cert) = X509Certificate::from_der(der.as_ref())
            .map_err(|e| TlsContextError::Parse(format!("certificate #{} in chain: {}", i, e)))?;
        leaf.get_or_insert_with(|| LeafSummary {
            subject: cert.subject().to_string(),
            not_after: cert.validity().not_after.to_datetime(),
        });
    }
    leaf.ok_or_else(|| TlsContextError::Parse("certificate: empty chain".into()))
}
