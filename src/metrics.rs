use lazy_static::lazy_static;
use num::NumCast;
use prometheus::{register_gauge, register_int_counter_vec};
use std::sync::Arc;

use crate::{TlsContext, TlsContextError};

lazy_static! {
    static ref TLS_CONTEXT_BUILDS: prometheus::IntCounterVec = register_int_counter_vec!(
        "tls_context_builds_total",
        "Number of attempts to build a TLS server context, by outcome",
        &["result"]
    )
    .unwrap();
    static ref TLS_CERTIFICATE_EXPIRATION: prometheus::Gauge = register_gauge!(
        "tls_certificate_valid_until",
        "Expiration time of the most recently installed TLS certificate",
    )
    .unwrap();
}

pub(crate) fn record(result: &Result<Arc<TlsContext>, TlsContextError>) {
    match result {
        Ok(context) => {
            TLS_CONTEXT_BUILDS.with_label_values(&["ok"]).inc();
            TLS_CERTIFICATE_EXPIRATION.set(
                <f64 as NumCast>::from(context.valid_until().unix_timestamp()).unwrap_or_default(),
            );
        }
        Err(_) => TLS_CONTEXT_BUILDS.with_label_values(&["error"]).inc(),
    }
}
