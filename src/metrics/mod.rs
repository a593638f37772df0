//! Prometheus metrics for engagement-service.
//!
//! Exposes toggle-operation collectors and an HTTP handler for the
//! `/metrics` endpoint.

use actix_web::HttpResponse;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

static TOGGLE_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "engagement_toggle_total",
        "Toggle operations by relation and resulting state",
        &["relation", "state"]
    )
    .expect("toggle counter registers")
});

/// Record one toggle operation and the state it resolved to.
pub fn record_toggle(relation: &str, active: bool) {
    let state = if active { "active" } else { "inactive" };
    TOGGLE_TOTAL.with_label_values(&[relation, state]).inc();
}

/// Actix handler that renders Prometheus metrics in text format.
pub async fn serve_metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(err.to_string());
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_counter_accumulates_by_label() {
        record_toggle("like", true);
        record_toggle("like", true);
        record_toggle("like", false);

        assert!(TOGGLE_TOTAL.with_label_values(&["like", "active"]).get() >= 2);
        assert!(TOGGLE_TOTAL.with_label_values(&["like", "inactive"]).get() >= 1);
    }
}
