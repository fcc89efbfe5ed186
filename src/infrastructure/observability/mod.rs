//! Observability infrastructure - Prometheus metrics

mod metrics;

pub use self::metrics::{
    create_metrics_router, init_metrics, record_http_request, record_prediction,
    PrometheusMetrics, UNMATCHED_ROUTE,
};
