//! Channel metrics

use prometheus::{register_counter_vec, register_histogram_vec, CounterVec, HistogramVec};

lazy_static::lazy_static! {
    pub static ref CHANNEL_REQUESTS_TOTAL: CounterVec = register_counter_vec!(
        "channel_requests_total",
        "Total channel round trips",
        &["kind", "status"]
    )
    .unwrap();

    pub static ref CHANNEL_REQUEST_DURATION: HistogramVec = register_histogram_vec!(
        "channel_request_duration_seconds",
        "Channel round trip duration",
        &["kind"]
    )
    .unwrap();
}
