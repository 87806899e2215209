/**
 * Request Metrics
 *
 * This module provides process-wide request counters, owned by `AppState`
 * rather than sitting in module-level statics.
 *
 * # Tracked Values
 *
 * - Total number of requests handled
 * - Number of error responses (4xx and 5xx)
 * - Average latency over the last 1000 requests
 * - Process uptime
 *
 * # Exposition
 *
 * `GET /metrics` renders the counters in Prometheus text format.
 */

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

const LATENCY_WINDOW: usize = 1000;

/// Shared metrics handle
#[derive(Clone)]
pub struct Metrics {
    inner: Arc<MetricsInner>,
}

struct MetricsInner {
    requests_total: AtomicU64,
    errors_total: AtomicU64,
    durations_ms: Mutex<VecDeque<u64>>,
    started_at: Instant,
}

/// Point-in-time view of the counters
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSnapshot {
    pub requests_total: u64,
    pub errors_total: u64,
    pub average_latency_ms: f64,
    pub uptime_seconds: u64,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MetricsInner {
                requests_total: AtomicU64::new(0),
                errors_total: AtomicU64::new(0),
                durations_ms: Mutex::new(VecDeque::with_capacity(LATENCY_WINDOW)),
                started_at: Instant::now(),
            }),
        }
    }

    /// Record one finished request
    pub fn record(&self, is_error: bool, duration_ms: u64) {
        self.inner.requests_total.fetch_add(1, Ordering::Relaxed);
        if is_error {
            self.inner.errors_total.fetch_add(1, Ordering::Relaxed);
        }

        let mut durations = self.inner.durations_ms.lock().unwrap();
        if durations.len() == LATENCY_WINDOW {
            durations.pop_front();
        }
        durations.push_back(duration_ms);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let durations = self.inner.durations_ms.lock().unwrap();
        let average_latency_ms = if durations.is_empty() {
            0.0
        } else {
            durations.iter().sum::<u64>() as f64 / durations.len() as f64
        };

        MetricsSnapshot {
            requests_total: self.inner.requests_total.load(Ordering::Relaxed),
            errors_total: self.inner.errors_total.load(Ordering::Relaxed),
            average_latency_ms,
            uptime_seconds: self.inner.started_at.elapsed().as_secs(),
        }
    }

    /// Render the counters in Prometheus text format
    pub fn render_prometheus(&self) -> String {
        let snapshot = self.snapshot();
        format!(
            "# HELP requests_total Total number of HTTP requests\n\
             # TYPE requests_total counter\n\
             requests_total {}\n\
             \n\
             # HELP errors_total Total number of HTTP errors (4xx and 5xx)\n\
             # TYPE errors_total counter\n\
             errors_total {}\n\
             \n\
             # HELP http_request_duration_ms Average HTTP request duration in milliseconds\n\
             # TYPE http_request_duration_ms gauge\n\
             http_request_duration_ms {:.2}\n\
             \n\
             # HELP process_uptime_seconds Process uptime in seconds\n\
             # TYPE process_uptime_seconds gauge\n\
             process_uptime_seconds {}\n",
            snapshot.requests_total,
            snapshot.errors_total,
            snapshot.average_latency_ms,
            snapshot.uptime_seconds,
        )
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Count every request and its latency
pub async fn metrics_middleware(
    State(metrics): State<Metrics>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let response = next.run(request).await;

    let duration_ms = start.elapsed().as_millis() as u64;
    metrics.record(response.status().is_client_error() || response.status().is_server_error(), duration_ms);

    response
}

/// GET /metrics
pub async fn handle_metrics(State(metrics): State<Metrics>) -> String {
    metrics.render_prometheus()
}
