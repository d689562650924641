use std::sync::atomic::{AtomicU64, Ordering};

use crate::geo::ProximityStats;

#[derive(Default)]
pub struct AppMetrics {
    request_count: AtomicU64,
    error_count: AtomicU64,
    latency_total_ms: AtomicU64,
    latency_count: AtomicU64,
    proximity_queries: AtomicU64,
    proximity_candidates: AtomicU64,
    proximity_matches: AtomicU64,
    geodesic_fallbacks: AtomicU64,
}

impl AppMetrics {
    pub fn record_request(&self, status: u16, latency_ms: u64) {
        self.request_count.fetch_add(1, Ordering::Relaxed);
        if status >= 500 {
            self.error_count.fetch_add(1, Ordering::Relaxed);
        }
        self.latency_total_ms
            .fetch_add(latency_ms, Ordering::Relaxed);
        self.latency_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_proximity_query(&self, stats: &ProximityStats) {
        self.proximity_queries.fetch_add(1, Ordering::Relaxed);
        self.proximity_candidates
            .fetch_add(stats.evaluated as u64, Ordering::Relaxed);
        self.proximity_matches
            .fetch_add(stats.matched as u64, Ordering::Relaxed);
        self.geodesic_fallbacks
            .fetch_add(stats.fallbacks as u64, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self, db_size: u32, db_idle: usize) -> String {
        let count = self.latency_count.load(Ordering::Relaxed).max(1);
        let avg_latency = self.latency_total_ms.load(Ordering::Relaxed) as f64 / count as f64;

        format!(
            concat!(
                "# TYPE http_requests_total counter\n",
                "http_requests_total {}\n",
                "# TYPE http_error_total counter\n",
                "http_error_total {}\n",
                "# TYPE http_latency_avg_ms gauge\n",
                "http_latency_avg_ms {:.2}\n",
                "# TYPE proximity_queries_total counter\n",
                "proximity_queries_total {}\n",
                "# TYPE proximity_candidates_total counter\n",
                "proximity_candidates_total {}\n",
                "# TYPE proximity_matches_total counter\n",
                "proximity_matches_total {}\n",
                "# TYPE geodesic_fallbacks_total counter\n",
                "geodesic_fallbacks_total {}\n",
                "# TYPE db_pool_size gauge\n",
                "db_pool_size {}\n",
                "# TYPE db_pool_idle gauge\n",
                "db_pool_idle {}\n",
            ),
            self.request_count.load(Ordering::Relaxed),
            self.error_count.load(Ordering::Relaxed),
            avg_latency,
            self.proximity_queries.load(Ordering::Relaxed),
            self.proximity_candidates.load(Ordering::Relaxed),
            self.proximity_matches.load(Ordering::Relaxed),
            self.geodesic_fallbacks.load(Ordering::Relaxed),
            db_size,
            db_idle,
        )
    }
}
