//! Liveness endpoint reporting uptime and version.

use std::sync::Arc;
use std::time::Instant;

use axum::Json;
use axum::extract::State;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Version string reported by the status endpoint.
pub const VERSION: &str = "1.0.0";

/// Body of `GET /status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    pub status: String,
    pub version: String,
    /// Whole seconds since process start, suffixed with `s` (e.g. `"42s"`).
    pub uptime: String,
    /// RFC 3339 UTC time of the check, millisecond precision.
    pub timestamp: String,
}

/// Builds status reports relative to a start instant fixed at startup.
#[derive(Debug, Clone, Copy)]
pub struct StatusReporter {
    started: Instant,
}

impl StatusReporter {
    /// Creates a reporter measuring uptime from `started`.
    pub fn new(started: Instant) -> Self {
        Self { started }
    }

    /// Reports against the current monotonic and wall clocks.
    pub fn report(&self) -> StatusReport {
        self.report_at(Instant::now(), Utc::now())
    }

    /// Reports as if the monotonic clock read `now` and the wall clock `wall`.
    pub fn report_at(&self, now: Instant, wall: DateTime<Utc>) -> StatusReport {
        let uptime = now.saturating_duration_since(self.started).as_secs();
        StatusReport {
            status: "online".to_string(),
            version: VERSION.to_string(),
            uptime: format!("{uptime}s"),
            timestamp: wall.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// GET /status: returns liveness, version, and uptime.
#[tracing::instrument(skip(state))]
pub async fn check(State(state): State<Arc<AppState>>) -> Json<StatusReport> {
    metrics::counter!("status_checks_total").increment(1);
    Json(state.status.report())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::TimeZone;

    use super::*;

    #[test]
    fn uptime_counts_whole_seconds() {
        let started = Instant::now();
        let reporter = StatusReporter::new(started);
        let wall = Utc::now();

        assert_eq!(reporter.report_at(started, wall).uptime, "0s");
        assert_eq!(
            reporter
                .report_at(started + Duration::from_millis(999), wall)
                .uptime,
            "0s"
        );
        assert_eq!(
            reporter
                .report_at(started + Duration::from_secs(5), wall)
                .uptime,
            "5s"
        );
        assert_eq!(
            reporter
                .report_at(started + Duration::from_millis(61_500), wall)
                .uptime,
            "61s"
        );
    }

    #[test]
    fn clock_before_start_saturates_to_zero() {
        let started = Instant::now() + Duration::from_secs(10);
        let reporter = StatusReporter::new(started);
        assert_eq!(reporter.report_at(Instant::now(), Utc::now()).uptime, "0s");
    }

    #[test]
    fn fixed_fields_do_not_change() {
        let reporter = StatusReporter::new(Instant::now());
        let first = reporter.report();
        let second = reporter.report();

        assert_eq!(first.status, "online");
        assert_eq!(first.version, VERSION);
        assert_eq!(first.version, second.version);
    }

    #[test]
    fn timestamp_is_rfc3339_with_millis() {
        let started = Instant::now();
        let reporter = StatusReporter::new(started);
        let wall = Utc.with_ymd_and_hms(2024, 10, 1, 8, 30, 0).unwrap();

        let report = reporter.report_at(started, wall);
        assert_eq!(report.timestamp, "2024-10-01T08:30:00.000Z");
        assert!(DateTime::parse_from_rfc3339(&report.timestamp).is_ok());
    }
}
