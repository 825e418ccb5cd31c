//! Integration tests for the API server.

use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

use api::AppState;
use api::routes::status::StatusReporter;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use forms::Messages;
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceExt;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

fn get_metrics_handle() -> PrometheusHandle {
    METRICS_HANDLE
        .get_or_init(|| {
            let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
            builder
                .install_recorder()
                .expect("failed to install Prometheus recorder")
        })
        .clone()
}

fn setup() -> axum::Router {
    api::create_app(api::create_default_state(), get_metrics_handle())
}

fn setup_with_state(state: AppState) -> axum::Router {
    api::create_app(Arc::new(state), get_metrics_handle())
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post_json(
    app: axum::Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    post_raw(app, uri, serde_json::to_string(&body).unwrap()).await
}

async fn post_raw(app: axum::Router, uri: &str, body: String) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn error_fields(json: &serde_json::Value) -> Vec<&str> {
    json["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect()
}

mod status {
    use super::*;

    #[tokio::test]
    async fn test_status_report_shape() {
        let (status, json) = get_json(setup(), "/status").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "online");
        assert_eq!(json["version"], "1.0.0");

        let uptime = json["uptime"].as_str().unwrap();
        let seconds = uptime.strip_suffix('s').unwrap();
        assert!(seconds.parse::<u64>().is_ok(), "uptime: {uptime}");

        let timestamp = json["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[tokio::test]
    async fn test_health_alias() {
        let (status, json) = get_json(setup(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "online");
    }

    #[tokio::test]
    async fn test_uptime_measured_from_injected_start() {
        // The monotonic clock may not reach back 120s on a freshly booted host.
        let Some(started) = Instant::now().checked_sub(Duration::from_secs(120)) else {
            return;
        };
        let app = setup_with_state(AppState::new(
            StatusReporter::new(started),
            Messages::default(),
        ));

        let (_, json) = get_json(app, "/status").await;
        let seconds: u64 = json["uptime"]
            .as_str()
            .unwrap()
            .trim_end_matches('s')
            .parse()
            .unwrap();
        assert!(seconds >= 120, "uptime: {seconds}");
    }

    #[tokio::test]
    async fn test_version_stable_across_calls() {
        let app = setup();
        let (_, first) = get_json(app.clone(), "/status").await;
        let (_, second) = get_json(app, "/status").await;
        assert_eq!(first["version"], second["version"]);
    }
}

mod classrooms {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_valid_classroom() {
        let (status, json) = post_json(
            setup(),
            "/classrooms/validate",
            json!({ "name": "Lab 1", "capacity": "30", "building": "B" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            json!({ "name": "Lab 1", "capacity": 30, "building": "B" })
        );
    }

    #[tokio::test]
    async fn test_capacity_defaults_and_building_omitted() {
        let (status, json) =
            post_json(setup(), "/classrooms/validate", json!({ "name": "Sala 3" })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({ "name": "Sala 3", "capacity": 0 }));
    }

    #[tokio::test]
    async fn test_numeric_capacity_accepted() {
        let (status, json) = post_json(
            setup(),
            "/classrooms/validate",
            json!({ "name": "Sala 3", "capacity": 45 }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["capacity"], 45);
    }

    #[tokio::test]
    async fn test_all_errors_reported() {
        let (status, json) = post_json(
            setup(),
            "/classrooms/validate",
            json!({ "name": "", "capacity": "abc" }),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(error_fields(&json), vec!["name", "capacity"]);
        assert_eq!(
            json["errors"][0]["message"],
            Messages::default().name_required
        );
    }

    #[tokio::test]
    async fn test_custom_messages_used() {
        let messages = Messages::from_json(r#"{"nameRequired": "Name is required"}"#).unwrap();
        let app = setup_with_state(AppState::new(StatusReporter::new(Instant::now()), messages));

        let (status, json) =
            post_json(app, "/classrooms/validate", json!({ "capacity": "3" })).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["errors"][0]["message"], "Name is required");
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let (status, json) =
            post_raw(setup(), "/classrooms/validate", "{\"name\": ".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_composite_field_is_bad_request() {
        let (status, _) = post_json(
            setup(),
            "/classrooms/validate",
            json!({ "name": ["Lab"] }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_bad_request() {
        let response = setup()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/classrooms/validate")
                    .body(Body::from(r#"{"name": "Lab 1"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["error"].as_str().is_some());
    }
}

mod learning_types {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_accepted_cycles() {
        for cycle in ["Licenta", "Master"] {
            let (status, json) = post_json(
                setup(),
                "/learning-types/validate",
                json!({ "learningCycle": cycle }),
            )
            .await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(json, json!({ "learningCycle": cycle }));
        }
    }

    #[tokio::test]
    async fn test_rejected_cycles() {
        for body in [
            json!({ "learningCycle": "Doctorat" }),
            json!({ "learningCycle": "" }),
            json!({ "learningCycle": null }),
        ] {
            let (status, json) = post_json(setup(), "/learning-types/validate", body).await;

            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(error_fields(&json), vec!["learningCycle"]);
        }
    }
}

mod academic_years {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_valid_year() {
        let (status, json) = post_json(
            setup(),
            "/academic-years/validate",
            json!({ "start": "2024", "end": "2025" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({ "start": 2024, "end": 2025 }));
    }

    #[tokio::test]
    async fn test_reversed_years_accepted() {
        let (status, json) = post_json(
            setup(),
            "/academic-years/validate",
            json!({ "start": "2025", "end": "2024" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({ "start": 2025, "end": 2024 }));
    }

    #[tokio::test]
    async fn test_early_years_rejected() {
        let (status, json) = post_json(
            setup(),
            "/academic-years/validate",
            json!({ "start": "1999", "end": "1999" }),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(error_fields(&json), vec!["start", "end"]);
    }
}

mod metrics {
    use super::*;
    use serde_json::json;

    async fn scrape(app: axum::Router) -> String {
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/metrics")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    /// Returns true if some sample of `metric` carries every label in `labels`.
    fn has_sample(text: &str, metric: &str, labels: &[&str]) -> bool {
        text.lines()
            .filter(|line| line.starts_with(metric))
            .any(|line| labels.iter().all(|label| line.contains(label)))
    }

    #[tokio::test]
    async fn test_valid_form_counted_as_valid() {
        let app = setup();
        post_json(
            app.clone(),
            "/academic-years/validate",
            json!({ "start": "2024", "end": "2025" }),
        )
        .await;

        let text = scrape(app).await;
        assert!(has_sample(
            &text,
            "form_validations_total",
            &[r#"form="academic_year""#, r#"outcome="valid""#]
        ));
    }

    #[tokio::test]
    async fn test_rejected_form_counted_as_invalid() {
        let app = setup();
        let (status, _) = post_json(
            app.clone(),
            "/classrooms/validate",
            json!({ "name": "", "capacity": "abc" }),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let text = scrape(app).await;
        assert!(has_sample(
            &text,
            "form_validations_total",
            &[r#"form="classroom""#, r#"outcome="invalid""#]
        ));
    }

    #[tokio::test]
    async fn test_status_checks_counted() {
        let app = setup();
        let (status, _) = get_json(app.clone(), "/status").await;
        assert_eq!(status, StatusCode::OK);

        let text = scrape(app).await;
        assert!(has_sample(&text, "status_checks_total", &[]));
    }
}
