//! End-to-end submissions against a mock report backend

use std::sync::Arc;
use std::time::Duration;

use httpmock::prelude::*;
use serde_json::json;
use starscan::{
    ClientConfig, FixedClock, FormInput, HttpBackend, Place, RequestOrchestrator, ReportBackend,
    RequestPayload, ResponseOutcome, Struggle, SurfaceSnapshot, Trigger, TransportError, UiSurface,
};

fn ava() -> FormInput {
    FormInput {
        name: "Ava".to_string(),
        date: "2024-05-01".to_string(),
        time: "09:15".to_string(),
        city: None,
        struggle: None,
    }
}

fn config_for(url: String) -> ClientConfig {
    ClientConfig {
        backend_url: url,
        timeout: None,
    }
}

// Submits `form` once with a UTC-4 clock and returns what the UI ended up showing
async fn submit_once(config: &ClientConfig, form: FormInput) -> SurfaceSnapshot {
    let surface = Arc::new(UiSurface::new());
    let orchestrator = RequestOrchestrator::new(
        Arc::new(form),
        Arc::new(FixedClock(240)),
        Arc::new(HttpBackend::new(config).unwrap()),
        surface.clone(),
    );

    let submission = orchestrator.submit(Trigger::Click).await;
    assert!(submission.applied);
    surface.snapshot()
}

#[tokio::test]
async fn report_is_shown_with_offer() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/calculate")
                .header("content-type", "application/json")
                .json_body(json!({
                    "name": "Ava",
                    "date": "2024-05-01",
                    "time": "09:15",
                    "city": "",
                    "struggle": "Passion",
                    "tz": -4.0
                }));
            then.status(200)
                .json_body(json!({ "report": "Your path is clear." }));
        })
        .await;

    let snapshot = submit_once(&config_for(server.url("/calculate")), ava()).await;

    mock.assert_async().await;
    assert_eq!(snapshot.text(), "Your path is clear.");
    assert!(snapshot.offer_visible);
    assert!(snapshot.result_visible);
}

#[tokio::test]
async fn server_error_body_is_shown_verbatim() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/calculate");
            then.status(500).body("Invalid date");
        })
        .await;

    let snapshot = submit_once(&config_for(server.url("/calculate")), ava()).await;

    mock.assert_async().await;
    assert_eq!(snapshot.text(), "Server Error: Invalid date");
    assert!(!snapshot.offer_visible);
}

#[tokio::test]
async fn client_errors_count_as_server_errors() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/calculate");
            then.status(422).body("city not found");
        })
        .await;

    let snapshot = submit_once(&config_for(server.url("/calculate")), ava()).await;

    assert_eq!(snapshot.text(), "Server Error: city not found");
    assert!(!snapshot.offer_visible);
}

#[tokio::test]
async fn unreachable_backend_shows_connection_failed() {
    // nothing listens on port 1
    let config = config_for("http://127.0.0.1:1/calculate".to_string());

    let snapshot = submit_once(&config, ava()).await;

    assert_eq!(snapshot.text(), "Connection Failed.");
    assert!(!snapshot.offer_visible);
}

#[tokio::test]
async fn malformed_success_body_is_a_transport_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/calculate");
            then.status(200).body("<html>maintenance</html>");
        })
        .await;

    let backend = HttpBackend::new(&config_for(server.url("/calculate"))).unwrap();
    let payload = RequestPayload::assemble(ava(), -4.0);

    match backend.calculate(&payload).await {
        ResponseOutcome::TransportFailure {
            cause: TransportError::Decode(_),
        } => {}
        other => panic!("expected decode failure, got {:?}", other),
    }

    let snapshot = submit_once(&config_for(server.url("/calculate")), ava()).await;
    assert_eq!(snapshot.text(), "Connection Failed.");
}

#[tokio::test]
async fn missing_report_field_is_a_transport_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/calculate");
            then.status(200).json_body(json!({ "reading": "wrong key" }));
        })
        .await;

    let snapshot = submit_once(&config_for(server.url("/calculate")), ava()).await;

    assert_eq!(snapshot.text(), "Connection Failed.");
    assert!(!snapshot.offer_visible);
}

#[tokio::test]
async fn configured_timeout_ends_in_transport_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/calculate");
            then.status(200)
                .delay(Duration::from_millis(500))
                .json_body(json!({ "report": "too late" }));
        })
        .await;

    let config = ClientConfig {
        backend_url: server.url("/calculate"),
        timeout: Some(Duration::from_millis(50)),
    };
    let backend = HttpBackend::new(&config).unwrap();

    match backend.calculate(&RequestPayload::assemble(ava(), 0.0)).await {
        ResponseOutcome::TransportFailure {
            cause: TransportError::Request(err),
        } => assert!(err.is_timeout()),
        other => panic!("expected timeout, got {:?}", other),
    }
}

#[tokio::test]
async fn chosen_city_and_struggle_are_sent() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/calculate").json_body(json!({
                "name": "",
                "date": "",
                "time": "",
                "city": "Kyoto, Japan",
                "struggle": "Health",
                "tz": -4.0
            }));
            then.status(200).json_body(json!({ "report": "Rest well." }));
        })
        .await;

    // empty fields are sent as they are
    let form = FormInput {
        city: Some(Place::new("Kyoto, Japan")),
        struggle: Some(Struggle::Health),
        ..FormInput::default()
    };
    let snapshot = submit_once(&config_for(server.url("/calculate")), form).await;

    mock.assert_async().await;
    assert_eq!(snapshot.text(), "Rest well.");
}
