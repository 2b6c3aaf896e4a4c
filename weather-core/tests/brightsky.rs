use std::time::Duration;

use berlin_weather_core::{
    BERLIN, FetchError, MalformedResponse, ReqwestTransport, Timeouts, TransportError,
    WeatherFetcher,
};
use chrono::NaiveDate;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, header_exists, method, path, query_param},
};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn fetcher_for(server: &MockServer, timeouts: Timeouts) -> WeatherFetcher<ReqwestTransport> {
    let transport = ReqwestTransport::new(timeouts, "berlin-weather-tests/1.0").unwrap();
    WeatherFetcher::with_endpoint(transport, format!("{}/weather", server.uri()))
}

fn sample_payload() -> serde_json::Value {
    serde_json::json!({
        "weather": [
            {
                "timestamp": "2024-01-01T00:00:00+00:00",
                "temperature": 1.2,
                "precipitation": 0.4,
                "wind_speed": 9.0
            },
            {
                "timestamp": "2024-01-01T01:00:00+00:00",
                "temperature": 3.5,
                "precipitation": 0.0,
                "wind_speed": 4.2,
                "condition": "dry"
            }
        ],
        "sources": [{"id": 1, "station_name": "Berlin-Tempelhof"}]
    })
}

#[tokio::test]
async fn fetches_latest_observation_with_expected_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("lat", "52.52000"))
        .and(query_param("lon", "13.40500"))
        .and(query_param("date", "2024-01-01"))
        .and(header("accept", "application/json"))
        .and(header("user-agent", "berlin-weather-tests/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_payload()))
        .expect(1)
        .mount(&server)
        .await;

    let obs = fetcher_for(&server, Timeouts::default())
        .fetch(&BERLIN, day())
        .await
        .unwrap();

    assert_eq!(obs.time(), "2024-01-01T01:00:00+00:00");
    assert_eq!(obs.temperature_c(), Some(3.5));
    assert_eq!(obs.precipitation_mm(), Some(0.0));
    assert_eq!(obs.wind_speed_ms(), Some(4.2));
}

#[tokio::test]
async fn server_error_is_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .expect(1)
        .mount(&server)
        .await;

    let err = fetcher_for(&server, Timeouts::default())
        .fetch(&BERLIN, day())
        .await
        .unwrap_err();

    match err {
        FetchError::Transport(TransportError::Status { status, body, .. }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "upstream down");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(sample_payload())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let timeouts = Timeouts {
        connect: Duration::from_millis(200),
        total: Duration::from_millis(300),
    };
    let err = fetcher_for(&server, timeouts)
        .fetch(&BERLIN, day())
        .await
        .unwrap_err();

    assert!(
        matches!(err, FetchError::Transport(TransportError::Timeout { .. })),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn redirects_are_followed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("location", "/v2/weather"),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_payload()))
        .expect(1)
        .mount(&server)
        .await;

    let obs = fetcher_for(&server, Timeouts::default())
        .fetch(&BERLIN, day())
        .await
        .unwrap();

    assert_eq!(obs.temperature_c(), Some(3.5));
}

#[tokio::test]
async fn html_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = fetcher_for(&server, Timeouts::default())
        .fetch(&BERLIN, day())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        FetchError::Malformed(MalformedResponse::InvalidJson(_))
    ));
}

#[tokio::test]
async fn empty_weather_list_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header_exists("user-agent"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"weather": []})),
        )
        .mount(&server)
        .await;

    let err = fetcher_for(&server, Timeouts::default())
        .fetch(&BERLIN, day())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        FetchError::Malformed(MalformedResponse::NoRecords)
    ));
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    let transport = ReqwestTransport::new(Timeouts::default(), "berlin-weather-tests/1.0").unwrap();
    // Nothing listens on port 1.
    let fetcher = WeatherFetcher::with_endpoint(transport, "http://127.0.0.1:1/weather");

    let err = fetcher.fetch(&BERLIN, day()).await.unwrap_err();

    assert!(matches!(err, FetchError::Transport(_)), "unexpected error: {err:?}");
}
