// Rate repository and session behaviour against a mock rate endpoint

use approx::assert_relative_eq;
use interest_cost::{
    DisplayMode, Failure, FetchErrorKind, RateRepository, RateSourceConfig, Session,
};
use std::time::Duration;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

const RATES_PATH: &str = "/sandbox/api/interest-rates/2.0/mortgage-rates";

async fn mock_rates(status: u16, body: serde_json::Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(RATES_PATH))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;
    server
}

fn config_for(server: &MockServer) -> RateSourceConfig {
    RateSourceConfig::new(format!("{}{}", server.uri(), RATES_PATH))
}

fn sample_body() -> serde_json::Value {
    serde_json::json!({
        "mortgage_rates": [
            { "binding_period_in_months": 3, "mortgage_rate": 2.92 },
            { "binding_period_in_months": 12, "mortgage_rate": 3.45 }
        ]
    })
}

#[tokio::test]
async fn test_load_parses_rates_in_source_order() {
    let server = mock_rates(200, sample_body()).await;
    let mut repository = RateRepository::new(config_for(&server)).unwrap();

    let rates = repository.load().await.unwrap();
    let pairs: Vec<(u32, f64)> = rates
        .iter()
        .map(|e| (e.binding_period_months(), e.annual_rate_percent()))
        .collect();
    assert_eq!(pairs, vec![(3, 2.92), (12, 3.45)]);
    assert!(repository.failure().is_none());
}

#[tokio::test]
async fn test_non_success_status_is_rate_fetch_error() {
    let server = mock_rates(503, serde_json::json!({ "error": "maintenance" })).await;
    let mut repository = RateRepository::new(config_for(&server)).unwrap();

    let failure = repository.load().await.unwrap_err();
    match failure {
        Failure::RateFetchError(FetchErrorKind::Status(status)) => {
            assert_eq!(status.as_u16(), 503)
        }
        other => panic!("expected status failure, got {:?}", other),
    }
    assert!(repository.rates().is_none());
}

#[tokio::test]
async fn test_malformed_body_is_rate_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(RATES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let mut repository = RateRepository::new(config_for(&server)).unwrap();
    let failure = repository.load().await.unwrap_err();
    assert!(matches!(failure.kind(), FetchErrorKind::Payload(_)));
}

#[tokio::test]
async fn test_invalid_entries_are_skipped() {
    let server = mock_rates(
        200,
        serde_json::json!({
            "mortgage_rates": [
                { "binding_period_in_months": 3, "mortgage_rate": 2.92 },
                { "binding_period_in_months": "twelve", "mortgage_rate": 3.45 },
                { "binding_period_in_months": 24, "mortgage_rate": -3.30 },
                { "binding_period_in_months": 36, "mortgage_rate": 3.60 }
            ]
        }),
    )
    .await;

    let mut repository = RateRepository::new(config_for(&server)).unwrap();
    let rates = repository.load().await.unwrap();
    assert_eq!(rates.len(), 2);
    assert!(rates.find_binding_period(12).is_none());
    assert!(rates.find_binding_period(36).is_some());
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport_error() {
    let config = RateSourceConfig::new("http://127.0.0.1:9/rates")
        .with_timeout(Duration::from_secs(2));
    let mut repository = RateRepository::new(config).unwrap();

    let failure = repository.load().await.unwrap_err();
    assert!(matches!(failure.kind(), FetchErrorKind::Transport(_)));
}

#[tokio::test]
async fn test_session_scenario_with_loaded_rates() {
    let server = mock_rates(200, sample_body()).await;
    let mut session = Session::new(RateRepository::new(config_for(&server)).unwrap());

    session.start().await.unwrap();
    session.set_amount_text("1 000 000");

    let state = session.state();
    assert_eq!(state.loan_amount(), 1_000_000.0);
    assert_eq!(state.selected_rate_percent(), Some(2.92));
    assert_eq!(interest_cost::monthly_rate_fraction(2.92), 0.0292);
    assert_eq!(state.monthly_cost(), 1_000_000.0 * 0.0292 / 12.0);
    assert_relative_eq!(state.monthly_cost(), 2433.333, epsilon = 1e-3);
    assert!(session.show_result());
    assert_eq!(session.display_mode(), DisplayMode::Calculator);
}

#[tokio::test]
async fn test_session_scenario_with_failed_fetch() {
    let server = mock_rates(500, serde_json::json!({})).await;
    let mut session = Session::new(RateRepository::new(config_for(&server)).unwrap());

    assert!(session.start().await.is_err());
    assert!(session.rates().is_none());
    assert!(matches!(session.failure(), Some(Failure::RateFetchError(_))));
    assert_eq!(session.state().selected_rate_percent(), Some(2.92));

    session.set_amount_text("3 500 000 kr");
    assert_relative_eq!(
        session.state().monthly_cost(),
        3_500_000.0 * 0.0292 / 12.0,
        max_relative = 1e-12
    );
    assert!(session.show_result());

    session.set_amount_text("abc");
    assert_eq!(session.state().loan_amount(), 0.0);
    assert_eq!(session.state().monthly_cost(), 0.0);
    assert!(!session.show_result());
}

#[tokio::test]
async fn test_background_fetch_applied_later() {
    let server = mock_rates(
        200,
        serde_json::json!({
            "mortgage_rates": [
                { "binding_period_in_months": 12, "mortgage_rate": 3.45 },
                { "binding_period_in_months": 3, "mortgage_rate": 4.05 }
            ]
        }),
    )
    .await;
    let mut session = Session::new(RateRepository::new(config_for(&server)).unwrap());

    let fetcher = session.fetcher();
    let handle = tokio::spawn(async move { fetcher.fetch().await });

    // Input stays usable with the placeholder while the fetch is outstanding
    session.set_amount_text("2 000 000");
    assert_eq!(session.state().monthly_cost(), 2_000_000.0 * 0.0292 / 12.0);

    let outcome = handle.await.unwrap();
    session.apply_load(outcome).unwrap();
    assert_eq!(session.state().selected_rate_percent(), Some(4.05));
    assert_eq!(session.state().monthly_cost(), 2_000_000.0 * 0.0405 / 12.0);
}
