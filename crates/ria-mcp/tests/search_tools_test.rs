//! End-to-end tool tests against a simulated upstream API.
//!
//! Calls the tool methods directly (the MCP framing is covered by the
//! protocol test) and asserts on both the JSON payloads returned to the
//! agent and the requests the upstream actually observed.

use rmcp::handler::server::wrapper::Parameters;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ria_client::{CredentialStore, RiaClient};
use ria_mcp::server::RiaMcpServer;
use ria_mcp::tools::{AveragePriceParams, CarInfoParams, SearchCarsParams, SetApiKeyParams};

fn server_for(mock: &MockServer, key: Option<&str>) -> RiaMcpServer {
    let client = RiaClient::with_base_url(mock.uri()).unwrap();
    let credentials = match key {
        Some(k) => CredentialStore::with_key(k),
        None => CredentialStore::new(),
    };
    RiaMcpServer::new(client, credentials)
}

async fn recorded_query(server: &MockServer) -> Vec<(String, String)> {
    let requests = server
        .received_requests()
        .await
        .expect("request recording enabled");
    assert_eq!(requests.len(), 1, "expected exactly one upstream request");
    requests[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

fn lookup<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}

#[tokio::test]
async fn test_search_cars_end_to_end_price_filter() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 2,
            "result": [{"id": 1}, {"id": 2}],
        })))
        .mount(&mock)
        .await;
    let server = server_for(&mock, Some("X"));

    let text = server
        .search_cars(Parameters(SearchCarsParams {
            category_id: Some(1),
            price_ot: Some(10_000),
            price_do: Some(50_000),
            currency: Some(1),
            ..Default::default()
        }))
        .await;

    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed["success"], true);
    assert_eq!(parsed["total_count"], 2);
    assert_eq!(parsed["cars"].as_array().unwrap().len(), 2);
    assert!(parsed["request_url"].as_str().unwrap().contains("api_key=X"));

    let pairs = recorded_query(&mock).await;
    assert_eq!(lookup(&pairs, "api_key"), Some("X"));
    assert_eq!(lookup(&pairs, "category_id"), Some("1"));
    assert_eq!(lookup(&pairs, "price_ot"), Some("10000"));
    assert_eq!(lookup(&pairs, "price_do"), Some("50000"));
    // Default currency is omitted from the request
    assert_eq!(lookup(&pairs, "currency"), None);
}

#[tokio::test]
async fn test_search_cars_end_to_end_indexed_lists() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock)
        .await;
    let server = server_for(&mock, Some("X"));

    server
        .search_cars(Parameters(SearchCarsParams {
            marka_id: Some(vec![79]),
            city_id: Some(vec![5, 4]),
            ..Default::default()
        }))
        .await;

    let pairs = recorded_query(&mock).await;
    assert_eq!(lookup(&pairs, "marka_id[0]"), Some("79"));
    assert_eq!(lookup(&pairs, "city_id[0]"), Some("5"));
    assert_eq!(lookup(&pairs, "city_id[1]"), Some("4"));
}

#[tokio::test]
async fn test_search_cars_without_key_makes_no_request() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(0)
        .mount(&mock)
        .await;
    let server = server_for(&mock, None);

    let text = server
        .search_cars(Parameters(SearchCarsParams::default()))
        .await;
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed["success"], false);
    assert!(parsed["error"].as_str().unwrap().contains("API key"));
    assert!(parsed.get("status_code").is_none());
}

#[tokio::test]
async fn test_search_cars_mismatched_years_fails_before_request() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(0)
        .mount(&mock)
        .await;
    let server = server_for(&mock, Some("X"));

    let text = server
        .search_cars(Parameters(SearchCarsParams {
            s_yers: Some(vec![2010, 2015]),
            po_yers: Some(vec![2020]),
            ..Default::default()
        }))
        .await;
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed["success"], false);
    assert!(parsed["error"].as_str().unwrap().contains("same length"));
}

#[tokio::test]
async fn test_search_cars_upstream_500_reported_with_status() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock)
        .await;
    let server = server_for(&mock, Some("X"));

    let text = server
        .search_cars(Parameters(SearchCarsParams::default()))
        .await;
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed["success"], false);
    assert_eq!(parsed["status_code"], 500);
    assert!(parsed["error"].as_str().unwrap().contains("500"));
}

#[tokio::test]
async fn test_set_api_key_takes_effect_for_next_search() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock)
        .await;
    let server = server_for(&mock, Some("old-key"));

    let confirmation = server
        .set_api_key(Parameters(SetApiKeyParams {
            key: "new-key".to_string(),
        }))
        .await;
    assert!(confirmation.contains("stored"));

    server
        .search_cars(Parameters(SearchCarsParams::default()))
        .await;

    let pairs = recorded_query(&mock).await;
    assert_eq!(lookup(&pairs, "api_key"), Some("new-key"));
}

#[tokio::test]
async fn test_get_car_info_end_to_end() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/info"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"autoData": {"autoId": 777}})),
        )
        .mount(&mock)
        .await;
    let server = server_for(&mock, Some("X"));

    let text = server
        .get_car_info(Parameters(CarInfoParams { auto_id: 777 }))
        .await;
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed["success"], true);
    assert_eq!(parsed["car_info"]["autoData"]["autoId"], 777);
}

#[tokio::test]
async fn test_get_average_price_end_to_end() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/average_price"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"arithmeticMean": 15000})),
        )
        .mount(&mock)
        .await;
    let server = server_for(&mock, Some("X"));

    let text = server
        .get_average_price(Parameters(AveragePriceParams {
            marka_id: 79,
            model_id: 2104,
            yers: 2018,
            gear_id: None,
            race_id: None,
            fuel_id: None,
        }))
        .await;
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed["success"], true);
    assert_eq!(parsed["average_price_info"]["arithmeticMean"], 15000);

    let pairs = recorded_query(&mock).await;
    assert_eq!(lookup(&pairs, "yers"), Some("2018"));
}

#[tokio::test]
async fn test_get_car_info_without_key_fails_cleanly() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(0)
        .mount(&mock)
        .await;
    let server = server_for(&mock, None);

    let text = server
        .get_car_info(Parameters(CarInfoParams { auto_id: 1 }))
        .await;
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed["success"], false);
}
