//! Contract tests for the REST client against a local mock backend.

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use asset_scan::error::AppError;
use asset_scan::http_client::ApiClient;
use asset_scan::models::ServiceUpdate;
use asset_scan::resolver::Resolver;
use asset_scan::services::{
    AssetsService, LocationsService, ProfileService, ServiceHistoryService,
};

fn asset_body(id: i64, barcode: &str) -> serde_json::Value {
    json!({
        "id": id,
        "barcode": barcode,
        "brand": "Lenovo",
        "model_series": "ThinkCentre M70q",
        "status": "Berfungsi",
    })
}

#[tokio::test]
async fn asset_by_id_decodes_model() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/assets/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(asset_body(42, "JKT-LT-0042")))
        .mount(&server)
        .await;

    let assets = AssetsService::new(ApiClient::with_base_url(server.uri()));
    let asset = assets.asset(42).await.unwrap();
    assert_eq!(asset.id, 42);
    assert_eq!(asset.barcode, "JKT-LT-0042");
}

#[tokio::test]
async fn resolver_falls_back_to_barcode_after_id_miss() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/assets/7"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/assets/barcode/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(asset_body(12, "7")))
        .expect(1)
        .mount(&server)
        .await;

    let resolver = Resolver::new(AssetsService::new(ApiClient::with_base_url(server.uri())));
    let asset = resolver.resolve("7").await.unwrap();
    assert_eq!(asset.id, 12);
}

#[tokio::test]
async fn non_numeric_identifier_never_hits_id_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/assets/ABC123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(asset_body(1, "wrong")))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/assets/barcode/ABC123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(asset_body(9, "ABC123")))
        .expect(1)
        .mount(&server)
        .await;

    let resolver = Resolver::new(AssetsService::new(ApiClient::with_base_url(server.uri())));
    let asset = resolver.resolve("ABC123").await.unwrap();
    assert_eq!(asset.barcode, "ABC123");
}

#[tokio::test]
async fn unresolvable_barcode_reports_not_found_with_identifier() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/assets/barcode/ABC123"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let resolver = Resolver::new(AssetsService::new(ApiClient::with_base_url(server.uri())));
    let err = resolver.resolve("ABC123").await.unwrap_err();
    assert_eq!(err, AppError::NotFound("ABC123".to_string()));
}

#[tokio::test]
async fn server_error_maps_to_transient() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/assets/5"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/assets/barcode/5"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let resolver = Resolver::new(AssetsService::new(ApiClient::with_base_url(server.uri())));
    let err = resolver.resolve("5").await.unwrap_err();
    assert!(matches!(err, AppError::Transient(_)));
}

#[tokio::test]
async fn malformed_body_falls_back_and_settles_with_barcode_outcome() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/assets/3"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/assets/barcode/3"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let resolver = Resolver::new(AssetsService::new(ApiClient::with_base_url(server.uri())));
    // Body decode failure counts as transient on the id attempt, and the
    // fallback then settles the chain with the barcode outcome.
    let err = resolver.resolve("3").await.unwrap_err();
    assert_eq!(err, AppError::NotFound("3".to_string()));
}

#[tokio::test]
async fn service_search_sends_query_param() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services"))
        .and(query_param("search", "LT-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1,
            "ticket_no": "TKT-001",
            "sn_or_barcode": "LT-42",
            "status": "In Progress",
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let services = ServiceHistoryService::new(ApiClient::with_base_url(server.uri()));
    let records = services.list(Some("LT-42")).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].sn_or_barcode, "LT-42");
}

#[tokio::test]
async fn service_edit_puts_update_and_returns_record() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/services/9"))
        .and(body_partial_json(json!({
            "sn_or_barcode": "LT-42",
            "status": "Clear",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 9,
            "ticket_no": "TKT-009",
            "sn_or_barcode": "LT-42",
            "status": "Clear",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let update = ServiceUpdate {
        ticket_no: Some("TKT-009".to_string()),
        service_date: None,
        asset_name: None,
        sn_or_barcode: "LT-42".to_string(),
        production_year: None,
        unit_name: None,
        owner: None,
        issue_description: None,
        vendor: None,
        status: "Clear".to_string(),
    };
    let record = ServiceHistoryService::new(ApiClient::with_base_url(server.uri()))
        .update(9, &update)
        .await
        .unwrap();
    assert_eq!(record.id, 9);
    assert_eq!(record.status, "Clear");
}

#[tokio::test]
async fn school_detail_decodes_model() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/schools/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3,
            "name": "SMAK 1",
            "area_id": 2,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let school = LocationsService::new(ApiClient::with_base_url(server.uri()))
        .school(3)
        .await
        .unwrap();
    assert_eq!(school.name, "SMAK 1");
    assert_eq!(school.area_id, Some(2));
}

#[tokio::test]
async fn rename_returns_refreshed_profile() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3,
            "full_name": "New Name",
            "email": "user@example.com",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let profile = ProfileService::new(ApiClient::with_base_url(server.uri()))
        .rename("New Name")
        .await
        .unwrap();
    assert_eq!(profile.full_name, "New Name");
}
