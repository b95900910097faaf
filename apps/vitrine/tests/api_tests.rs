//! Integration tests for the Vitrine HTTP API.
//!
//! Uses axum-test to test the API handlers without starting a real server.

// Allow unwrap and panic in tests - these are standard for test code
// Allow holding MutexGuard across await in auth tests - tests are serialized
// intentionally to avoid env var conflicts
#![allow(clippy::unwrap_used, clippy::panic, clippy::await_holding_lock)]

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use std::sync::Mutex;
use vitrine::api::{
    AppState, FavoriteRequest, FavoritesResponse, HallsResponse, HealthResponse, LanguageRequest,
    LanguageResponse, RecordResponse, RecordsResponse, SearchRequest, SearchResponse,
    StatusResponse, ToggleResponse, create_router,
};
use vitrine_core::{
    Catalog, CatalogConfig, DesignationTier, Hall, Language, LocalizedText, Record, RecordId,
    Session,
};

/// Mutex to serialize tests since the router reads env vars at build time.
static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Guard wrapper that holds the mutex and ensures cleanup on drop.
struct TestGuard {
    _guard: std::sync::MutexGuard<'static, ()>,
}

impl Drop for TestGuard {
    fn drop(&mut self) {
        // SAFETY: Tests run sequentially under ENV_TEST_MUTEX, so no concurrent env access.
        unsafe { std::env::remove_var("VITRINE_API_KEY") };
    }
}

fn text(ko: &str, en: &str) -> LocalizedText {
    [
        (Language::Ko, ko.to_string()),
        (Language::En, en.to_string()),
        (Language::Zh, format!("{en} (zh)")),
        (Language::Ja, format!("{en} (ja)")),
        (Language::Th, format!("{en} (th)")),
    ]
    .into_iter()
    .collect()
}

fn record(
    id: u32,
    name: LocalizedText,
    category: &str,
    hall: Hall,
    cultural_property: Option<&str>,
) -> Record {
    Record {
        id: RecordId(id),
        name,
        period: text("고려", "Goryeo"),
        category: category.to_string(),
        description: text("설명", "Description"),
        detailed_info: text("상세", "Detail"),
        hall,
        designation: DesignationTier::from_field(cultural_property),
        cultural_property: cultural_property.map(String::from),
        featured: id == 1,
        exhibition_room: None,
        artifact_number: None,
        material: None,
        dimensions: None,
        location: None,
        image: None,
    }
}

fn sample_catalog() -> Catalog {
    let records = vec![
        record(
            1,
            text("청자 상감운학문 매병", "Celadon Maebyeong"),
            "ceramics",
            Hall::Art,
            Some("국보 제68호"),
        ),
        record(
            2,
            text("금동미륵보살반가사유상", "Gilt-bronze Maitreya"),
            "sculpture",
            Hall::Archaeology,
            Some("보물 제331호"),
        ),
        record(
            3,
            text("백자 달항아리", "White Porcelain Moon Jar"),
            "ceramics",
            Hall::Art,
            None,
        ),
    ];
    Catalog::from_records(records, CatalogConfig::minimal()).expect("valid catalog")
}

/// Create a test server with a fresh in-memory session.
/// Returns a guard that must be kept alive during the test.
fn create_test_server() -> (TestServer, TestGuard) {
    let guard = ENV_TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    // SAFETY: Tests run sequentially under ENV_TEST_MUTEX, so no concurrent env access.
    unsafe { std::env::remove_var("VITRINE_API_KEY") };
    let session = Session::new(sample_catalog());
    let state = AppState::new(session);
    let router = create_router(state);
    (
        TestServer::new(router).unwrap(),
        TestGuard { _guard: guard },
    )
}

// =============================================================================
// HEALTH ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (server, _guard) = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let health: HealthResponse = response.json();
    assert_eq!(health.status, "ok");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// STATUS ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_status_endpoint() {
    let (server, _guard) = create_test_server();

    let response = server.get("/status").await;

    response.assert_status_ok();
    let status: StatusResponse = response.json();
    assert_eq!(status.record_count, 3);
    assert_eq!(status.featured_count, 1);
    assert_eq!(status.favorites_count, 0);
    assert_eq!(status.language, "ko");
    assert_eq!(status.national_treasures, 1);
    assert_eq!(status.treasures, 1);
}

// =============================================================================
// HALLS ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_halls_reports_all_five_with_zeros() {
    let (server, _guard) = create_test_server();

    let response = server.get("/halls").await;

    response.assert_status_ok();
    let halls: HallsResponse = response.json();
    assert_eq!(halls.halls.len(), 5);

    let art = halls.halls.iter().find(|h| h.hall == "art").unwrap();
    assert_eq!(art.total, 2);
    assert_eq!(art.national_treasures, 1);

    let donation = halls.halls.iter().find(|h| h.hall == "donation").unwrap();
    assert_eq!(donation.total, 0);
}

// =============================================================================
// RECORD LISTING TESTS
// =============================================================================

#[tokio::test]
async fn test_records_pagination() {
    let (server, _guard) = create_test_server();

    let response = server.get("/records?page=1&limit=2").await;

    response.assert_status_ok();
    let body: RecordsResponse = response.json();
    assert!(body.success);
    assert_eq!(body.records.len(), 2);
    assert_eq!(body.total, 3);
    assert!(body.has_more);
    // Localized to the default language.
    assert_eq!(body.records[0].name, "청자 상감운학문 매병");
}

#[tokio::test]
async fn test_records_hall_filter() {
    let (server, _guard) = create_test_server();

    let response = server.get("/records?hall=archaeology").await;

    response.assert_status_ok();
    let body: RecordsResponse = response.json();
    assert_eq!(body.total, 1);
    assert_eq!(body.records[0].id, 2);
}

#[tokio::test]
async fn test_records_invalid_hall_rejected() {
    let (server, _guard) = create_test_server();

    let response = server.get("/records?hall=garden").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: RecordsResponse = response.json();
    assert!(!body.success);
}

#[tokio::test]
async fn test_record_by_id() {
    let (server, _guard) = create_test_server();

    let response = server.get("/records/3").await;

    response.assert_status_ok();
    let body: RecordResponse = response.json();
    let record = body.record.unwrap();
    assert_eq!(record.id, 3);
    assert_eq!(record.name, "백자 달항아리");
    assert_eq!(record.designation, "none");
}

#[tokio::test]
async fn test_record_invalid_id_rejected() {
    let (server, _guard) = create_test_server();

    for bad in ["abc", "0", "101", "-1"] {
        let response = server.get(&format!("/records/{bad}")).await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_record_not_found() {
    let (server, _guard) = create_test_server();

    let response = server.get("/records/99").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

// =============================================================================
// SEARCH ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_search_default_language() {
    let (server, _guard) = create_test_server();

    let response = server
        .post("/search")
        .json(&SearchRequest {
            term: "청자".to_string(),
            category: None,
            language: None,
        })
        .await;

    response.assert_status_ok();
    let body: SearchResponse = response.json();
    assert_eq!(body.count, 1);
    assert_eq!(body.records[0].id, 1);
}

#[tokio::test]
async fn test_search_language_override() {
    let (server, _guard) = create_test_server();

    let response = server
        .post("/search")
        .json(&SearchRequest {
            term: "MOON".to_string(),
            category: None,
            language: Some("en".to_string()),
        })
        .await;

    response.assert_status_ok();
    let body: SearchResponse = response.json();
    assert_eq!(body.count, 1);
    assert_eq!(body.records[0].id, 3);
}

#[tokio::test]
async fn test_search_empty_term_yields_empty() {
    let (server, _guard) = create_test_server();

    let response = server
        .post("/search")
        .json(&SearchRequest {
            term: String::new(),
            category: Some("ceramics".to_string()),
            language: None,
        })
        .await;

    response.assert_status_ok();
    let body: SearchResponse = response.json();
    assert!(body.success);
    assert_eq!(body.count, 0);
}

#[tokio::test]
async fn test_search_sanitizes_term() {
    let (server, _guard) = create_test_server();

    let response = server
        .post("/search")
        .json(&SearchRequest {
            term: "<script>alert(1)</script>청자".to_string(),
            category: None,
            language: None,
        })
        .await;

    response.assert_status_ok();
    let body: SearchResponse = response.json();
    assert_eq!(body.count, 1);
    assert_eq!(body.records[0].id, 1);
}

#[tokio::test]
async fn test_search_invalid_language_rejected() {
    let (server, _guard) = create_test_server();

    // "fr" is a known code outside the minimal supported set.
    for bad in ["xx", "fr"] {
        let response = server
            .post("/search")
            .json(&SearchRequest {
                term: "moon".to_string(),
                category: None,
                language: Some(bad.to_string()),
            })
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_search_category_facet() {
    let (server, _guard) = create_test_server();

    let response = server
        .post("/search")
        .json(&SearchRequest {
            term: "goryeo".to_string(),
            category: Some("sculpture".to_string()),
            language: Some("en".to_string()),
        })
        .await;

    response.assert_status_ok();
    let body: SearchResponse = response.json();
    // Every record's period matches "goryeo"; the facet narrows to one.
    assert_eq!(body.count, 1);
    assert_eq!(body.records[0].id, 2);
}

// =============================================================================
// FAVORITES ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_favorites_lifecycle() {
    let (server, _guard) = create_test_server();

    // Initially empty.
    let response = server.get("/favorites").await;
    response.assert_status_ok();
    let body: FavoritesResponse = response.json();
    assert_eq!(body.count, 0);

    // Add two.
    server
        .post("/favorites")
        .json(&FavoriteRequest { id: 3 })
        .await
        .assert_status_ok();
    server
        .post("/favorites")
        .json(&FavoriteRequest { id: 1 })
        .await
        .assert_status_ok();

    let body: FavoritesResponse = server.get("/favorites").await.json();
    assert_eq!(body.favorites, vec![1, 3]);

    // Adding again is idempotent.
    server
        .post("/favorites")
        .json(&FavoriteRequest { id: 3 })
        .await
        .assert_status_ok();
    let body: FavoritesResponse = server.get("/favorites").await.json();
    assert_eq!(body.count, 2);

    // Remove one.
    server.delete("/favorites/1").await.assert_status_ok();
    let body: FavoritesResponse = server.get("/favorites").await.json();
    assert_eq!(body.favorites, vec![3]);

    // Clear all.
    server.delete("/favorites").await.assert_status_ok();
    let body: FavoritesResponse = server.get("/favorites").await.json();
    assert_eq!(body.count, 0);
}

#[tokio::test]
async fn test_favorites_toggle() {
    let (server, _guard) = create_test_server();

    let body: ToggleResponse = server
        .post("/favorites/toggle")
        .json(&FavoriteRequest { id: 5 })
        .await
        .json();
    assert!(body.success);
    assert!(body.favorite);

    let body: ToggleResponse = server
        .post("/favorites/toggle")
        .json(&FavoriteRequest { id: 5 })
        .await
        .json();
    assert!(!body.favorite);

    let body: FavoritesResponse = server.get("/favorites").await.json();
    assert_eq!(body.count, 0);
}

#[tokio::test]
async fn test_favorites_invalid_id_rejected() {
    let (server, _guard) = create_test_server();

    let response = server
        .post("/favorites")
        .json(&FavoriteRequest { id: 0 })
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .post("/favorites/toggle")
        .json(&FavoriteRequest { id: 101 })
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server.delete("/favorites/abc").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_record_projection_reflects_favorite() {
    let (server, _guard) = create_test_server();

    server
        .post("/favorites")
        .json(&FavoriteRequest { id: 2 })
        .await
        .assert_status_ok();

    let body: RecordResponse = server.get("/records/2").await.json();
    assert!(body.record.unwrap().favorite);
}

// =============================================================================
// LANGUAGE ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_language_get() {
    let (server, _guard) = create_test_server();

    let response = server.get("/language").await;

    response.assert_status_ok();
    let body: LanguageResponse = response.json();
    assert_eq!(body.language, "ko");
    assert_eq!(body.supported.len(), 5);
    assert!(body.supported.contains(&"th".to_string()));
}

#[tokio::test]
async fn test_language_put_switches_localization() {
    let (server, _guard) = create_test_server();

    let response = server
        .put("/language")
        .json(&LanguageRequest {
            language: "en".to_string(),
        })
        .await;
    response.assert_status_ok();

    // Subsequent projections use the new language.
    let body: RecordResponse = server.get("/records/3").await.json();
    assert_eq!(body.record.unwrap().name, "White Porcelain Moon Jar");
}

#[tokio::test]
async fn test_language_put_rejects_invalid() {
    let (server, _guard) = create_test_server();

    for bad in ["xx", "fr"] {
        let response = server
            .put("/language")
            .json(&LanguageRequest {
                language: bad.to_string(),
            })
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    // Preference unchanged after rejections.
    let body: LanguageResponse = server.get("/language").await.json();
    assert_eq!(body.language, "ko");
}

// =============================================================================
// AUTH MIDDLEWARE TESTS
// =============================================================================

#[tokio::test]
async fn test_auth_disabled_allows_all() {
    let (server, _guard) = create_test_server();

    server.get("/status").await.assert_status_ok();
}

#[tokio::test]
async fn test_auth_enabled_guards_endpoints() {
    let guard = ENV_TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    // SAFETY: Tests run sequentially under ENV_TEST_MUTEX, so no concurrent env access.
    unsafe { std::env::set_var("VITRINE_API_KEY", "test-key") };
    let _guard = TestGuard { _guard: guard };

    let session = Session::new(sample_catalog());
    let router = create_router(AppState::new(session));
    let server = TestServer::new(router).unwrap();

    // Health is always open for load balancer checks.
    server.get("/health").await.assert_status_ok();

    // Everything else requires the key.
    server
        .get("/status")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    server
        .get("/status")
        .add_header(
            HeaderName::from_static("authorization"),
            HeaderValue::from_static("Bearer test-key"),
        )
        .await
        .assert_status_ok();

    server
        .get("/status")
        .add_header(
            HeaderName::from_static("authorization"),
            HeaderValue::from_static("Bearer wrong-key"),
        )
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}
