use super::helpers::{
    TestCityRepository, assert_status, get, paris_and_oslo, read_text, send, spawn_app,
};
use axum::http::{StatusCode, header};
use city_directory::domain::{city::entity::City, shared::errors::DomainError};

#[tokio::test]
async fn show_cities_renders_every_stored_city() {
    let app = spawn_app(TestCityRepository::with_cities(paris_and_oslo()));

    let res = send(&app, get("/showCities")).await;
    assert_status(res.status(), StatusCode::OK);
    let content_type = res
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"), "got {}", content_type);

    let html = read_text(res).await;
    assert!(html.contains("Paris"));
    assert!(html.contains("Oslo"));
}

#[tokio::test]
async fn show_city_renders_the_matching_record() {
    let app = spawn_app(TestCityRepository::with_cities(paris_and_oslo()));

    let res = send(&app, get("/showCity/Oslo")).await;
    assert_status(res.status(), StatusCode::OK);

    let html = read_text(res).await;
    assert!(html.contains("<h1>Oslo</h1>"));
    assert!(html.contains("709000"));
    assert!(!html.contains("Paris"));
}

#[tokio::test]
async fn show_city_for_unknown_name_renders_an_empty_detail_page() {
    let app = spawn_app(TestCityRepository::with_cities(paris_and_oslo()));

    let res = send(&app, get("/showCity/Atlantis")).await;
    assert_status(res.status(), StatusCode::NOT_FOUND);

    let html = read_text(res).await;
    assert!(html.contains("No city named Atlantis"));
    assert!(!html.contains("Population"));
}

#[tokio::test]
async fn show_city_decodes_the_path_segment() {
    let app = spawn_app(TestCityRepository::with_cities(vec![
        City::new(7, "New York", 8_550_000),
    ]));

    let res = send(&app, get("/showCity/New%20York")).await;
    assert_status(res.status(), StatusCode::OK);
    assert!(read_text(res).await.contains("8550000"));
}

#[tokio::test]
async fn store_outage_renders_an_html_error_page() {
    let app = spawn_app(TestCityRepository::failing(DomainError::Unavailable(
        "pool timed out".into(),
    )));

    let res = send(&app, get("/showCities")).await;
    assert_status(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    let content_type = res
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"), "got {}", content_type);

    let html = read_text(res).await;
    assert!(html.contains("Service temporarily unavailable"));
    assert!(!html.contains("pool timed out"));
}

#[tokio::test]
async fn list_links_reach_the_detail_page_for_awkward_names() {
    let cities = vec![
        City::new(1, "Biel/Bienne", 55_000),
        City::new(2, "Who?", 10),
        City::new(3, "Number #9", 9),
        City::new(4, "100%", 100),
    ];
    let app = spawn_app(TestCityRepository::with_cities(cities.clone()));

    let html = read_text(send(&app, get("/showCities")).await).await;
    let hrefs: Vec<&str> = html
        .split("href=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .filter(|href| href.starts_with("/showCity/"))
        .collect();
    assert_eq!(hrefs.len(), cities.len(), "links: {:?}", hrefs);

    for (href, city) in hrefs.iter().zip(&cities) {
        let res = send(&app, get(href)).await;
        assert_status(res.status(), StatusCode::OK);
        let page = read_text(res).await;
        assert!(
            page.contains(&city.population.to_string()),
            "{} did not render {}",
            href,
            city.name
        );
    }
}

#[tokio::test]
async fn responses_carry_security_and_request_id_headers() {
    let app = spawn_app(TestCityRepository::with_cities(paris_and_oslo()));

    let res = send(&app, get("/showCities")).await;
    let headers = res.headers();

    assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY");
    assert!(headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn inbound_request_id_is_echoed() {
    let app = spawn_app(TestCityRepository::with_cities(paris_and_oslo()));

    let req = axum::http::Request::builder()
        .method("GET")
        .uri("/showCities")
        .header("x-request-id", "trace-abc-123")
        .body(axum::body::Body::empty())
        .expect("failed to build request");
    let res = send(&app, req).await;

    assert_eq!(res.headers()["x-request-id"], "trace-abc-123");
}

#[tokio::test]
async fn oversized_inbound_request_id_is_replaced() {
    let app = spawn_app(TestCityRepository::with_cities(paris_and_oslo()));
    let oversized = "x".repeat(4096);

    let req = axum::http::Request::builder()
        .method("GET")
        .uri("/showCities")
        .header("x-request-id", oversized.as_str())
        .body(axum::body::Body::empty())
        .expect("failed to build request");
    let res = send(&app, req).await;

    let echoed = res.headers()["x-request-id"].to_str().unwrap_or_default();
    assert_ne!(echoed, oversized);
    assert!(uuid::Uuid::parse_str(echoed).is_ok(), "got {}", echoed);
}
