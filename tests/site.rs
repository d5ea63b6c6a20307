//! End-to-end checks: the exported site and the live router agree.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use masonry_site::config::Settings;
use masonry_site::content::ServiceCatalog;
use masonry_site::export::export_site;
use masonry_site::page;
use masonry_site::server::{create_router, AppState};

fn settings_in(dir: &std::path::Path) -> Settings {
    Settings {
        media_dir: dir.join("public"),
        base_url: "https://legacy-masonry.example".to_string(),
        ..Default::default()
    }
}

async fn fetch(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8_lossy(&body).to_string())
}

#[tokio::test]
async fn every_static_param_is_served_and_exported() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings_in(dir.path());
    let catalog = ServiceCatalog::builtin();
    let out = dir.path().join("dist");

    export_site(&settings, &catalog, &out).unwrap();
    let app = create_router(AppState::with_catalog(settings, catalog.clone()));

    for key in page::static_params(&catalog) {
        let (status, html) = fetch(app.clone(), &format!("/services/{}", key)).await;
        assert_eq!(status, StatusCode::OK, "GET /services/{}", key);

        let exported =
            std::fs::read_to_string(out.join("services").join(&key).join("index.html")).unwrap();
        let title = &page::metadata(&catalog, &key).title;
        let title = title.replace('&', "&amp;");
        assert!(html.contains(&title));
        assert!(exported.contains(&title));
    }
}

#[tokio::test]
async fn only_historic_page_has_comparison() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = ServiceCatalog::builtin();
    let app = create_router(AppState::with_catalog(settings_in(dir.path()), catalog.clone()));

    for key in catalog.keys() {
        let (_, html) = fetch(app.clone(), &format!("/services/{}", key)).await;
        assert_eq!(
            html.contains("data-comparison "),
            key == "historic",
            "comparison markup on {}",
            key
        );
    }
}

#[tokio::test]
async fn unknown_service_gets_not_found_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = ServiceCatalog::builtin();
    let app = create_router(AppState::with_catalog(settings_in(dir.path()), catalog.clone()));

    let (status, html) = fetch(app, "/services/skylights").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(page::metadata(&catalog, "skylights").title, "Service Not Found");
    assert!(html.contains("<title>Service Not Found</title>"));
}
