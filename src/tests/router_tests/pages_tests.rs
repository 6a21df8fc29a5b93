use crate::config::AppConfig;
use crate::context::AppContext;
use crate::errors::ServerError;
use crate::responses::html_error_response;
use crate::router::handle;
use crate::tests::utils::{body_bytes, body_string, get, test_context};
use std::path::PathBuf;

#[test]
fn about_page_loads() {
    let ctx = test_context();
    let resp = handle(get("/tentang"), &ctx).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("About Me"));
    assert!(body.contains("Contact Me:"));
    // all three tabs in the navigation
    assert!(body.contains(r#"href="/visualisasi""#));
    assert!(body.contains(r#"href="/prediksi""#));
    assert!(body.contains(r#"href="/tentang" class="active""#));
}

#[test]
fn stylesheet_is_served() {
    let ctx = test_context();
    let resp = handle(get("/static/main.css"), &ctx).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "text/css; charset=utf-8"
    );
}

#[test]
fn overview_export_downloads_workbook() {
    let ctx = test_context();
    let resp = handle(get("/ekspor.xlsx"), &ctx).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert!(resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("rumah_jakarta_ringkasan.xlsx"));
    assert!(body_bytes(resp).starts_with(b"PK"));
}

#[test]
fn unknown_route_is_not_found() {
    let ctx = test_context();
    let err = handle(get("/admin"), &ctx).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));

    let resp = html_error_response(err);
    assert_eq!(resp.status(), 404);
}

#[test]
fn shipped_artifacts_load_together() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let cfg = AppConfig {
        data_path: root.join("data/rumah_jakarta_clean.csv"),
        model_path: root.join("data/regression_model.json"),
        ..AppConfig::default()
    };

    let ctx = AppContext::load(&cfg).expect("shipped dataset and model should load");
    assert!(!ctx.dataset.is_empty());
    assert_eq!(ctx.overview.cities.len(), 5);
    assert_eq!(ctx.overview.most_expensive.len(), 5);
}
