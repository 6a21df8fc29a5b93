use crate::router::handle;
use crate::tests::utils::{body_string, post_json, test_context};
use serde_json::Value;

const REFERENCE_JSON: &str = r#"{
    "building_area": "100",
    "land_area": "150",
    "bedrooms": "3",
    "bathrooms": "2",
    "floors": "2",
    "certificate": "SHM",
    "city": "Jakarta Selatan"
}"#;

#[test]
fn api_returns_features_and_price() {
    let ctx = test_context();
    let resp = handle(post_json("/api/prediksi", REFERENCE_JSON), &ctx).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/json"
    );

    let json: Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["price"], 1_760_300.75);
    assert_eq!(json["formatted"], "Rp 1,760,300");

    let features = json["features"].as_array().unwrap();
    assert_eq!(features.len(), 13);
    assert_eq!(features[0][0], "Luas Bangunan");
    assert_eq!(features[0][1], 100.0);
    assert_eq!(features[7][0], "SHM");
    assert_eq!(features[7][1], 1.0);
    assert_eq!(features[10][0], "Kota_Jakarta Selatan");
    assert_eq!(features[10][1], 1.0);
}

#[test]
fn api_reports_bad_input_as_json() {
    let ctx = test_context();
    let body = REFERENCE_JSON.replace(r#""bedrooms": "3""#, r#""bedrooms": "three""#);

    let resp = handle(post_json("/api/prediksi", &body), &ctx).expect("Handler failed");
    assert_eq!(resp.status(), 400);

    let json: Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert!(json["error"].as_str().unwrap().contains("three"));
}

#[test]
fn api_rejects_malformed_json() {
    let ctx = test_context();
    let resp = handle(post_json("/api/prediksi", "{not json"), &ctx).expect("Handler failed");

    assert_eq!(resp.status(), 400);
}
