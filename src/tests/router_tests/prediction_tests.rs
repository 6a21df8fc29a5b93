use crate::errors::ServerError;
use crate::responses::html_error_response;
use crate::router::handle;
use crate::tests::utils::{body_string, get, post_form, test_context};

const REFERENCE_FORM: &str = "building_area=100&land_area=150&bedrooms=3&bathrooms=2&floors=2\
&certificate=SHM&city=Jakarta+Selatan";

#[test]
fn prediction_form_loads_with_default_options() {
    let ctx = test_context();
    let resp = handle(get("/prediksi"), &ctx).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Prediksi Harga Rumah dengan Linear Regression"));
    assert!(body.contains(r#"name="certificate" value="SHM" checked"#));
    assert!(body.contains(r#"name="city" value="Jakarta Selatan" checked"#));
    assert!(!body.contains("prediction-result"));
}

#[test]
fn reference_house_prediction_is_truncated() {
    let ctx = test_context();
    let resp = handle(post_form("/prediksi", REFERENCE_FORM), &ctx).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    // 1_760_300.75 from the fixture model
    assert!(body.contains("Rp 1,760,300"), "{body}");
    assert!(!body.contains("Rp 1,760,301"));
    // The submitted values stay in the form
    assert!(body.contains(r#"value="150""#));
}

#[test]
fn other_options_are_kept_after_submit() {
    let ctx = test_context();
    let form = "building_area=100&land_area=150&bedrooms=3&bathrooms=2&floors=2\
&certificate=HGB&city=Jakarta+Utara";
    let body = body_string(handle(post_form("/prediksi", form), &ctx).unwrap());

    assert!(body.contains(r#"name="certificate" value="HGB" checked"#));
    assert!(body.contains(r#"name="city" value="Jakarta Utara" checked"#));
    assert!(!body.contains(r#"name="city" value="Jakarta Selatan" checked"#));
}

#[test]
fn non_numeric_input_is_reported() {
    let ctx = test_context();
    let form = REFERENCE_FORM.replace("building_area=100", "building_area=abc");

    let err = handle(post_form("/prediksi", &form), &ctx).unwrap_err();
    assert!(matches!(err, ServerError::InvalidInput(_)));

    let resp = html_error_response(err);
    assert_eq!(resp.status(), 400);
    let body = body_string(resp);
    assert!(body.contains("Luas Bangunan"));
    assert!(body.contains("abc"));
}

#[test]
fn missing_field_is_reported() {
    let ctx = test_context();
    let form = "building_area=100&certificate=SHM&city=Jakarta+Selatan";

    let err = handle(post_form("/prediksi", form), &ctx).unwrap_err();
    assert_eq!(err.status(), 400);
}

#[test]
fn unknown_city_is_rejected() {
    let ctx = test_context();
    let form = REFERENCE_FORM.replace("Jakarta+Selatan", "Bekasi");

    let err = handle(post_form("/prediksi", &form), &ctx).unwrap_err();
    assert!(err.to_string().contains("Bekasi"));
}
