use crate::router::handle;
use crate::tests::utils::{body_string, get, test_context};

#[test]
fn root_redirects_to_visualization_tab() {
    let ctx = test_context();
    let resp = handle(get("/"), &ctx).expect("Handler failed");

    assert_eq!(resp.status(), 302);
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/visualisasi"
    );
}

#[test]
fn visualization_page_renders_every_view() {
    let ctx = test_context();
    let resp = handle(get("/visualisasi"), &ctx).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Banyaknya Rumah yang Dijual di Masing-Masing Kota"));
    assert!(body.contains("Distribusi Luas Tanah"));
    assert!(body.contains("Distribusi Kamar Mandi"));
    assert!(body.contains("Top 5 Kecamatan dengan Harga Rumah Rata-Rata Tertinggi"));
    assert!(body.contains("Top 5 Kecamatan dengan Luas Bangunan Terkecil"));

    // Menteng tops the price ranking
    assert!(body.contains("Rp 30,000"));
    // Ciracas is the cheapest sub-district
    assert!(body.contains("Rp 700"));
}

#[test]
fn ranking_commentary_names_the_sub_districts() {
    let ctx = test_context();
    let body = body_string(handle(get("/visualisasi"), &ctx).unwrap());

    assert!(body.contains("kecamatan Ciracas, Jagakarsa, Kalideres, Pasar Rebo, dan Tanjung Barat"));
    assert!(body.contains("Keberadaan kecamatan Tomang dan Pademangan"));
    assert!(body.contains("semakin murah pula harga rumahnya."));
}

#[test]
fn interactive_view_is_empty_without_selection() {
    let ctx = test_context();
    let body = body_string(handle(get("/visualisasi"), &ctx).unwrap());

    assert!(body.contains(r#"<div id="city-district-chart"></div>"#));
}

#[test]
fn selected_cities_are_preselected_and_charted() {
    let ctx = test_context();
    let body = body_string(handle(get("/visualisasi?kota=Jakarta+Pusat"), &ctx).unwrap());

    assert!(body.contains(r#"value="Jakarta Pusat" selected"#));
    assert!(!body.contains(r#"value="Jakarta Utara" selected"#));

    let chart_start = body.find(r#"id="city-district-chart""#).unwrap();
    let chart = &body[chart_start..];
    assert!(chart.contains("Menteng"));
    assert!(chart.contains("Cempaka Putih"));
    assert!(!chart.contains("Kelapa Gading"));
}

#[test]
fn filter_fragment_matches_selection() {
    let ctx = test_context();
    let resp = handle(
        get("/visualisasi/filter?kota=Jakarta%20Pusat&kota=Jakarta%20Utara"),
        &ctx,
    )
    .expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    // Fragment only, for the htmx swap
    assert!(!body.contains("<html"));
    assert!(body.starts_with(r#"<div id="city-district-chart">"#));

    for district in ["Menteng", "Cempaka Putih", "Kelapa Gading", "Pademangan"] {
        assert!(body.contains(district), "missing {district}");
    }
    assert!(!body.contains("Jagakarsa"));
    assert_eq!(body.matches("bar-row").count(), 4);
}

#[test]
fn filter_fragment_without_selection_has_no_bars() {
    let ctx = test_context();
    let body = body_string(handle(get("/visualisasi/filter"), &ctx).unwrap());

    assert!(!body.contains("bar-row"));
}

#[test]
fn unknown_city_selects_nothing() {
    let ctx = test_context();
    let body = body_string(handle(get("/visualisasi/filter?kota=Bandung"), &ctx).unwrap());

    assert!(!body.contains("bar-row"));
}
