use crate::context::AppContext;
use crate::data::Dataset;
use crate::prediction::LinearModel;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

/// Twelve sub-districts across the five cities, prices in plain units.
pub const FIXTURE_CSV: &str = "\
Kota,Kecamatan,Luas Tanah,Luas Bangunan,Kamar Tidur,Kamar Mandi,Lantai,Sertifikat,Harga
Jakarta Selatan,Kebayoran Baru,300,250,5,4,2,SHM,12000
Jakarta Selatan,Kebayoran Baru,200,180,4,3,2,SHM,10000
Jakarta Selatan,Jagakarsa,90,70,2,1,1,SHM,1200
Jakarta Selatan,Tebet,120,110,3,2,2,HGB,3000
Jakarta Timur,Duren Sawit,72,60,2,1,1,SHM,900
Jakarta Timur,Duren Sawit,90,75,3,2,1,SHM,1100
Jakarta Timur,Ciracas,60,45,2,1,1,HGB,700
Jakarta Timur,Pasar Rebo,60,50,2,1,1,SHM,800
Jakarta Barat,Kalideres,72,55,2,1,1,SHM,750
Jakarta Barat,Kebon Jeruk,150,140,3,3,2,SHM,4000
Jakarta Pusat,Menteng,400,500,6,5,3,SHM,30000
Jakarta Pusat,Cempaka Putih,150,160,4,3,2,HGB,5000
Jakarta Utara,Kelapa Gading,180,200,4,3,2,SHM,6000
Jakarta Utara,Pademangan,120,150,3,2,2,\"Lainnya (PPJB, Girik, Adat, dll)\",4500
";

/// intercept 1000.75; the reference house predicts 1_760_300.75.
pub const FIXTURE_MODEL: &str = r#"{
  "feature_names": [
    "Luas Bangunan", "Luas Tanah", "Kamar Tidur", "Kamar Mandi", "Lantai",
    "HGB", "Lainnya (PPJB, Girik, Adat, dll)", "SHM",
    "Kota_Jakarta Barat", "Kota_Jakarta Pusat", "Kota_Jakarta Selatan",
    "Kota_Jakarta Timur", "Kota_Jakarta Utara"
  ],
  "coefficients": [10000, 5000, 1000, 1000, 1000, 0, -500, 2000, 0, 100, 300, -100, -300],
  "intercept": 1000.75
}"#;

pub fn test_context() -> AppContext {
    let dataset = Dataset::from_reader(FIXTURE_CSV.as_bytes())
        .unwrap_or_else(|e| panic!("fixture dataset failed to parse: {e}"));
    let model = LinearModel::from_json(FIXTURE_MODEL)
        .unwrap_or_else(|e| panic!("fixture model failed to load: {e}"));
    AppContext::new(dataset, model)
}

pub fn get(uri: &str) -> astra::Request {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, form: &str) -> astra::Request {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.as_bytes().to_vec()))
        .unwrap()
}

pub fn post_json(uri: &str, json: &str) -> astra::Request {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(json.as_bytes().to_vec()))
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn body_bytes(resp: Response) -> Vec<u8> {
    let mut body = Vec::new();
    resp.into_body().reader().read_to_end(&mut body).unwrap();
    body
}
