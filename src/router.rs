use crate::analytics::selection_from;
use crate::context::AppContext;
use crate::errors::ServerError;
use crate::prediction::{predict_price, RawInputs};
use crate::responses::{
    html_response, json_error_response, json_response, redirect, stylesheet_response,
    ResultResp,
};
use crate::spreadsheets::export_overview_xlsx;
use crate::templates::pages;
use astra::Request;
use serde::Serialize;
use std::io::Read;

// Form bodies are a handful of short fields.
const MAX_BODY_BYTES: u64 = 16 * 1024;

pub fn handle(mut req: Request, ctx: &AppContext) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    tracing::debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => redirect("/visualisasi"),

        ("GET", "/visualisasi") => {
            let selection = selection_from(query_values(&req, "kota"));
            let rows = ctx.city_district_prices(&selection)?;
            html_response(pages::visualization_page(&ctx.overview, &selection, &rows))
        }
        // htmx swaps this in on every change of the city multi-select
        ("GET", "/visualisasi/filter") => {
            let selection = selection_from(query_values(&req, "kota"));
            let rows = ctx.city_district_prices(&selection)?;
            html_response(pages::city_district_chart(&rows))
        }

        ("GET", "/prediksi") => html_response(pages::prediction_page(&RawInputs::default(), None)),
        ("POST", "/prediksi") => {
            let body = read_body(&mut req)?;
            let raw = RawInputs::from_pairs(url::form_urlencoded::parse(body.as_bytes()));
            let prediction = predict_price(&ctx.model, &raw)?;
            html_response(pages::prediction_page(&raw, Some(&prediction)))
        }
        ("POST", "/api/prediksi") => match api_predict(&mut req, ctx) {
            Ok(resp) => Ok(resp),
            Err(err) => {
                tracing::warn!(error = %err, "prediction API request failed");
                Ok(json_error_response(err))
            }
        },

        ("GET", "/ekspor.xlsx") => export_overview_xlsx(&ctx.overview),
        ("GET", "/tentang") => html_response(pages::about_page()),
        ("GET", "/static/main.css") => stylesheet_response(),

        _ => Err(ServerError::NotFound),
    }
}

#[derive(Serialize)]
struct ApiPrediction {
    features: Vec<(&'static str, f64)>,
    price: f64,
    formatted: String,
}

fn api_predict(req: &mut Request, ctx: &AppContext) -> ResultResp {
    let body = read_body(req)?;
    let raw: RawInputs = serde_json::from_str(&body)
        .map_err(|e| ServerError::BadRequest(format!("invalid JSON: {e}")))?;
    let prediction = predict_price(&ctx.model, &raw)?;

    json_response(
        200,
        &ApiPrediction {
            features: prediction.features.named(),
            price: prediction.price,
            formatted: prediction.formatted,
        },
    )
}

/// Every value of a repeated query key, e.g. `?kota=A&kota=B`.
fn query_values(req: &Request, key: &str) -> Vec<String> {
    req.uri()
        .query()
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .filter(|(k, _)| k == key)
                .map(|(_, v)| v.into_owned())
                .collect()
        })
        .unwrap_or_default()
}

fn read_body(req: &mut Request) -> Result<String, ServerError> {
    let mut body = String::new();
    req.body_mut()
        .reader()
        .take(MAX_BODY_BYTES)
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable body: {e}")))?;
    Ok(body)
}
