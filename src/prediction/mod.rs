pub mod features;
pub mod format;
pub mod model;

pub use features::{encode, FeatureVector, InputError, RawInputs, FEATURE_COLUMNS};
pub use format::format_rupiah;
pub use model::LinearModel;

/// One completed prediction, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub features: FeatureVector,
    pub price: f64,
    pub formatted: String,
}

/// Encode, predict, format. Input errors come back untouched.
pub fn predict_price(model: &LinearModel, raw: &RawInputs) -> Result<Prediction, InputError> {
    let features = encode(raw)?;
    let price = model.predict(&features);
    tracing::debug!(price, city = features.city.as_str(), "price predicted");

    Ok(Prediction {
        formatted: format_rupiah(price),
        features,
        price,
    })
}
