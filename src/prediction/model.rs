use crate::errors::ServerError;
use crate::prediction::features::{FeatureVector, FEATURE_COLUMNS};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A pre-fit ordinary least squares model: `intercept + coefficients . x`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinearModel {
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearModel {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ServerError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            ServerError::ModelError(format!("Failed to read {}: {e}", path.display()))
        })?;

        let model = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            features = model.feature_names.len(),
            intercept = model.intercept,
            "regression model loaded"
        );
        Ok(model)
    }

    pub fn from_json(json: &str) -> Result<Self, ServerError> {
        let model: LinearModel = serde_json::from_str(json)
            .map_err(|e| ServerError::ModelError(format!("Invalid model artifact: {e}")))?;
        model.check_schema()?;
        Ok(model)
    }

    /// The artifact must name exactly the encoder's columns, in the same order.
    fn check_schema(&self) -> Result<(), ServerError> {
        if self.coefficients.len() != self.feature_names.len() {
            return Err(ServerError::ModelError(format!(
                "{} coefficients for {} features",
                self.coefficients.len(),
                self.feature_names.len()
            )));
        }

        if self.feature_names.len() != FEATURE_COLUMNS.len() {
            return Err(ServerError::ModelError(format!(
                "model expects {} features, encoder produces {}",
                self.feature_names.len(),
                FEATURE_COLUMNS.len()
            )));
        }

        for (i, (got, want)) in self.feature_names.iter().zip(FEATURE_COLUMNS).enumerate() {
            if got != want {
                return Err(ServerError::ModelError(format!(
                    "feature {i} is '{got}', encoder produces '{want}'"
                )));
            }
        }

        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ServerError::ModelError("non-finite parameter".into()));
        }

        Ok(())
    }

    pub fn predict(&self, features: &FeatureVector) -> f64 {
        self.coefficients
            .iter()
            .zip(features.values())
            .fold(self.intercept, |acc, (c, x)| acc + c * x)
    }
}
