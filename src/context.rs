use crate::analytics::{CitySelection, FilterCache, Overview};
use crate::analytics::aggregates::CityDistrictMean;
use crate::config::AppConfig;
use crate::data::Dataset;
use crate::errors::ServerError;
use crate::prediction::LinearModel;
use std::sync::Arc;

/// Everything a request handler may read. Built once in `main`, then shared
/// by reference across astra's workers.
#[derive(Debug)]
pub struct AppContext {
    pub dataset: Dataset,
    pub model: LinearModel,
    pub overview: Overview,
    filter_cache: FilterCache,
}

impl AppContext {
    pub fn new(dataset: Dataset, model: LinearModel) -> Self {
        let overview = Overview::compute(&dataset);
        Self {
            dataset,
            model,
            overview,
            filter_cache: FilterCache::new(),
        }
    }

    /// Both loads are startup-fatal; callers exit on error.
    pub fn load(cfg: &AppConfig) -> Result<Self, ServerError> {
        let dataset = Dataset::load_csv(&cfg.data_path)?;
        let model = LinearModel::load(&cfg.model_path)?;
        Ok(Self::new(dataset, model))
    }

    /// Drop cities the dataset doesn't have. The cache is keyed by the
    /// result, so it holds at most one entry per subset of known cities.
    pub fn known_cities(&self, selection: &CitySelection) -> CitySelection {
        selection
            .iter()
            .filter(|city| self.overview.cities.contains(*city))
            .cloned()
            .collect()
    }

    pub fn city_district_prices(
        &self,
        selection: &CitySelection,
    ) -> Result<Arc<Vec<CityDistrictMean>>, ServerError> {
        let known = self.known_cities(selection);
        self.filter_cache
            .get_or_compute(&self.overview.city_district_prices, &known)
    }

    #[cfg(test)]
    pub(crate) fn cached_selections(&self) -> usize {
        self.filter_cache.len()
    }
}
