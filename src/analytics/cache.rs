use crate::analytics::aggregates::{filter_by_cities, CityDistrictMean};
use crate::errors::ServerError;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, RwLock};

/// A multi-select value: order and duplicates don't matter.
pub type CitySelection = BTreeSet<String>;

pub fn selection_from<I, S>(cities: I) -> CitySelection
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    cities
        .into_iter()
        .map(Into::into)
        .filter(|c: &String| !c.is_empty())
        .collect()
}

/// Memoized results of the city filter, keyed by selection.
#[derive(Debug, Default)]
pub struct FilterCache {
    by_selection: RwLock<HashMap<CitySelection, Arc<Vec<CityDistrictMean>>>>,
}

impl FilterCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(
        &self,
        table: &[CityDistrictMean],
        selection: &CitySelection,
    ) -> Result<Arc<Vec<CityDistrictMean>>, ServerError> {
        {
            let cached = self
                .by_selection
                .read()
                .map_err(|_| ServerError::InternalError)?;
            if let Some(rows) = cached.get(selection) {
                return Ok(Arc::clone(rows));
            }
        }

        let rows = Arc::new(filter_by_cities(table, selection));

        let mut cache = self
            .by_selection
            .write()
            .map_err(|_| ServerError::InternalError)?;
        let entry = cache
            .entry(selection.clone())
            .or_insert_with(|| Arc::clone(&rows));
        tracing::debug!(cities = selection.len(), rows = entry.len(), "filter view cached");
        Ok(Arc::clone(entry))
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.by_selection.read().map(|c| c.len()).unwrap_or(0)
    }
}
