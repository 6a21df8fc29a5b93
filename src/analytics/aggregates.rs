// src/analytics/aggregates.rs

//! Descriptive statistics over the listings table.
//!
//! Groups are always emitted in key order (like a sorted group-by), so the
//! stable sorts in `top_n` / `bottom_n` break ties by key.

use crate::domain::{Listing, Measure};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupMean {
    pub key: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CityDistrictMean {
    pub city: String,
    pub district: String,
    pub value: f64,
}

/// Half-open `[lower, upper)`, except the last bin which also holds the max.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

pub const DEFAULT_MAX_BINS: usize = 10;

fn count_by<K, F>(listings: &[Listing], key: F) -> BTreeMap<K, usize>
where
    K: Ord,
    F: Fn(&Listing) -> K,
{
    let mut counts = BTreeMap::new();
    for l in listings {
        *counts.entry(key(l)).or_insert(0) += 1;
    }
    counts
}

fn to_rows<K: ToString>(counts: BTreeMap<K, usize>) -> Vec<CategoryCount> {
    counts
        .into_iter()
        .map(|(k, count)| CategoryCount {
            label: k.to_string(),
            count,
        })
        .collect()
}

pub fn count_by_city(listings: &[Listing]) -> Vec<CategoryCount> {
    to_rows(count_by(listings, |l| l.city.clone()))
}

pub fn count_by_bedrooms(listings: &[Listing]) -> Vec<CategoryCount> {
    to_rows(count_by(listings, |l| l.bedrooms))
}

pub fn count_by_bathrooms(listings: &[Listing]) -> Vec<CategoryCount> {
    to_rows(count_by(listings, |l| l.bathrooms))
}

/// Listings per sub-district, most listings first.
pub fn count_by_district(listings: &[Listing]) -> Vec<CategoryCount> {
    let mut rows = to_rows(count_by(listings, |l| l.district.clone()));
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

pub fn mean_by_district(listings: &[Listing], measure: Measure) -> Vec<GroupMean> {
    let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for l in listings {
        let entry = sums.entry(l.district.as_str()).or_insert((0.0, 0));
        entry.0 += measure.of(l);
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(key, (sum, n))| GroupMean {
            key: key.to_string(),
            value: sum / n as f64,
        })
        .collect()
}

pub fn mean_price_by_city_district(listings: &[Listing]) -> Vec<CityDistrictMean> {
    let mut sums: BTreeMap<(&str, &str), (f64, usize)> = BTreeMap::new();
    for l in listings {
        let entry = sums
            .entry((l.city.as_str(), l.district.as_str()))
            .or_insert((0.0, 0));
        entry.0 += l.price;
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|((city, district), (sum, n))| CityDistrictMean {
            city: city.to_string(),
            district: district.to_string(),
            value: sum / n as f64,
        })
        .collect()
}

/// Highest `n` groups, descending.
pub fn top_n(rows: &[GroupMean], n: usize) -> Vec<GroupMean> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| b.value.total_cmp(&a.value));
    sorted.truncate(n);
    sorted
}

/// Lowest `n` groups, ascending.
pub fn bottom_n(rows: &[GroupMean], n: usize) -> Vec<GroupMean> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| a.value.total_cmp(&b.value));
    sorted.truncate(n);
    sorted
}

/// Distinct cities of the grouped table, in table order.
pub fn city_options(table: &[CityDistrictMean]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    table
        .iter()
        .filter(|row| seen.insert(row.city.as_str()))
        .map(|row| row.city.clone())
        .collect()
}

/// Rows whose city is selected, in table order. Nothing selected, nothing shown.
pub fn filter_by_cities(
    table: &[CityDistrictMean],
    selected: &BTreeSet<String>,
) -> Vec<CityDistrictMean> {
    table
        .iter()
        .filter(|row| selected.contains(&row.city))
        .cloned()
        .collect()
}

/// Step from {1, 2, 5} x 10^k, the smallest that keeps the bin count under `max_bins`.
fn nice_step(span: f64, max_bins: usize) -> f64 {
    let raw = span / max_bins as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|step| *step >= raw)
        .unwrap_or(10.0 * magnitude)
}

pub fn histogram(values: &[f64], max_bins: usize) -> Vec<HistogramBin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || max_bins == 0 {
        return Vec::new();
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let span = max - min;
    let step = if span > 0.0 {
        nice_step(span, max_bins)
    } else {
        1.0
    };
    let start = (min / step).floor() * step;
    let bins = (((max - start) / step).ceil() as usize).max(1);

    let mut counts = vec![0usize; bins];
    for v in finite {
        let idx = (((v - start) / step).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: start + step * i as f64,
            upper: start + step * (i + 1) as f64,
            count,
        })
        .collect()
}
