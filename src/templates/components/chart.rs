// templates/components/chart.rs

//! Horizontal bar charts drawn with plain HTML. Bar widths are relative to
//! the largest value in the chart.

use crate::analytics::aggregates::{
    CategoryCount, CityDistrictMean, GroupMean, HistogramBin,
};
use crate::prediction::format_rupiah;
use maud::{html, Markup};
use std::collections::BTreeSet;

const PALETTE: [&str; 10] = [
    "#4c78a8", "#f58518", "#e45756", "#72b7b2", "#54a24b", "#eeca3b", "#b279a2", "#ff9da6",
    "#9d755d", "#bab0ac",
];

const DEFAULT_COLOR: &str = "#4c78a8";

pub struct Bar {
    pub label: String,
    pub value: f64,
    pub display: String,
    pub color: &'static str,
}

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

pub fn bar_chart(bars: &[Bar]) -> Markup {
    let max = bars.iter().map(|b| b.value).fold(0.0, f64::max);

    html! {
        div class="bar-chart" {
            @for bar in bars {
                div class="bar-row" title=(bar.display) {
                    span class="bar-label" { (bar.label) }
                    div class="bar-track" {
                        div class="bar-fill" style=(fill_style(bar, max)) {}
                    }
                    span class="bar-value" { (bar.display) }
                }
            }
        }
    }
}

fn fill_style(bar: &Bar, max: f64) -> String {
    let pct = if max > 0.0 {
        (bar.value / max * 100.0).max(0.0)
    } else {
        0.0
    };
    format!("width: {pct:.2}%; background: {};", bar.color)
}

pub fn legend(entries: &[(String, &'static str)]) -> Markup {
    html! {
        ul class="legend" {
            @for (label, color) in entries {
                li {
                    span class="swatch" style=(format!("background: {color};")) {}
                    (label)
                }
            }
        }
    }
}

/// Counts per category; `colored` gives every category its own colour.
pub fn count_bars(rows: &[CategoryCount], colored: bool) -> Vec<Bar> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| Bar {
            label: row.label.clone(),
            value: row.count as f64,
            display: row.count.to_string(),
            color: if colored { palette_color(i) } else { DEFAULT_COLOR },
        })
        .collect()
}

pub fn histogram_bars(bins: &[HistogramBin]) -> Vec<Bar> {
    bins.iter()
        .map(|bin| Bar {
            label: format!("{}–{}", bin.lower, bin.upper),
            value: bin.count as f64,
            display: bin.count.to_string(),
            color: DEFAULT_COLOR,
        })
        .collect()
}

pub fn price_bars(rows: &[GroupMean]) -> Vec<Bar> {
    rows.iter()
        .map(|row| Bar {
            label: row.key.clone(),
            value: row.value,
            display: format_rupiah(row.value),
            color: DEFAULT_COLOR,
        })
        .collect()
}

pub fn area_bars(rows: &[GroupMean]) -> Vec<Bar> {
    rows.iter()
        .map(|row| Bar {
            label: row.key.clone(),
            value: row.value,
            display: format!("{:.1} m²", row.value),
            color: DEFAULT_COLOR,
        })
        .collect()
}

/// Colour per city, assigned in city order of the rows shown.
pub fn city_colors(rows: &[CityDistrictMean]) -> Vec<(String, &'static str)> {
    let cities: BTreeSet<&str> = rows.iter().map(|r| r.city.as_str()).collect();
    cities
        .into_iter()
        .enumerate()
        .map(|(i, city)| (city.to_string(), palette_color(i)))
        .collect()
}

/// Mean price per sub-district, highest first, coloured by city.
pub fn city_district_bars(rows: &[CityDistrictMean]) -> Vec<Bar> {
    let colors = city_colors(rows);
    let color_of = |city: &str| {
        colors
            .iter()
            .find(|(c, _)| c == city)
            .map(|(_, color)| *color)
            .unwrap_or(DEFAULT_COLOR)
    };

    let mut sorted: Vec<&CityDistrictMean> = rows.iter().collect();
    sorted.sort_by(|a, b| b.value.total_cmp(&a.value));

    sorted
        .into_iter()
        .map(|row| Bar {
            label: row.district.clone(),
            value: row.value,
            display: format_rupiah(row.value),
            color: color_of(&row.city),
        })
        .collect()
}
