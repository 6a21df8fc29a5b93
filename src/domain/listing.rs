// src/domain/listing.rs

use serde::Deserialize;

/// One row of the listings dataset. Column names follow the CSV headers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Listing {
    #[serde(rename = "Kota")]
    pub city: String,
    #[serde(rename = "Kecamatan")]
    pub district: String,

    #[serde(rename = "Luas Tanah")]
    pub land_area: f64,
    #[serde(rename = "Luas Bangunan")]
    pub building_area: f64,

    #[serde(rename = "Kamar Tidur")]
    pub bedrooms: i64,
    #[serde(rename = "Kamar Mandi")]
    pub bathrooms: i64,
    // Not every export carries these two
    #[serde(rename = "Lantai", default)]
    pub floors: Option<i64>,
    #[serde(rename = "Sertifikat", default)]
    pub certificate: Option<String>,

    #[serde(rename = "Harga")]
    pub price: f64,
}

/// Numeric columns that can be averaged per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Measure {
    Price,
    BuildingArea,
}

impl Measure {
    pub fn of(self, listing: &Listing) -> f64 {
        match self {
            Measure::Price => listing.price,
            Measure::BuildingArea => listing.building_area,
        }
    }
}
