// src/prediction/features.rs

use crate::domain::{Certificate, City};
use serde::Deserialize;
use std::error::Error;
use std::fmt;

/// Column layout the regression model was fit on. Order matters.
pub const FEATURE_COLUMNS: [&str; 13] = [
    "Luas Bangunan",
    "Luas Tanah",
    "Kamar Tidur",
    "Kamar Mandi",
    "Lantai",
    "HGB",
    "Lainnya (PPJB, Girik, Adat, dll)",
    "SHM",
    "Kota_Jakarta Barat",
    "Kota_Jakarta Pusat",
    "Kota_Jakarta Selatan",
    "Kota_Jakarta Timur",
    "Kota_Jakarta Utara",
];

/// The prediction form exactly as submitted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawInputs {
    #[serde(default)]
    pub building_area: String,
    #[serde(default)]
    pub land_area: String,
    #[serde(default)]
    pub bedrooms: String,
    #[serde(default)]
    pub bathrooms: String,
    #[serde(default)]
    pub floors: String,
    #[serde(default)]
    pub certificate: String,
    #[serde(default)]
    pub city: String,
}

impl RawInputs {
    /// Collect from decoded `key=value` pairs; later duplicates win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut raw = RawInputs::default();
        for (k, v) in pairs {
            let slot = match k.as_ref() {
                "building_area" => &mut raw.building_area,
                "land_area" => &mut raw.land_area,
                "bedrooms" => &mut raw.bedrooms,
                "bathrooms" => &mut raw.bathrooms,
                "floors" => &mut raw.floors,
                "certificate" => &mut raw.certificate,
                "city" => &mut raw.city,
                _ => continue,
            };
            *slot = v.into();
        }
        raw
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    NotAnInteger { field: &'static str, value: String },
    UnknownCertificate(String),
    UnknownCity(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NotAnInteger { field, value } => {
                write!(f, "{field}: '{value}' is not an integer")
            }
            InputError::UnknownCertificate(v) => write!(f, "unknown certificate type '{v}'"),
            InputError::UnknownCity(v) => write!(f, "unknown city '{v}'"),
        }
    }
}

impl Error for InputError {}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub building_area: i128,
    pub land_area: i128,
    pub bedrooms: i128,
    pub bathrooms: i128,
    pub floors: i128,
    pub certificate: Certificate,
    pub city: City,
}

impl FeatureVector {
    /// Values in `FEATURE_COLUMNS` order, indicators as 0/1.
    pub fn values(&self) -> [f64; 13] {
        let cert = |c: Certificate| f64::from(u8::from(self.certificate == c));
        let city = |c: City| f64::from(u8::from(self.city == c));

        [
            self.building_area as f64,
            self.land_area as f64,
            self.bedrooms as f64,
            self.bathrooms as f64,
            self.floors as f64,
            cert(Certificate::COLUMNS[0]),
            cert(Certificate::COLUMNS[1]),
            cert(Certificate::COLUMNS[2]),
            city(City::COLUMNS[0]),
            city(City::COLUMNS[1]),
            city(City::COLUMNS[2]),
            city(City::COLUMNS[3]),
            city(City::COLUMNS[4]),
        ]
    }

    pub fn named(&self) -> Vec<(&'static str, f64)> {
        FEATURE_COLUMNS.into_iter().zip(self.values()).collect()
    }
}

/// Decimal integer with an optional sign. Single underscores may separate
/// digit groups (`1_000`), as in integer literals.
fn parse_int(field: &'static str, value: &str) -> Result<i128, InputError> {
    let not_an_integer = || InputError::NotAnInteger {
        field,
        value: value.to_string(),
    };

    let trimmed = value.trim();
    let unsigned = trimmed
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(trimmed);
    if unsigned.contains('_') && unsigned.split('_').any(str::is_empty) {
        return Err(not_an_integer());
    }

    trimmed.replace('_', "").parse().map_err(|_| not_an_integer())
}

/// Turn the raw form into the model's feature vector.
///
/// Numbers are parsed as integers with no range checks, so negative areas
/// or zero bedrooms go through untouched. Both categorical fields are full
/// one-hot encodings with no dropped level.
pub fn encode(raw: &RawInputs) -> Result<FeatureVector, InputError> {
    let building_area = parse_int("Luas Bangunan", &raw.building_area)?;
    let land_area = parse_int("Luas Tanah", &raw.land_area)?;
    let bedrooms = parse_int("Kamar Tidur", &raw.bedrooms)?;
    let bathrooms = parse_int("Kamar Mandi", &raw.bathrooms)?;
    let floors = parse_int("Lantai", &raw.floors)?;

    let certificate = Certificate::parse(&raw.certificate)
        .ok_or_else(|| InputError::UnknownCertificate(raw.certificate.clone()))?;
    let city =
        City::parse(&raw.city).ok_or_else(|| InputError::UnknownCity(raw.city.clone()))?;

    Ok(FeatureVector {
        building_area,
        land_area,
        bedrooms,
        bathrooms,
        floors,
        certificate,
        city,
    })
}
