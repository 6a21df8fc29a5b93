// src/domain/options.rs

//! The fixed choice sets offered by the prediction form.
//!
//! `as_str` values are the exact strings the form submits, and they are
//! matched exactly when parsing. Display order follows the radio buttons;
//! one-hot column order follows the model (alphabetical).

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Certificate {
    Shm,
    Hgb,
    Other,
}

impl Certificate {
    /// Radio button order.
    pub const ALL: [Certificate; 3] = [Certificate::Shm, Certificate::Hgb, Certificate::Other];

    /// Indicator column order.
    pub const COLUMNS: [Certificate; 3] =
        [Certificate::Hgb, Certificate::Other, Certificate::Shm];

    pub fn as_str(self) -> &'static str {
        match self {
            Certificate::Shm => "SHM",
            Certificate::Hgb => "HGB",
            Certificate::Other => "Lainnya (PPJB, Girik, Adat, dll)",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Selatan,
    Timur,
    Barat,
    Pusat,
    Utara,
}

impl City {
    /// Radio button order.
    pub const ALL: [City; 5] = [
        City::Selatan,
        City::Timur,
        City::Barat,
        City::Pusat,
        City::Utara,
    ];

    /// Indicator column order.
    pub const COLUMNS: [City; 5] = [
        City::Barat,
        City::Pusat,
        City::Selatan,
        City::Timur,
        City::Utara,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            City::Selatan => "Jakarta Selatan",
            City::Timur => "Jakarta Timur",
            City::Barat => "Jakarta Barat",
            City::Pusat => "Jakarta Pusat",
            City::Utara => "Jakarta Utara",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}
