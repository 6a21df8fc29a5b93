use crate::domain::{Certificate, City};
use crate::prediction::{Prediction, RawInputs};
use crate::templates::{desktop_layout, Tab};
use maud::{html, Markup};

pub fn prediction_page(raw: &RawInputs, prediction: Option<&Prediction>) -> Markup {
    // Radio groups start on their first option, as the form always did.
    let certificate = Certificate::parse(&raw.certificate).unwrap_or(Certificate::ALL[0]);
    let city = City::parse(&raw.city).unwrap_or(City::ALL[0]);

    desktop_layout(
        Tab::Prediction,
        html! {
            h2 { "Prediksi Harga Rumah dengan Linear Regression" }
            p { "Silakan masukkan spesifikasi rumah yang ingin diprediksi harganya di bawah ini." }

            form method="post" action="/prediksi" class="prediction-form" {
                div class="grid-3" {
                    (text_field("building_area", "Luas Bangunan (m2)", &raw.building_area))
                    (text_field("land_area", "Luas Tanah (m2)", &raw.land_area))
                    (text_field("bedrooms", "Jumlah Kamar Tidur", &raw.bedrooms))
                }
                div class="grid-2" {
                    (text_field("bathrooms", "Jumlah Kamar Mandi", &raw.bathrooms))
                    (text_field("floors", "Jumlah Lantai", &raw.floors))
                }
                div class="grid-2" {
                    fieldset {
                        legend { "Tipe Sertifikat" }
                        @for option in Certificate::ALL {
                            label class="radio" {
                                input type="radio" name="certificate" value=(option.as_str()) checked[option == certificate];
                                " " (option.as_str())
                            }
                        }
                    }
                    fieldset {
                        legend { "Kota" }
                        @for option in City::ALL {
                            label class="radio" {
                                input type="radio" name="city" value=(option.as_str()) checked[option == city];
                                " " (option.as_str())
                            }
                        }
                    }
                }
                button type="submit" class="primary" { "Prediksi Harga Rumah" }
            }

            @if let Some(result) = prediction {
                p class="prediction-result" {
                    "Prediksi Harga Rumah: " strong { (result.formatted) }
                }
            }
        },
    )
}

fn text_field(name: &str, label: &str, value: &str) -> Markup {
    html! {
        div class="field" {
            label for=(name) { (label) }
            input type="text" id=(name) name=(name) value=(value) inputmode="numeric";
        }
    }
}
