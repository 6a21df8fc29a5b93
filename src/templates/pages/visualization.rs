use crate::analytics::aggregates::CityDistrictMean;
use crate::analytics::{CitySelection, Overview};
use crate::templates::components::chart::{
    area_bars, city_colors, city_district_bars, count_bars, histogram_bars, price_bars,
};
use crate::templates::components::{bar_chart, card, commentary, legend};
use crate::templates::{desktop_layout, Tab};
use maud::{html, Markup};

const CITY_NOTE: &str = "Jakarta Selatan merupakan kota dengan jumlah rumah dijual terbanyak, \
sedangkan Jakarta Utara adalah yang paling sedikit. Hal ini mungkin disebabkan karena tingginya \
permintaan rumah di Jakarta Selatan yang disebabkan oleh terpusatnya pertumbuhan ekonomi di \
wilayah tersebut yang dapat diindikasikan oleh banyaknya pengembang properti di daerah ini.";

const AREA_NOTE: &str = "Rumah berukuran kecil adalah rumah yang paling banyak dijual. Hal ini \
juga menandakan segmentasi pasar di DKI Jakarta yang masih didominasi kalangan menengah, hingga \
menengah ke bawah.";

const ROOMS_NOTE: &str = "Rumah dengan 2 Kamar Mandi dan 3 Kamar Tidur merupakan rumah yang \
paling banyak dijual. Hal ini dapat menandakan bahwa minat pasar yang banyak tertuju pada rumah \
dengan 3 Kamar Tidur dan 2 Kamar Mandi.";

const DISTRICT_NOTE: &str = "Kecamatan Duren Sawit merupakan kecamatan dengan rumah yang paling \
banyak dijual, disusul oleh Kelapa Gading. Dalam hal ini, kemungkinan pada daerah tersebut banyak \
pengembang properti.";

const EXPENSIVE_NOTE: &str = "Kecamatan pada grafik tersebut dapat menandakan kawasan elite yang \
biasanya dihuni oleh orang-orang dengan pendapatan tinggi karena rata-rata harga rumah pada \
daerah tersebut adalah yang paling mahal.";

const CHEAP_NOTE: &str = "Pada grafik ini, dapat disimpulkan bahwa kecamatan Ciracas, Jagakarsa, \
Kalideres, Pasar Rebo, dan Tanjung Barat merupakan kecamatan yang berada di daerah pinggiran \
Provinsi DKI Jakarta yang agak jauh dari pusat kota, sehingga rata-rata harga rumahnya paling \
rendah dibandingkan kecamatan lain.";

const BUILDING_NOTE: &str = "Keberadaan kecamatan Tomang dan Pademangan pada grafik ini yang \
sebelumnya juga berada pada grafik Top 5 Kecamatan dengan Harga Rumah Rata-Rata tertinggi dan \
Keberadaan kecamatan Jagakarsa dan Pasar Rebo pad grafik ini yang sebelumnya juga berada pada \
grafik Top 5 Kecamatan dengan Harga Rumah Rata-Rata Terendah menandakan bahwa semakin besar luas \
bangunannya, maka semakin besar pula harga rumahnya. Sebaliknya semakin kecil luas bangunannya, \
semakin murah pula harga rumahnya.";

pub fn visualization_page(
    overview: &Overview,
    selection: &CitySelection,
    filtered: &[CityDistrictMean],
) -> Markup {
    desktop_layout(
        Tab::Visualization,
        html! {
            h2 { "Visualisasi Data" }
            p class="muted" {
                (overview.total_listings) " rumah dalam dataset. "
                a href="/ekspor.xlsx" { "Unduh ringkasan (.xlsx)" }
            }

            (card("Banyaknya Rumah yang Dijual di Masing-Masing Kota", html! {
                (bar_chart(&count_bars(&overview.city_counts, false)))
                (commentary(CITY_NOTE))
            }))

            div class="grid-2" {
                (card("Distribusi Luas Tanah", bar_chart(&histogram_bars(&overview.land_area_histogram))))
                (card("Distribusi Luas Bangunan", bar_chart(&histogram_bars(&overview.building_area_histogram))))
            }
            (commentary(AREA_NOTE))

            div class="grid-2" {
                (card("Distribusi Kamar Tidur", bar_chart(&count_bars(&overview.bedroom_counts, true))))
                (card("Distribusi Kamar Mandi", bar_chart(&count_bars(&overview.bathroom_counts, true))))
            }
            (commentary(ROOMS_NOTE))

            (card("Banyaknya Rumah yang Dijual di Tiap Kecamatan", html! {
                (bar_chart(&count_bars(&overview.district_counts, false)))
                (commentary(DISTRICT_NOTE))
            }))

            div class="grid-2" {
                (card("Top 5 Kecamatan dengan Harga Rumah Rata-Rata Tertinggi", html! {
                    (bar_chart(&price_bars(&overview.most_expensive)))
                    (commentary(EXPENSIVE_NOTE))
                }))
                (card("Top 5 Kecamatan dengan Harga Rumah Rata-Rata Terendah", html! {
                    (bar_chart(&price_bars(&overview.cheapest)))
                    (commentary(CHEAP_NOTE))
                }))
            }

            div class="grid-2" {
                (card("Top 5 Kecamatan dengan Luas Bangunan Terbesar", bar_chart(&area_bars(&overview.largest_buildings))))
                (card("Top 5 Kecamatan dengan Luas Bangunan Terkecil", bar_chart(&area_bars(&overview.smallest_buildings))))
            }
            (commentary(BUILDING_NOTE))

            (card("Harga Rata-rata Properti Berdasarkan Kota dan Kecamatan", html! {
                (city_filter_form(&overview.cities, selection))
                (city_district_chart(filtered))
            }))
        },
    )
}

fn city_filter_form(cities: &[String], selection: &CitySelection) -> Markup {
    html! {
        form
            id="city-filter"
            method="get"
            action="/visualisasi"
            hx-get="/visualisasi/filter"
            hx-target="#city-district-chart"
            hx-swap="outerHTML"
            hx-trigger="change"
        {
            label for="kota" { "Pilih Kota" }
            select id="kota" name="kota" multiple size=(cities.len().max(1)) {
                @for city in cities {
                    option value=(city) selected[selection.contains(city)] { (city) }
                }
            }
            noscript {
                button type="submit" { "Tampilkan" }
            }
        }
    }
}

/// The part of the page replaced on every filter change.
pub fn city_district_chart(rows: &[CityDistrictMean]) -> Markup {
    html! {
        div id="city-district-chart" {
            @if !rows.is_empty() {
                (legend(&city_colors(rows)))
                (bar_chart(&city_district_bars(rows)))
            }
        }
    }
}
