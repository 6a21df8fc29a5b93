use maud::{html, Markup, DOCTYPE};

pub const SITE_TITLE: &str = "Harga Rumah dan Karakteristik Properti di Provinsi DKI Jakarta";

const WELCOME_TEXT: &str = "Selamat datang di Dashboard \"Harga Rumah dan Karakteristik Properti \
di Provinsi DKI Jakarta\"! Melalui visualisasi interaktif yang disajikan, Anda dapat menjelajahi \
tren harga properti dan karakteristik properti di berbagai kota dan kecamatan di DKI Jakarta, \
hingga mencoba fitur prediksi harga rumah berdasarkan karakteristik tertentu. Dengan menggunakan \
model regresi linear, Anda dapat menginputkan variabel-variabel seperti luas bangunan, luas tanah, \
jumlah kamar tidur, dan lainnya untuk memperoleh estimasi harga properti. Selamat mengeksplorasi!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Visualization,
    Prediction,
    About,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Visualization, Tab::Prediction, Tab::About];

    pub fn href(self) -> &'static str {
        match self {
            Tab::Visualization => "/visualisasi",
            Tab::Prediction => "/prediksi",
            Tab::About => "/tentang",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Visualization => "Visualisasi Data",
            Tab::Prediction => "Prediksi Harga Rumah",
            Tab::About => "Author",
        }
    }
}

pub fn desktop_layout(active: Tab, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="id" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (active.label()) " · " (SITE_TITLE) }
                link rel="stylesheet" href="/static/main.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
            }
            body {
                header class="site-header" {
                    h1 { (SITE_TITLE) }
                    p class="welcome" { (WELCOME_TEXT) }
                    hr;
                    nav class="tabs" {
                        ul {
                            @for tab in Tab::ALL {
                                li {
                                    a href=(tab.href()) class=[(tab == active).then_some("active")] {
                                        (tab.label())
                                    }
                                }
                            }
                        }
                    }
                }
                main class="container" {
                    (content)
                }
            }
        }
    }
}
