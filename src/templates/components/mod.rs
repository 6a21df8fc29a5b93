use maud::{html, Markup};

pub mod chart;
pub mod error;

pub use chart::{bar_chart, legend};
pub use error::error_page;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h3 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

pub fn commentary(text: &str) -> Markup {
    html! {
        p class="commentary" { (text) }
    }
}
