// templates/pages/about.rs

use crate::templates::{desktop_layout, Tab};
use maud::{html, Markup};

const INTRO: &str = "Hi, My name is Tedja Diah Rani Octavia. I am an informatics student at \
Universitas Pembangunan Nasional Veteran Jakarta. Thank you for visiting my project.";

const MOTIVATION: &str = "Recently, I was interested in analyzing data. This was my very first \
data visualization dashboard project, so I'd love to hear any suggestions.";

const CONTACTS: [(&str, &str, &str); 3] = [
    ("Email", "mailto:raniranoc@gmail.com", "raniranoc@gmail.com"),
    (
        "LinkedIn",
        "https://www.linkedin.com/in/tedjadiahrani/",
        "https://www.linkedin.com/in/tedjadiahrani/",
    ),
    ("GitHub", "https://github.com/ranioc", "https://github.com/ranioc"),
];

pub fn about_page() -> Markup {
    desktop_layout(
        Tab::About,
        html! {
            h2 { "About Me" }
            p { (INTRO) }
            p { (MOTIVATION) }

            h3 { "Contact Me:" }
            p { "Please contact me for more information about this project or for any suggestions." }
            ul class="contacts" {
                @for (kind, href, text) in CONTACTS {
                    li { (kind) ": " a href=(href) { (text) } }
                }
            }

            p { "Thank you!" }
        },
    )
}
