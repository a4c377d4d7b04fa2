use maud::{html, Markup, DOCTYPE};

use crate::{names, utils, views::components::nav_link};

// Swap error pages too, not only 2xx responses.
const HTMX_CONFIG: &str = r#"{"responseHandling":[{"code":".*","swap":true}]}"#;

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";
    }
}

fn js() -> Markup {
    html! {
        script src="https://unpkg.com/htmx.org@2.0.4" {}
    }
}

fn header() -> Markup {
    html! {
        header {
            nav {
                ul {
                    li."secondary" {
                        (nav_link(names::QUIZ_START_URL, html! { strong { "Quiz" } }))
                    }
                }
                ul {
                    li { (nav_link(names::ADMIN_URL, html! { "Questions" })) }
                    li { (nav_link(names::RANKING_URL, html! { "Ranking" })) }
                    li { (nav_link(names::QR_CODE_URL, html! { "QR code" })) }
                    li."secondary" { (utils::VERSION) }
                }
            }
        }
    }
}

fn main(body: Markup) -> Markup {
    html! {
        main { (body) }
    }
}

pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            meta name="color-scheme" content="light dark";
            meta name="htmx-config" content=(HTMX_CONFIG);

            (css())
            (js())

            title { (format!("{title} - Quiz")) }
        }

        body."container" hx-boost="true" hx-target="main" hx-select="main" hx-swap="outerHTML" {
            (header())
            (main(body))
        }
    }
}

pub fn titled(title: &str, body: Markup) -> Markup {
    html! {
        title { (title) " - Quiz" }
        main { (body) }
    }
}

/// Full page for normal navigation, bare fragment for htmx swaps.
pub fn render(is_htmx: bool, title: &str, body: Markup) -> Markup {
    if is_htmx {
        titled(title, body)
    } else {
        page(title, body)
    }
}
