use maud::{html, Markup};

/// Plain link; the boosted body turns it into an htmx swap of `main`.
pub fn nav_link(href: &str, body: Markup) -> Markup {
    html! {
        a href=(href) hx-push-url="true" {
            (body)
        }
    }
}

/// "k / N" progress indicator for a quiz step.
pub fn progress(step: i64, total: i64) -> Markup {
    html! {
        p style="color: #666; font-size: 0.9rem; margin-bottom: 0;" {
            "Question " strong { (step) } " of " (total)
        }
        progress value=(step) max=(total) {}
    }
}
