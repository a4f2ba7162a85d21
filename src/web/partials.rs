//! Shared markup and presentation helpers.

use clap::crate_version;
use maud::{html, Markup, DOCTYPE};

mod datetime;
mod pretty_json;

pub use self::datetime::{time_since, TimeSince};
pub use self::pretty_json::PrettyJson;

/// Navbar entry highlighted on the current page.
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum ActivePage {
    Templates,
    Passes,
    Errors,
    Settings,
}

/// Wraps page content into the full HTML document.
pub fn document(title: &str, active: Option<ActivePage>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                (headers())
                title { (title) " – Pass Dashboard" }
            }
            body {
                (navbar(active))
                (content)
                (footer())
            }
        }
    }
}

pub fn headers() -> Markup {
    html! {
        meta name="viewport" content="width=device-width, initial-scale=1";
        meta charset="UTF-8";
        link rel="icon" type="image/vnd.microsoft.icon" href="/favicon.ico";
        link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bulma@0.9.3/css/bulma.min.css" crossorigin="anonymous" referrerpolicy="no-referrer";
        link rel="stylesheet" href="/theme.css";
    }
}

fn navbar(active: Option<ActivePage>) -> Markup {
    html! {
        nav.navbar.has-shadow role="navigation" aria-label="main navigation" {
            div.navbar-brand {
                a.navbar-item href="/" { strong { "Pass Dashboard" } }
            }
            div.navbar-menu.is-active {
                div.navbar-start {
                    a.navbar-item.is-active[active == Some(ActivePage::Templates)] href="/" { "Templates" }
                    a.navbar-item.is-active[active == Some(ActivePage::Passes)] href="/passes" { "Passes" }
                    a.navbar-item.is-active[active == Some(ActivePage::Errors)] href="/errors" { "Errors" }
                    a.navbar-item.is-active[active == Some(ActivePage::Settings)] href="/settings" { "Settings" }
                }
            }
        }
    }
}

pub fn footer() -> Markup {
    html! {
        footer.footer {
            div.container {
                p.has-text-centered {
                    "Pass Dashboard " (crate_version!())
                    " – a demonstration front-end, not for production use"
                }
            }
        }
    }
}
