use maud::html;
use poem::web::{Data, Html};
use poem::{handler, IntoResponse};

use crate::config::Config;
use crate::prelude::*;
use crate::web::partials::{document, ActivePage};

/// Static page showing the configuration resolved at startup.
#[instrument(skip_all)]
#[handler]
pub async fn get(config: Data<&Config>) -> impl IntoResponse {
    let markup = document(
        "Settings",
        Some(ActivePage::Settings),
        html! {
            section.section {
                div.container {
                    h1.title { "Settings" }
                    div.box {
                        table.table.is-fullwidth {
                            tbody {
                                tr {
                                    th { "API key" }
                                    td.is-family-monospace { (config.api_key) }
                                }
                                tr {
                                    th { "Base URL" }
                                    td { a href=(config.base_url) { (config.base_url) } }
                                }
                                tr {
                                    th { "API URL" }
                                    td.is-family-monospace {
                                        @match &config.api_url {
                                            Some(api_url) => { (api_url) }
                                            None => { em { "default" } }
                                        }
                                    }
                                }
                            }
                        }
                        p.has-text-grey {
                            "Resolved once at startup; override the values by deploying "
                            "with your own keys."
                        }
                    }
                }
            }
        },
    );
    Html(markup.into_string())
}
