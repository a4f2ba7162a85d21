use maud::html;
use poem::web::{Data, Html};
use poem::{handler, IntoResponse};

use crate::config::Config;
use crate::passkit::Client;
use crate::prelude::*;
use crate::web::partials::{document, ActivePage, TimeSince};

/// All issued passes, with their public install links.
#[instrument(skip_all)]
#[handler]
pub async fn get_list(client: Data<&Client>, config: Data<&Config>) -> Result<impl IntoResponse> {
    let passes = client.list_passes(None).await?;

    let markup = document(
        "Passes",
        Some(ActivePage::Passes),
        html! {
            section.section {
                div.container {
                    h1.title { "Passes" }
                    h2.subtitle.is-family-monospace { "API key: " (config.api_key) }
                    div.box {
                        table.table.is-hoverable.is-striped.is-fullwidth {
                            thead {
                                tr {
                                    th { "#" }
                                    th { "Template" }
                                    th { "Created" }
                                    th { "Updated" }
                                    th {}
                                }
                            }
                            tbody {
                                @for pass in &passes {
                                    tr {
                                        td {
                                            a href={ "/pass/" (pass.id) } { (pass.id) }
                                        }
                                        td {
                                            @if let Some(template_id) = pass.template_id {
                                                a href={ "/template/" (template_id) } { (template_id) }
                                            }
                                        }
                                        td {
                                            @if let Some(created_at) = pass.created_at {
                                                (TimeSince(created_at))
                                            }
                                        }
                                        td {
                                            @if let Some(updated_at) = pass.updated_at {
                                                (TimeSince(updated_at))
                                            }
                                        }
                                        td {
                                            @if let Some(url) = &pass.url {
                                                a.button.is-small.is-link.is-outlined href=(url) { "Install" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        @if passes.is_empty() {
                            p.has-text-grey { "No passes yet. Issue one from a template." }
                        }
                    }
                }
            }
        },
    );
    Ok(Html(markup.into_string()))
}
