use maud::html;
use poem::web::{Data, Html};
use poem::{handler, IntoResponse};

use crate::passkit::Client;
use crate::prelude::*;
use crate::web::partials::{document, ActivePage, TimeSince};

/// Landing page: all pass templates known to the upstream account.
#[instrument(skip_all)]
#[handler]
pub async fn get_list(client: Data<&Client>) -> Result<impl IntoResponse> {
    let templates = client.list_templates(None).await?;

    let markup = document(
        "Templates",
        Some(ActivePage::Templates),
        html! {
            section.section {
                div.container {
                    h1.title { "Templates" }
                    div.box {
                        table.table.is-hoverable.is-striped.is-fullwidth {
                            thead {
                                tr {
                                    th { "#" }
                                    th { "Name" }
                                    th { "Description" }
                                    th { "Created" }
                                    th {}
                                }
                            }
                            tbody {
                                @for template in &templates {
                                    tr {
                                        td {
                                            a href={ "/template/" (template.id) } { (template.id) }
                                        }
                                        td { (template.name) }
                                        td { (template.description) }
                                        td {
                                            @if let Some(created_at) = template.created_at {
                                                (TimeSince(created_at))
                                            }
                                        }
                                        td {
                                            div.buttons.is-right {
                                                a.button.is-small.is-link href={ "/template/" (template.id) "/pass" } {
                                                    "Issue pass"
                                                }
                                                a.button.is-small.is-danger.is-outlined href={ "/template/" (template.id) "/delete" } {
                                                    "Delete"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        @if templates.is_empty() {
                            p.has-text-grey { "No templates yet. Create one in the upstream account first." }
                        }
                    }
                }
            }
        },
    );
    Ok(Html(markup.into_string()))
}
