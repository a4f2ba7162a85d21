use maud::html;
use poem::web::{Data, Html, Path, Redirect};
use poem::{handler, IntoResponse};

use crate::passkit::Client;
use crate::prelude::*;
use crate::web::partials::{document, ActivePage, PrettyJson, TimeSince};

#[instrument(skip_all)]
#[handler]
pub async fn get(
    Path(template_id): Path<i64>,
    client: Data<&Client>,
) -> Result<impl IntoResponse> {
    let template = client.get_template(template_id).await?;
    let header = &template.template_header;

    let markup = document(
        &header.name,
        Some(ActivePage::Templates),
        html! {
            section.section {
                div.container {
                    h1.title { (header.name) }
                    h2.subtitle {
                        "Template #" (header.id)
                        @if let Some(vendor) = &header.vendor { " · " (vendor) }
                    }
                    div.box {
                        @if !header.description.is_empty() {
                            p { (header.description) }
                        }
                        p {
                            @if let Some(created_at) = header.created_at {
                                "Created " (TimeSince(created_at))
                            }
                            @if let Some(updated_at) = header.updated_at {
                                ", updated " (TimeSince(updated_at))
                            }
                        }
                    }
                    div.box {
                        h2.subtitle { "Fields model" }
                        p.is-family-monospace { (PrettyJson(&template.fields_model)) }
                    }
                    div.buttons {
                        a.button.is-link href={ "/template/" (header.id) "/pass" } { "Issue pass" }
                        a.button.is-danger.is-outlined href={ "/template/" (header.id) "/delete" } { "Delete template" }
                    }
                }
            }
        },
    );
    Ok(Html(markup.into_string()))
}

#[instrument(skip_all)]
#[handler]
pub async fn delete(
    Path(template_id): Path<i64>,
    client: Data<&Client>,
) -> Result<impl IntoResponse> {
    client.delete_template(template_id).await?;
    Ok(Redirect::temporary("/"))
}
