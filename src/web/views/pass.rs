use maud::html;
use poem::web::{Data, Html, Path, Query, Redirect};
use poem::{handler, IntoResponse};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::passkit::Client;
use crate::prelude::*;
use crate::web::partials::{document, ActivePage, PrettyJson, TimeSince};

#[instrument(skip_all)]
#[handler]
pub async fn get(Path(pass_id): Path<i64>, client: Data<&Client>) -> Result<impl IntoResponse> {
    let pass = client.get_pass(pass_id).await?;

    let markup = document(
        &format!("Pass #{}", pass.id),
        Some(ActivePage::Passes),
        html! {
            section.section {
                div.container {
                    h1.title { "Pass #" (pass.id) }
                    @if let Some(template_id) = pass.template_id {
                        h2.subtitle {
                            "Issued from " a href={ "/template/" (template_id) } { "template #" (template_id) }
                        }
                    }
                    div.box {
                        p {
                            @if let Some(created_at) = pass.created_at {
                                "Created " (TimeSince(created_at))
                            }
                            @if let Some(updated_at) = pass.updated_at {
                                ", updated " (TimeSince(updated_at))
                            }
                        }
                        @if let Some(url) = &pass.url {
                            p { a href=(url) { "Install link" } }
                        }
                    }
                    div.box {
                        h2.subtitle { "Fields" }
                        p.is-family-monospace { (PrettyJson(&pass.fields)) }
                    }
                    div.box {
                        h2.subtitle { "Update fields" }
                        form action={ "/pass/" (pass.id) "/update" } method="GET" {
                            div.field.has-addons {
                                div.control.is-expanded {
                                    input.input.is-family-monospace
                                        type="text"
                                        name="fields"
                                        placeholder=r#"{"offer": {"value": "20% off"}}"#
                                        required;
                                }
                                div.control {
                                    button.button.is-link type="submit" { "Update & push" }
                                }
                            }
                        }
                    }
                    div.buttons {
                        a.button.is-danger.is-outlined href={ "/pass/" (pass.id) "/delete" } { "Delete pass" }
                    }
                }
            }
        },
    );
    Ok(Html(markup.into_string()))
}

/// Issues a new pass from the template and redirects to it.
///
/// The template is fetched first so that the new pass starts out with the
/// template's own fields model.
#[instrument(skip_all)]
#[handler]
pub async fn create(
    Path(template_id): Path<i64>,
    client: Data<&Client>,
) -> Result<impl IntoResponse> {
    let template = client.get_template(template_id).await?;
    let pass = client
        .create_pass(template_id, Some(&template.fields_model))
        .await?;
    Ok(Redirect::temporary(format!("/pass/{}", pass.id)))
}

#[derive(Deserialize)]
pub struct UpdateParams {
    fields: String,
}

/// Applies a partial update, then pushes the pass to installed devices.
///
/// A malformed `fields` value is a hard failure: the update is never
/// silently skipped.
#[instrument(skip_all)]
#[handler]
pub async fn update(
    Path(pass_id): Path<i64>,
    Query(params): Query<UpdateParams>,
    client: Data<&Client>,
) -> Result<impl IntoResponse> {
    let fields: Map<String, Value> =
        serde_json::from_str(&params.fields).context("failed to parse the `fields` parameter")?;
    client.update_pass(pass_id, &fields).await?;
    client.push_pass(pass_id).await?;
    Ok(Redirect::temporary(format!("/pass/{pass_id}")))
}

#[instrument(skip_all)]
#[handler]
pub async fn delete(Path(pass_id): Path<i64>, client: Data<&Client>) -> Result<impl IntoResponse> {
    client.delete_pass(pass_id).await?;
    Ok(Redirect::temporary("/"))
}
