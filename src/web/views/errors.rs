use std::str::FromStr;

use maud::html;
use poem::web::{Data, Html, Path, Query, Redirect};
use poem::{handler, IntoResponse};
use serde::Deserialize;

use crate::passkit::Client;
use crate::prelude::*;
use crate::web::partials::{document, ActivePage};
use crate::web::simulation::{SimulatedOperation, SimulationOutcome};

#[derive(Deserialize)]
pub struct QueryParams {
    #[serde(default)]
    pub e: Option<String>,
}

/// Error demonstration page: one trigger link per simulated operation,
/// plus a banner naming the last attempted one.
#[instrument(skip_all)]
#[handler]
pub async fn get_log(Query(params): Query<QueryParams>) -> impl IntoResponse {
    let markup = document(
        "Errors",
        Some(ActivePage::Errors),
        html! {
            section.section {
                div.container {
                    h1.title { "Error simulation" }
                    p.block {
                        "Each link below calls the upstream service with deliberately "
                        "invalid arguments and shows that the dashboard survives the "
                        "resulting domain error."
                    }
                    @if let Some(attempted) = &params.e {
                        article.message.is-warning {
                            div.message-body {
                                "Last attempted operation: " code { (attempted) }
                            }
                        }
                    }
                    div.buttons {
                        @for operation in SimulatedOperation::ALL {
                            a.button.is-warning.is-outlined href={ "/errors/" (operation.as_str()) } {
                                (operation.as_str())
                            }
                        }
                    }
                }
            }
        },
    );
    Html(markup.into_string())
}

/// Runs the simulation for the named operation, then redirects back to the
/// error page with the attempt recorded in the query string.
///
/// An unknown name is a server error, not a redirect: the lookup fails
/// before the redirect is ever reached, matching the behavior this
/// dashboard demonstrates.
#[instrument(skip_all)]
#[handler]
pub async fn get_simulate(
    Path(error_type): Path<String>,
    client: Data<&Client>,
) -> Result<impl IntoResponse> {
    let operation = SimulatedOperation::from_str(&error_type)?;
    match operation.provoke(*client).await? {
        SimulationOutcome::Provoked(error) => {
            debug!(operation = operation.as_str(), %error, "provoked an upstream error");
        }
        SimulationOutcome::Completed => {
            warn!(operation = operation.as_str(), "the call completed without an error");
        }
    }
    Ok(Redirect::temporary(format!("/errors?e={}", operation.as_str())))
}
