//! Controlled fault injection against the upstream service.
//!
//! Each operation in the closed set below calls the matching upstream
//! endpoint with arguments engineered to be rejected, so the dashboard can
//! demonstrate what the upstream domain errors look like.

use std::str::FromStr;

use serde_json::Map;

use crate::passkit::{ApiError, Client, ServiceError};
use crate::prelude::*;

/// Identifier that no entity ever carries upstream.
const BOGUS_ID: i64 = 0;

/// Sort key rejected by the listing endpoints.
const BOGUS_ORDER: &str = "invalid_value";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SimulatedOperation {
    ListTemplates,
    GetTemplate,
    ListPasses,
    CreatePass,
    GetPass,
    UpdatePass,
    DownloadPass,
    DeletePass,
}

/// How a simulation attempt ended.
///
/// A non-domain failure (transport, URL construction) is not an outcome:
/// it propagates out of [`SimulatedOperation::provoke`] as an error.
#[derive(Debug)]
pub enum SimulationOutcome {
    /// The upstream rejected the call with a domain error, as intended.
    Provoked(ApiError),

    /// The call unexpectedly succeeded.
    Completed,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown simulated operation: `{0}`")]
pub struct UnknownOperation(String);

impl SimulatedOperation {
    pub const ALL: [Self; 8] = [
        Self::ListTemplates,
        Self::GetTemplate,
        Self::ListPasses,
        Self::CreatePass,
        Self::GetPass,
        Self::UpdatePass,
        Self::DownloadPass,
        Self::DeletePass,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ListTemplates => "list_templates",
            Self::GetTemplate => "get_template",
            Self::ListPasses => "list_passes",
            Self::CreatePass => "create_pass",
            Self::GetPass => "get_pass",
            Self::UpdatePass => "update_pass",
            Self::DownloadPass => "download_pass",
            Self::DeletePass => "delete_pass",
        }
    }

    /// Invokes the matching upstream operation with invalid arguments and
    /// classifies the result.
    #[instrument(skip(client))]
    pub async fn provoke(self, client: &Client) -> Result<SimulationOutcome, ServiceError> {
        let result = match self {
            Self::ListTemplates => client.list_templates(Some(BOGUS_ORDER)).await.map(drop),
            Self::GetTemplate => client.get_template(BOGUS_ID).await.map(drop),
            Self::ListPasses => client.list_passes(Some(BOGUS_ORDER)).await.map(drop),
            Self::CreatePass => client.create_pass(BOGUS_ID, None).await.map(drop),
            Self::GetPass => client.get_pass(BOGUS_ID).await.map(drop),
            Self::UpdatePass => client.update_pass(BOGUS_ID, &Map::new()).await.map(drop),
            Self::DownloadPass => client.download_pass(BOGUS_ID).await.map(drop),
            Self::DeletePass => client.delete_pass(BOGUS_ID).await,
        };
        match result {
            Ok(()) => Ok(SimulationOutcome::Completed),
            Err(ServiceError::Api(error)) => Ok(SimulationOutcome::Provoked(error)),
            Err(error) => Err(error),
        }
    }
}

impl FromStr for SimulatedOperation {
    type Err = UnknownOperation;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|operation| operation.as_str() == name)
            .ok_or_else(|| UnknownOperation(name.to_string()))
    }
}
