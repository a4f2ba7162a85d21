//! Client facade for the upstream wallet-pass management API.
//!
//! Every domain operation of the dashboard goes through this narrow
//! interface. The facade holds no state beyond the resolved credentials
//! and forwards each call as a single HTTP request.

use std::sync::Arc;

use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::config::Config;
use crate::prelude::*;

pub mod error;
pub mod models;

pub use self::error::{ApiError, ServiceError};
use self::error::ErrorResponse;
use self::models::{Pass, PassList, Template, TemplateHeader, TemplateList};

/// Default upstream API endpoint, used unless the configuration overrides it.
const DEFAULT_API_URL: &str = "https://api.passtools.com/v1";

#[derive(Clone)]
pub struct Client {
    api_key: Arc<String>,
    api_url: Arc<String>,
    client: reqwest::Client,
}

impl Client {
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: Arc::new(config.api_key.clone()),
            api_url: Arc::new(
                config
                    .api_url
                    .clone()
                    .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            ),
            client: reqwest::Client::new(),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_templates(
        &self,
        order: Option<&str>,
    ) -> Result<Vec<TemplateHeader>, ServiceError> {
        let mut url = self.endpoint("template/headers")?;
        if let Some(order) = order {
            url.query_pairs_mut().append_pair("order", order);
        }
        Ok(self
            .call::<TemplateList>(self.client.get(url))
            .await?
            .template_headers)
    }

    #[instrument(skip(self))]
    pub async fn get_template(&self, template_id: i64) -> Result<Template, ServiceError> {
        let url = self.endpoint(&format!("template/{template_id}"))?;
        self.call(self.client.get(url)).await
    }

    #[instrument(skip(self))]
    pub async fn delete_template(&self, template_id: i64) -> Result<(), ServiceError> {
        let url = self.endpoint(&format!("template/{template_id}"))?;
        self.call_discarding(self.client.delete(url)).await
    }

    #[instrument(skip(self))]
    pub async fn list_passes(&self, order: Option<&str>) -> Result<Vec<Pass>, ServiceError> {
        let mut url = self.endpoint("pass")?;
        if let Some(order) = order {
            url.query_pairs_mut().append_pair("order", order);
        }
        Ok(self.call::<PassList>(self.client.get(url)).await?.passes)
    }

    /// Instantiates a new pass from the template, optionally seeding it
    /// with the template's fields model.
    #[instrument(skip(self, fields_model))]
    pub async fn create_pass(
        &self,
        template_id: i64,
        fields_model: Option<&Map<String, Value>>,
    ) -> Result<Pass, ServiceError> {
        let url = self.endpoint(&format!("pass/{template_id}"))?;
        let mut request = self.client.post(url);
        if let Some(fields_model) = fields_model {
            request = request.json(fields_model);
        }
        self.call(request).await
    }

    #[instrument(skip(self))]
    pub async fn get_pass(&self, pass_id: i64) -> Result<Pass, ServiceError> {
        let url = self.endpoint(&format!("pass/{pass_id}"))?;
        self.call(self.client.get(url)).await
    }

    #[instrument(skip(self, fields))]
    pub async fn update_pass(
        &self,
        pass_id: i64,
        fields: &Map<String, Value>,
    ) -> Result<Pass, ServiceError> {
        let url = self.endpoint(&format!("pass/{pass_id}"))?;
        self.call(self.client.put(url).json(fields)).await
    }

    /// Synchronizes the updated pass state out to installed devices.
    #[instrument(skip(self))]
    pub async fn push_pass(&self, pass_id: i64) -> Result<(), ServiceError> {
        let url = self.endpoint(&format!("pass/{pass_id}/push"))?;
        self.call_discarding(self.client.put(url)).await
    }

    #[instrument(skip(self))]
    pub async fn delete_pass(&self, pass_id: i64) -> Result<(), ServiceError> {
        let url = self.endpoint(&format!("pass/{pass_id}"))?;
        self.call_discarding(self.client.delete(url)).await
    }

    /// Downloads the packaged wallet-pass file.
    #[instrument(skip(self))]
    pub async fn download_pass(&self, pass_id: i64) -> Result<Vec<u8>, ServiceError> {
        let url = self.endpoint(&format!("pass/{pass_id}/download"))?;
        let response = self.send(self.client.get(url)).await?;
        Ok(response.bytes().await?.to_vec())
    }

    fn endpoint(&self, path: &str) -> Result<Url, ServiceError> {
        let mut url = Url::parse(&format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            path
        ))?;
        url.query_pairs_mut().append_pair("api_key", &self.api_key);
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response, ServiceError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let body = response.json::<ErrorResponse>().await.unwrap_or_default();
            return Err(ServiceError::Api(ApiError {
                status,
                description: body.description,
                details: body.details,
            }));
        }
        Ok(response)
    }

    async fn call<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ServiceError> {
        Ok(self.send(request).await?.json().await?)
    }

    async fn call_discarding(&self, request: RequestBuilder) -> Result<(), ServiceError> {
        self.send(request).await?;
        Ok(())
    }
}
