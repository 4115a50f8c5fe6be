use crate::domain::model::{ServiceConfig, JSON_CONTENT_TYPE};
use crate::utils::error::{FetchError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use serde::Serialize;
use std::collections::HashMap;

/// Thin JSON client for the entity service.
///
/// Holds only immutable configuration, so a single instance can be cloned and
/// shared between callers. Responses to `create_entity` and `add_data` are
/// discarded and status codes are never inspected; transport errors are
/// returned unchanged.
#[derive(Debug, Clone)]
pub struct ServiceAdapter {
    host: Option<String>,
    headers: HashMap<String, String>,
    client: Client,
}

impl ServiceAdapter {
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: ServiceConfig, client: Client) -> Self {
        let headers = HashMap::from([(
            "Content-Type".to_string(),
            JSON_CONTENT_TYPE.to_string(),
        )]);

        Self {
            host: config.host,
            headers,
            client,
        }
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// PUT `{host}/entity` with `fields` as the JSON body.
    ///
    /// `name` does not take part in the request.
    pub async fn create_entity<T>(&self, name: &str, fields: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let url = self.url("entity")?;
        tracing::debug!(entity = name, "PUT {}", url);
        let body = serde_json::to_vec(fields)?;
        self.send(Method::PUT, &url, Some(body)).await?;
        Ok(())
    }

    /// POST `{host}/add` with `data` as the JSON body.
    ///
    /// `name` does not take part in the request.
    pub async fn add_data<T>(&self, name: &str, data: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let url = self.url("add")?;
        tracing::debug!(entity = name, "POST {}", url);
        let body = serde_json::to_vec(data)?;
        self.send(Method::POST, &url, Some(body)).await?;
        Ok(())
    }

    /// GET `{host}/{name}/{id}` and return the raw response body.
    pub async fn fetch_data(&self, name: &str, id: &str) -> Result<Vec<u8>> {
        let url = self.url(&format!("{}/{}", name, id))?;
        tracing::debug!("GET {}", url);
        let response = self.send(Method::GET, &url, None).await?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }

    fn url(&self, path: &str) -> Result<String> {
        let host = self.host.as_deref().ok_or_else(|| FetchError::MissingConfig {
            field: "service.host".to_string(),
        })?;
        Ok(format!("{}/{}", host, path))
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> Result<reqwest::Response> {
        let mut request = self
            .client
            .request(method, url)
            .headers(self.header_map()?);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        tracing::debug!("Service response status: {}", response.status());
        Ok(response)
    }

    fn header_map(&self) -> Result<HeaderMap> {
        let mut map = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid_header(name, e))?;
            let header_value =
                HeaderValue::from_str(value).map_err(|e| invalid_header(name, e))?;
            map.insert(header_name, header_value);
        }
        Ok(map)
    }
}

fn invalid_header(name: &str, err: impl std::fmt::Display) -> FetchError {
    FetchError::InvalidConfigValue {
        field: "service.headers".to_string(),
        value: name.to_string(),
        reason: err.to_string(),
    }
}
