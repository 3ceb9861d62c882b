//! HTTP client for the Thing Directory backend

use crate::core::config::SEARCH_API;
use crate::core::error::{Error, Result};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The search capability the controller needs from its environment
///
/// The controller is generic over this trait so tests can substitute a stub
/// for the network.
#[allow(async_fn_in_trait)]
pub trait SearchBackend {
    /// Perform a search with an already-serialized query string and return
    /// the raw result items
    async fn search(&self, query: &str) -> Result<Vec<Value>>;
}

/// Backend reaching a real directory over HTTP
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Config {
                message: format!("Failed to build HTTP client: {e}"),
            })?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str, query: &str) -> Result<Url> {
        let mut url = self.base_url.join(path)?;
        if !query.is_empty() {
            url.set_query(Some(query));
        }
        Ok(url)
    }

    /// GET a JSON body from an endpoint; non-2xx statuses are errors
    pub async fn get_json(&self, path: &str, query: &str) -> Result<Value> {
        let url = self.endpoint(path, query)?;
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::BadStatus {
                status: status.as_u16(),
            });
        }
        Ok(response.json().await?)
    }

    /// POST a JSON body to an endpoint; non-2xx statuses are errors
    pub async fn post_json(&self, path: &str, body: &Value) -> Result<Value> {
        let url = self.endpoint(path, "")?;
        let response = self.client.post(url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::BadStatus {
                status: status.as_u16(),
            });
        }
        Ok(response.json().await?)
    }
}

impl SearchBackend for HttpBackend {
    async fn search(&self, query: &str) -> Result<Vec<Value>> {
        let body = self.get_json(SEARCH_API, query).await?;
        match body {
            Value::Array(items) => Ok(items),
            other => Err(Error::BadResponse {
                message: format!("expected a JSON array of things, got {other}"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_path_and_query() {
        let backend = HttpBackend::new("http://localhost:5000").unwrap();
        let url = backend
            .endpoint(SEARCH_API, "thing_type=Sensor&thing_id=t1")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/search?thing_type=Sensor&thing_id=t1"
        );
    }

    #[test]
    fn test_endpoint_without_query() {
        let backend = HttpBackend::new("http://localhost:5000").unwrap();
        let url = backend.endpoint(SEARCH_API, "").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/search");
    }

    #[test]
    fn test_new_rejects_invalid_base_url() {
        assert!(HttpBackend::new("not a url").is_err());
    }
}
