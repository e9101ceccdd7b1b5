//! Generic JSON HTTP client
//!
//! Thin wrapper over `reqwest` (fetch on wasm32). Any non-2xx status is an error.

use log::debug;
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Serialize};

use super::{ApiError, ApiResult};

#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join a resource path onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.url(path);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        decode(check(response, &url)?).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("POST {}", url);
        let response = self.client.post(&url).json(body).send().await?;
        decode(check(response, &url)?).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("PUT {}", url);
        let response = self.client.put(&url).json(body).send().await?;
        decode(check(response, &url)?).await
    }

    /// Response body is ignored.
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        let url = self.url(path);
        debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await?;
        check(response, &url).map(|_| ())
    }
}

fn check(response: Response, url: &str) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
