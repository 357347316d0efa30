//! Supabase Storage API operations

use bytes::Bytes;
use log::debug;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Response, StatusCode};
use serde_json::json;

use crate::client::records::ObjectEntry;
use crate::config::StorageConfig;
use crate::error::ClientError;

/// Maximum entries requested per listing call.
// TODO: page through listings larger than LIST_LIMIT
const LIST_LIMIT: usize = 1000;

/// HTTP client bound to one Supabase Storage bucket.
pub struct BucketClient {
    http: reqwest::Client,
    base_url: String,
    bucket: String,
}

impl BucketClient {
    /// Builds a client from the storage configuration.
    ///
    /// Fails when only one of the service URL and access token is set.
    pub fn new(config: &StorageConfig) -> Result<Self, ClientError> {
        match (&config.url, &config.access_token) {
            (Some(_), None) => {
                return Err(ClientError::Misconfigured(
                    "access token is required when a service URL is set".into(),
                ));
            }
            (None, Some(_)) => {
                return Err(ClientError::Misconfigured(
                    "service URL is required when an access token is set".into(),
                ));
            }
            _ => {}
        }

        let mut headers = HeaderMap::new();
        if let Some(token) = &config.access_token {
            let bearer = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
                ClientError::Misconfigured("access token is not a valid header value".into())
            })?;
            headers.insert(AUTHORIZATION, bearer);

            let apikey = HeaderValue::from_str(token).map_err(|_| {
                ClientError::Misconfigured("access token is not a valid header value".into())
            })?;
            headers.insert("apikey", apikey);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(ClientError::Request)?;

        let base_url = config
            .url
            .as_deref()
            .unwrap_or_default()
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            http,
            base_url,
            bucket: config.bucket.clone(),
        })
    }

    fn object_url(&self, key: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, self.bucket, key)
    }

    /// Public (unauthenticated) URL for an object.
    pub fn public_url(&self, key: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, key
        )
    }

    /// Uploads an object, replacing an existing one when `upsert` is set.
    pub async fn upload(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
        upsert: bool,
    ) -> Result<(), ClientError> {
        debug!("Uploading {} ({} bytes, {})", key, data.len(), content_type);

        let response = self
            .http
            .post(self.object_url(key))
            .header(CONTENT_TYPE, content_type)
            .header("x-upsert", if upsert { "true" } else { "false" })
            .body(data)
            .send()
            .await?;
        Self::check(key, response).await?;
        Ok(())
    }

    /// Downloads an object's bytes.
    pub async fn download(&self, key: &str) -> Result<Bytes, ClientError> {
        let response = self.http.get(self.object_url(key)).send().await?;
        let response = Self::check(key, response).await?;
        Ok(response.bytes().await?)
    }

    /// Lists entries directly under `prefix`.
    pub async fn list(&self, prefix: &str) -> Result<Vec<ObjectEntry>, ClientError> {
        let body = json!({
            "prefix": prefix.trim_end_matches('/'),
            "limit": LIST_LIMIT,
            "offset": 0,
            "sortBy": { "column": "name", "order": "asc" },
        });

        let response = self
            .http
            .post(format!(
                "{}/storage/v1/object/list/{}",
                self.base_url, self.bucket
            ))
            .json(&body)
            .send()
            .await?;
        let response = Self::check(prefix, response).await?;
        Ok(response.json().await?)
    }

    /// Removes an object.
    pub async fn remove(&self, key: &str) -> Result<(), ClientError> {
        let response = self.http.delete(self.object_url(key)).send().await?;
        Self::check(key, response).await?;
        Ok(())
    }

    async fn check(key: &str, response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(key.to_string()));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Unexpected {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}
