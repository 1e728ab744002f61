//! Blocking GCS JSON API client.
//!
//! Implements the two store capabilities over `objects.list` (with
//! `delimiter=/`, paginated) and the media upload endpoint. Calls are
//! strictly sequential; retries belong to the [`Retrying`](crate::Retrying)
//! wrapper, not here.

use serde::Deserialize;
use std::time::Duration;
use wptd_core::WptdError;

use crate::{ObjectLister, ObjectPublisher};

const DEFAULT_API_BASE: &str = "https://storage.googleapis.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// `objects.list` response, reduced to the fields the pipeline reads.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListResponse {
    #[serde(default)]
    prefixes: Vec<String>,
    next_page_token: Option<String>,
}

pub struct GcsStore {
    http: reqwest::blocking::Client,
    api_base: String,
    bucket: String,
    bearer_token: Option<String>,
}

impl GcsStore {
    pub fn new(bucket: impl Into<String>) -> Result<Self, WptdError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| WptdError::Storage(format!("http client: {}", e)))?;
        Ok(Self {
            http,
            api_base: DEFAULT_API_BASE.to_string(),
            bucket: bucket.into(),
            bearer_token: None,
        })
    }

    /// Authorize writes (and private reads) with an OAuth bearer token.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Point the client at a different endpoint, e.g. a local emulator.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    fn authorize(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        match &self.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

impl ObjectLister for GcsStore {
    fn list_children(&self, prefix: Option<&str>) -> Result<Vec<String>, WptdError> {
        let url = format!("{}/storage/v1/b/{}/o", self.api_base, self.bucket);
        let mut prefixes = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self.http.get(&url).query(&[("delimiter", "/")]);
            if let Some(prefix) = prefix {
                request = request.query(&[("prefix", prefix)]);
            }
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }

            let response = self
                .authorize(request)
                .send()
                .and_then(|r| r.error_for_status())
                .map_err(|e| WptdError::Storage(format!("list '{:?}': {}", prefix, e)))?;
            let page: ListResponse = response
                .json()
                .map_err(|e| WptdError::Storage(format!("list '{:?}': {}", prefix, e)))?;

            prefixes.extend(page.prefixes);
            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(prefixes)
    }
}

impl ObjectPublisher for GcsStore {
    fn put_object(
        &self,
        name: &str,
        content: &[u8],
        content_type: &str,
    ) -> Result<(), WptdError> {
        let url = format!("{}/upload/storage/v1/b/{}/o", self.api_base, self.bucket);
        let request = self
            .http
            .post(&url)
            .query(&[("uploadType", "media"), ("name", name)])
            .header("Content-Type", content_type)
            .body(content.to_vec());

        self.authorize(request)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| WptdError::Storage(format!("put '{}': {}", name, e)))?;
        Ok(())
    }
}
