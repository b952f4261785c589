//! Blocking Zeplin REST client.

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::assets::Fetcher;
use crate::error::{Result, ZeplinError};
use crate::types::{Annotation, Screen, ScreenVersion};

/// Default API base URL.
pub const DEFAULT_API_URL: &str = "https://api.zeplin.dev/v1";

/// Authenticated client for the endpoints the CLI reads.
pub struct ZeplinClient {
    client: Client,
    base_url: String,
    token: String,
}

impl ZeplinClient {
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    fn request(&self, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        self.client.get(url).bearer_auth(&self.token)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let resp = ensure_success(self.request(path).query(query).send()?)?;
        let body = resp.text()?;
        decode_json(&body).map_err(|e| ZeplinError::Parse {
            message: format!("Unexpected response from {}: {}", path, e),
            help: None,
        })
    }

    pub fn screen(&self, project_id: &str, screen_id: &str) -> Result<Screen> {
        self.get_json(&format!("projects/{project_id}/screens/{screen_id}"), &[])
    }

    pub fn latest_version(&self, project_id: &str, screen_id: &str) -> Result<ScreenVersion> {
        self.get_json(
            &format!("projects/{project_id}/screens/{screen_id}/versions/latest"),
            &[],
        )
    }

    pub fn annotations(&self, project_id: &str, screen_id: &str) -> Result<Vec<Annotation>> {
        self.get_json(
            &format!("projects/{project_id}/screens/{screen_id}/annotations"),
            &[],
        )
    }

    /// Raw screen listing, passed through as JSON.
    pub fn project_screens(
        &self,
        project_id: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<serde_json::Value> {
        let mut query = Vec::new();
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(offset) = offset {
            query.push(("offset", offset.to_string()));
        }
        self.get_json(&format!("projects/{project_id}/screens"), &query)
    }
}

/// Decode a response body with no nesting limit; layer trees can be arbitrarily deep.
pub(crate) fn decode_json<T: DeserializeOwned>(body: &str) -> serde_json::Result<T> {
    let mut de = serde_json::Deserializer::from_str(body);
    de.disable_recursion_limit();
    let value = T::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

fn ensure_success(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(ZeplinError::api(status.as_u16()))
    }
}

/// Fetches asset bytes from their (pre-signed) content URLs.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: Client::builder().build()?,
        })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let resp = self.client.get(url).send().map_err(|e| ZeplinError::Http {
            message: e.to_string(),
        })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ZeplinError::Http {
                message: format!("download failed: {}", status),
            });
        }

        Ok(resp.bytes()?.to_vec())
    }
}
