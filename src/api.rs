//! HTTP client for the records endpoint.

use gloo_net::http::{Request, Response};

use crate::error::ApiError;
use crate::models::{ProxyState, ProxyUpdate, Record};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    pub endpoint: String,
}

impl ApiClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    /// GET the full record set, in server order
    pub async fn fetch_records(&self) -> Result<Vec<Record>, ApiError> {
        let resp = Request::get(&self.endpoint)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let resp = ensure_success(resp)?;
        resp.json::<Vec<Record>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// PUT the desired proxy flag; the response body is not read
    pub async fn set_proxy(&self, desired: ProxyState) -> Result<(), ApiError> {
        let resp = Request::put(&self.endpoint)
            .json(&ProxyUpdate::from(desired))
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        ensure_success(resp)?;
        Ok(())
    }
}

fn ensure_success(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        Ok(resp)
    } else {
        Err(ApiError::Status {
            status: resp.status(),
            status_text: resp.status_text(),
        })
    }
}
