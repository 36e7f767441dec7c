//! HTTP request helpers shared by all API operations.
//!
//! Every operation funnels through [`DnsClient::execute`]: send the request
//! with the API key attached, log the exchange, and read back the status and
//! body text. Interpretation is uniform: any non-2xx status is a
//! [`ClientError::Api`] carrying the raw body; 2xx responses are either
//! parsed as JSON or ignored, depending on the operation.

use reqwest::RequestBuilder;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::DnsClient;
use crate::error::{ClientError, Result};
use crate::utils::log_sanitizer::truncate_for_log;

impl DnsClient {
    /// GET `path` and parse the response body as JSON.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.client.get(self.url(path));
        let (status, response_text) = self.execute(request, "GET", path).await?;

        if !is_success(status) {
            return Err(ClientError::Api {
                status,
                body: response_text,
            });
        }
        parse_json(&response_text)
    }

    /// POST a JSON `body` to `path`. The response body is not meaningful;
    /// success is determined purely by HTTP status.
    pub(crate) async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let body_json = serde_json::to_string_pretty(body)
            .unwrap_or_else(|_| "<unserializable body>".to_string());
        log::debug!("Request Body: {}", truncate_for_log(&body_json));

        let request = self.client.post(self.url(path)).json(body);
        let (status, response_text) = self.execute(request, "POST", path).await?;

        if !is_success(status) {
            return Err(ClientError::Api {
                status,
                body: response_text,
            });
        }
        Ok(())
    }

    /// PUT a JSON `body` to `path`. Status-only success, like [`post`](Self::post).
    pub(crate) async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let body_json = serde_json::to_string_pretty(body)
            .unwrap_or_else(|_| "<unserializable body>".to_string());
        log::debug!("Request Body: {}", truncate_for_log(&body_json));

        let request = self.client.put(self.url(path)).json(body);
        let (status, response_text) = self.execute(request, "PUT", path).await?;

        if !is_success(status) {
            return Err(ClientError::Api {
                status,
                body: response_text,
            });
        }
        Ok(())
    }

    /// DELETE `path`. The response body is ignored on success.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let request = self.client.delete(self.url(path));
        let (status, response_text) = self.execute(request, "DELETE", path).await?;

        if !is_success(status) {
            return Err(ClientError::Api {
                status,
                body: response_text,
            });
        }
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send a request and read back `(status, body_text)`.
    ///
    /// Transport failures map to [`ClientError::Timeout`],
    /// [`ClientError::Serialization`] (request body could not be encoded) or
    /// [`ClientError::Network`]. Status interpretation is left to the caller.
    async fn execute(
        &self,
        request: RequestBuilder,
        method: &str,
        path: &str,
    ) -> Result<(u16, String)> {
        log::debug!("{method} {path}");

        let response = request
            .header("API-Key", &self.api_key)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ClientError::Timeout {
                        detail: e.to_string(),
                    }
                } else if e.is_builder() {
                    ClientError::Serialization {
                        detail: e.to_string(),
                    }
                } else {
                    ClientError::Network {
                        detail: e.to_string(),
                    }
                }
            })?;

        let status = response.status().as_u16();
        log::debug!("Response Status: {status}");

        let response_text = response.text().await.map_err(|e| ClientError::Network {
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        Ok((status, response_text))
    }
}

/// Whether an HTTP status code counts as success (2xx).
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Parse a JSON response body.
pub(crate) fn parse_json<T>(body: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("JSON parse failed: {e}");
        log::error!("Raw response: {}", truncate_for_log(body));
        ClientError::Parse {
            detail: e.to_string(),
        }
    })
}
