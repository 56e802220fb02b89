use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::credentials::Credentials;
use crate::error::CosmicError;
use crate::query::ObjectQuery;
use crate::types::ObjectsPage;

const BASE_URL: &str = "https://api.cosmicjs.com";

/// HTTP client for the Cosmic REST API, scoped to one bucket.
///
/// Stateless beyond the credentials it holds; every call is an independent
/// network round trip.
pub struct CosmicClient {
    http: reqwest::Client,
    creds: Credentials,
    base_url: String,
}

impl CosmicClient {
    /// Create a client for the bucket named in `creds`.
    pub fn new(creds: Credentials) -> Result<Self, CosmicError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            creds,
            base_url: BASE_URL.to_string(),
        })
    }

    /// Point the client at a different API host (tests, self-hosted
    /// gateways).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The bucket slug this client is scoped to.
    pub fn bucket_slug(&self) -> &str {
        &self.creds.bucket_slug
    }

    /// Execute a query and decode the matching page of objects.
    pub async fn find<T: DeserializeOwned>(
        &self,
        query: ObjectQuery,
    ) -> Result<ObjectsPage<T>, CosmicError> {
        let url = format!(
            "{}/v3/buckets/{}/objects",
            self.base_url, self.creds.bucket_slug
        );
        log::debug!("GET {} query={}", url, query.query_json());

        let params = query.into_params(&self.creds.read_key);
        let resp = self.http.get(&url).query(&params).send().await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            log::warn!("Cosmic returned HTTP {} for {}", status.as_u16(), url);
            return Err(CosmicError::Status {
                status: status.as_u16(),
                message: remote_message(status, &text),
            });
        }

        let page: ObjectsPage<T> = serde_json::from_str(&text).map_err(|e| {
            CosmicError::malformed(format!("{e}. Response: {}", snippet(&text)))
        })?;

        Ok(page)
    }

    /// Execute a query expecting a single object.
    ///
    /// Runs through the same list endpoint with `limit(1)`; an empty 200
    /// page reports the same 404-shaped error a remote miss produces, so
    /// callers have a single absence path.
    pub async fn find_one<T: DeserializeOwned>(
        &self,
        query: ObjectQuery,
    ) -> Result<T, CosmicError> {
        let page: ObjectsPage<T> = self.find(query.limit(1)).await?;
        match page.objects.into_iter().next() {
            Some(object) => Ok(object),
            None => Err(CosmicError::Status {
                status: 404,
                message: "No objects found".to_string(),
            }),
        }
    }
}

/// Best-effort extraction of the message Cosmic puts in error bodies.
fn remote_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body)
        && let Some(message) = value.get("message").and_then(|m| m.as_str())
    {
        return message.to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}

/// First ~200 bytes of a response body, cut on a char boundary.
fn snippet(text: &str) -> &str {
    let mut end = text.len().min(200);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_message_prefers_body_message() {
        let msg = remote_message(
            reqwest::StatusCode::NOT_FOUND,
            r#"{"status":404,"message":"No objects found"}"#,
        );
        assert_eq!(msg, "No objects found");
    }

    #[test]
    fn remote_message_falls_back_to_reason_phrase() {
        let msg = remote_message(reqwest::StatusCode::BAD_GATEWAY, "<html>oops</html>");
        assert_eq!(msg, "Bad Gateway");
    }

    #[test]
    fn snippet_respects_char_boundaries() {
        let text = "é".repeat(150);
        let cut = snippet(&text);
        assert!(cut.len() <= 200);
        assert!(text.starts_with(cut));
    }
}
