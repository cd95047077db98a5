use std::time::Duration;

use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde_json::{json, Value};

use crate::errors::{CappasityError, Result};
use crate::models::{embed_code_from_files, embed_code_from_oembed, EmbedAttributes, EmbedCode, Subject};

const DEFAULT_BASE_URL: &str = "https://api.cappasity.com/api";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The versioned JSON:API media type the Cappasity API speaks.
const MEDIA_TYPE: &str = "application/vnd.api+json";
const ACCEPT_VERSION: &str = "~1";

/// Builder for constructing a [`Client`] with custom configuration.
///
/// # Example
///
/// ```no_run
/// use cappasity::ClientBuilder;
/// use std::time::Duration;
///
/// # fn example() -> cappasity::Result<()> {
/// let client = ClientBuilder::new()
///     .api_token("eyJhbGciOi...")
///     .base_url("https://staging.example.com/api")
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    api_token: Option<String>,
    base_url: String,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            api_token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the bearer token for authentication.
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Override the base URL (defaults to `https://api.cappasity.com/api`).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the HTTP request timeout (defaults to 30 seconds).
    pub fn timeout(mut self, d: Duration) -> Self {
        self.timeout = d;
        self
    }

    /// Build the [`Client`].
    ///
    /// If no token was set via [`api_token`](Self::api_token), the builder
    /// will attempt to read the `CAPPASITY_API_TOKEN` environment variable.
    ///
    /// Returns [`CappasityError::Configuration`] if no non-empty token is
    /// available, before any network I/O happens.
    pub fn build(self) -> Result<Client> {
        let token = self
            .api_token
            .or_else(|| std::env::var("CAPPASITY_API_TOKEN").ok())
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| CappasityError::Configuration {
                message: "bearer token is required. Pass it to ClientBuilder::api_token() \
                          or set the CAPPASITY_API_TOKEN environment variable."
                    .into(),
            })?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
            CappasityError::Configuration {
                message: "bearer token contains characters that are not valid in an HTTP header"
                    .into(),
            }
        })?;
        auth.set_sensitive(true);

        // gzip negotiation and decompression are handled by reqwest.
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(CappasityError::Http)?;

        Ok(Client {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            auth,
            http,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The Cappasity embed-code API client.
///
/// Use [`Client::new`] for quick construction or [`ClientBuilder`] for full
/// control. The client holds no mutable state, so a single instance can be
/// shared freely across tasks; it imposes no concurrency limit of its own.
///
/// # Example
///
/// ```no_run
/// use cappasity::{Client, EmbedAttributes, Subject};
///
/// # async fn example() -> cappasity::Result<()> {
/// let client = Client::new("eyJhbGciOi...")?;
///
/// let subject = Subject::sku("1239172819");
/// let code = client.embed_code(&subject, &EmbedAttributes::default()).await?;
/// println!("{}", code.html);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client {
    base_url: String,
    auth: HeaderValue,
    http: reqwest::Client,
}

impl Client {
    /// Create a new client with the given bearer token and default settings.
    ///
    /// Returns [`CappasityError::Configuration`] if the token is empty. For
    /// customization, use [`ClientBuilder`] instead.
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        ClientBuilder::new().api_token(api_token).build()
    }

    /// Request an embed code for a model, identified by URL or by SKU.
    ///
    /// Issues exactly one authenticated POST and returns the resulting
    /// [`EmbedCode`] -- no retry, no fallback. Unset [`EmbedAttributes`]
    /// fields are omitted from the request so the server applies its own
    /// defaults.
    ///
    /// # Errors
    ///
    /// - [`CappasityError::InvalidSubject`] if the subject string is empty
    ///   (checked before any network call).
    /// - [`CappasityError::NotFound`] if no model matches the URL or SKU.
    /// - [`CappasityError::Api`] for any other non-2xx response.
    /// - [`CappasityError::Http`] for transport failures.
    /// - [`CappasityError::MalformedResponse`] if a 2xx body lacks the
    ///   expected fields.
    pub async fn embed_code(
        &self,
        subject: &Subject,
        attributes: &EmbedAttributes,
    ) -> Result<EmbedCode> {
        if subject.value().trim().is_empty() {
            return Err(CappasityError::InvalidSubject {
                message: "subject must be a non-empty model URL or SKU".into(),
            });
        }

        match subject {
            Subject::Url(url) => {
                let body = json!({
                    "data": {
                        "type": "embed",
                        "attributes": attributes,
                    }
                });
                let raw = self
                    .post("/oembed/marketplace", Some(&[("url", url.as_str())]), &body)
                    .await?;
                embed_code_from_oembed(raw)
            }
            Subject::Sku(sku) => {
                let body = json!({
                    "data": {
                        "id": sku,
                        "type": "embed",
                        "attributes": attributes,
                    }
                });
                let raw = self.post("/files/embed", None, &body).await?;
                embed_code_from_files(raw)
            }
        }
    }

    /// Request an embed code for a model by its marketplace URL.
    ///
    /// Convenience wrapper over [`embed_code`](Self::embed_code) with
    /// [`Subject::Url`].
    pub async fn embed_for_url(&self, url: &str, attributes: &EmbedAttributes) -> Result<EmbedCode> {
        self.embed_code(&Subject::url(url), attributes).await
    }

    /// Request an embed code for a model by SKU or barcode.
    ///
    /// Convenience wrapper over [`embed_code`](Self::embed_code) with
    /// [`Subject::Sku`].
    pub async fn embed_for_sku(&self, sku: &str, attributes: &EmbedAttributes) -> Result<EmbedCode> {
        self.embed_code(&Subject::sku(sku), attributes).await
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    /// Send one authenticated POST and map the response.
    ///
    /// 2xx bodies are parsed as JSON (parse failures are
    /// [`CappasityError::MalformedResponse`]); 404 becomes
    /// [`CappasityError::NotFound`]; every other non-2xx becomes
    /// [`CappasityError::Api`] with whatever diagnostic body the server sent.
    async fn post(
        &self,
        path: &str,
        query: Option<&[(&str, &str)]>,
        body: &Value,
    ) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);

        let mut req = self
            .http
            .post(&url)
            .header(AUTHORIZATION, self.auth.clone())
            .header(ACCEPT, MEDIA_TYPE)
            .header(CONTENT_TYPE, MEDIA_TYPE)
            .header("accept-version", ACCEPT_VERSION)
            .json(body);

        if let Some(q) = query {
            req = req.query(q);
        }

        let response = req.send().await.map_err(CappasityError::Http)?;
        let status = response.status();

        if status.is_success() {
            let text = response.text().await.map_err(CappasityError::Http)?;
            return serde_json::from_str(&text).map_err(|e| CappasityError::MalformedResponse {
                message: format!("response body is not valid JSON: {e}"),
            });
        }

        let status_code = status.as_u16();
        let text = response.text().await.unwrap_or_default();
        let parsed: Option<Value> = serde_json::from_str(&text).ok();

        let message = parsed
            .as_ref()
            .and_then(api_error_message)
            .unwrap_or_else(|| text.clone());

        Err(match status_code {
            404 => CappasityError::NotFound { message },
            _ => CappasityError::Api {
                status_code,
                message,
                body: parsed,
            },
        })
    }
}

/// Pull a human-readable message out of a JSON:API error body.
fn api_error_message(body: &Value) -> Option<String> {
    body.pointer("/errors/0/detail")
        .or_else(|| body.pointer("/errors/0/title"))
        .or_else(|| body.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_rejects_empty_token() {
        let err = ClientBuilder::new().api_token("   ").build().unwrap_err();
        assert!(matches!(err, CappasityError::Configuration { .. }));
    }

    #[test]
    fn builder_rejects_token_with_invalid_header_characters() {
        let err = ClientBuilder::new().api_token("bad\ntoken").build().unwrap_err();
        assert!(matches!(err, CappasityError::Configuration { .. }));
    }

    #[test]
    fn builder_trims_trailing_slash_from_base_url() {
        let client = ClientBuilder::new()
            .api_token("token")
            .base_url("https://example.com/api/")
            .build()
            .unwrap();
        assert_eq!(client.base_url, "https://example.com/api");
    }

    #[test]
    fn error_message_prefers_json_api_detail() {
        let body = serde_json::json!({
            "errors": [{ "title": "Not Found", "detail": "no model for this SKU" }]
        });
        assert_eq!(
            api_error_message(&body).as_deref(),
            Some("no model for this SKU")
        );
    }

    #[test]
    fn error_message_falls_back_to_title_then_message() {
        let body = serde_json::json!({ "errors": [{ "title": "Forbidden" }] });
        assert_eq!(api_error_message(&body).as_deref(), Some("Forbidden"));

        let body = serde_json::json!({ "message": "plan limit reached" });
        assert_eq!(api_error_message(&body).as_deref(), Some("plan limit reached"));
    }
}
