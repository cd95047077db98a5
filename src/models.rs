use serde::Serialize;
use serde_json::Value;

use crate::errors::{CappasityError, Result};

/// What to request an embed code for: a full model URL on the Cappasity
/// marketplace, or a merchant-assigned SKU/barcode.
///
/// The two variants hit different endpoints with different body shapes, but
/// both produce an [`EmbedCode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    /// A full model URL, e.g.
    /// `https://3d.cappasity.com/u/vendor/2724daa5-cb68-43f9-8d5a-36be7e06f88d`.
    Url(String),
    /// A SKU or barcode previously attached to a model, e.g. `1239172819`.
    Sku(String),
}

impl Subject {
    /// Shorthand for `Subject::Url`.
    pub fn url(url: impl Into<String>) -> Self {
        Subject::Url(url.into())
    }

    /// Shorthand for `Subject::Sku`.
    pub fn sku(sku: impl Into<String>) -> Self {
        Subject::Sku(sku.into())
    }

    pub(crate) fn value(&self) -> &str {
        match self {
            Subject::Url(s) | Subject::Sku(s) => s,
        }
    }
}

/// Display options for the embedded player.
///
/// Every field is optional; unset fields are omitted from the request body so
/// the server applies its own defaults. No range validation is performed
/// client-side -- the API rejects out-of-range values itself.
///
/// # Example
///
/// ```
/// use cappasity::EmbedAttributes;
///
/// let attrs = EmbedAttributes {
///     width: Some(100),
///     height: Some(600),
///     autorun: Some(true),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmbedAttributes {
    /// Iframe width; values <= 100 are treated as percent, larger as pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Iframe height; same percent/pixel rule as `width`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Start the player automatically instead of showing a preview with a
    /// play button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autorun: Option<bool>,

    /// Start automatic rotation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autorotate: Option<bool>,

    /// Show the widget close button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closebutton: Option<bool>,

    /// Show the Cappasity platform logo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<bool>,

    /// Hide the fullscreen button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidefullscreen: Option<bool>,

    /// Enable zoom mode (requires zoom packs on the model).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enableimagezoom: Option<bool>,

    /// Zoom quality: 1 = SD, 2 = HD.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoomquality: Option<u8>,

    /// Seconds per full rotation turn (2.5-60).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autorotatetime: Option<f64>,

    /// Seconds before rotation resumes after being interrupted (1-10).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autorotatedelay: Option<f64>,

    /// Rotation direction: 1 = clockwise, -1 = counter-clockwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autorotatedir: Option<i8>,

    /// Enable analytics collection for the player.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics: Option<bool>,

    /// Attributes this crate does not model yet; serialized inline alongside
    /// the named fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// A generated embed code, returned by [`Client::embed_code`](crate::Client::embed_code).
///
/// `html` is passed through verbatim from the API: a complete `<iframe>`
/// fragment customized via the requested [`EmbedAttributes`]. Note that no
/// verification of paid customization options happens at generation time --
/// the server checks availability each time the player is actually rendered.
#[derive(Debug, Clone)]
pub struct EmbedCode {
    /// Immutable `username/model-id` identifier of the player. Only the
    /// URL-mode endpoint returns one; `None` in SKU mode.
    pub id: Option<String>,
    /// Complete iframe code for embedding.
    pub html: String,
    /// Full API response JSON.
    pub raw: Value,
}

// ---------------------------------------------------------------------------
// Response envelope unwrapping (not part of the public API surface)
// ---------------------------------------------------------------------------

fn malformed(message: impl Into<String>) -> CappasityError {
    CappasityError::MalformedResponse {
        message: message.into(),
    }
}

/// Unwrap a `POST oembed/marketplace` envelope:
/// `{ "data": { "id": ..., "attributes": { "html": ... } } }`.
pub(crate) fn embed_code_from_oembed(raw: Value) -> Result<EmbedCode> {
    let id = raw
        .pointer("/data/id")
        .and_then(Value::as_str)
        .ok_or_else(|| malformed("oembed response is missing data.id"))?
        .to_string();

    let html = raw
        .pointer("/data/attributes/html")
        .and_then(Value::as_str)
        .ok_or_else(|| malformed("oembed response is missing data.attributes.html"))?
        .to_string();

    Ok(EmbedCode {
        id: Some(id),
        html,
        raw,
    })
}

/// Unwrap a `POST files/embed` envelope, where `data` is the HTML string
/// itself: `{ "data": "<iframe ...></iframe>" }`.
pub(crate) fn embed_code_from_files(raw: Value) -> Result<EmbedCode> {
    let html = raw
        .get("data")
        .and_then(Value::as_str)
        .ok_or_else(|| malformed("embed response is missing an HTML string in data"))?
        .to_string();

    Ok(EmbedCode {
        id: None,
        html,
        raw,
    })
}
