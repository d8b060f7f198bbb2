//! Response shapes as the API sends them.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use vetclinic_core::{Error, PageCount, PageRequest, PageResult};

use crate::client::decode;

/// A list answer: either a bare array or an envelope.
pub(crate) enum ListBody<R> {
    Bare(Vec<R>),
    Envelope(EnvelopeBody<R>),
}

/// The enveloped list shape.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EnvelopeBody<R> {
    pub data: Vec<R>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default, alias = "total_pages")]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub success: Option<bool>,
}

impl<R: DeserializeOwned> ListBody<R> {
    /// Decide the shape from the JSON itself, so decode errors name the real cause.
    pub fn from_value(value: Value) -> Result<Self, Error> {
        match value {
            Value::Array(_) => serde_json::from_value(value)
                .map(ListBody::Bare)
                .map_err(decode),
            Value::Object(_) => serde_json::from_value(value)
                .map(ListBody::Envelope)
                .map_err(decode),
            other => Err(Error::Decode {
                message: format!("expected an array or an object, got {}", kind(&other)),
            }),
        }
    }
}

impl<R> EnvelopeBody<R> {
    /// Convert into the canonical result, trusting server counts when present.
    pub fn into_result(self, request: &PageRequest, default_message: String) -> PageResult<R> {
        let limit = self.limit.filter(|l| *l > 0).unwrap_or(request.limit());
        let total_pages = PageCount::resolve(self.total_pages, self.total, self.data.len(), limit);
        PageResult {
            total: self.total,
            page: self.page.filter(|p| *p > 0).unwrap_or(request.page()),
            limit,
            total_pages,
            message: self.message.filter(|m| !m.is_empty()).unwrap_or(default_message),
            success: self.success.unwrap_or(true),
            data: self.data,
        }
    }
}

/// Body of a delete answer, `{mensaje, exito}` or `{message, success}`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct DeleteBody {
    #[serde(default, alias = "mensaje")]
    pub message: Option<String>,
    #[serde(default, alias = "exito")]
    pub success: Option<bool>,
}

/// FastAPI-style error body.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: Value,
}

impl ErrorBody {
    pub fn into_detail(self) -> String {
        match self.detail {
            Value::String(s) => s,
            other => other.to_string(),
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
