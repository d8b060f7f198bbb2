//! Error types for the vetclinic client.
//!
//! The variants follow how a failure is handled by a screen: validation
//! failures never reach the network, a missing record clears the result
//! list, and server or network failures are reported and leave the screen
//! usable.

use std::fmt;
use thiserror::Error;

/// The unified error type for vetclinic operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Client-side form validation failed; no request was sent.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The server answered 404 for a single-record request.
    #[error("{resource} '{id}' not found")]
    NotFound { resource: String, id: String },

    /// The server answered with any other non-2xx status.
    #[error("server error: {0}")]
    Server(#[from] ServerError),

    /// The request never completed.
    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    /// A response body could not be interpreted.
    #[error("unexpected response: {message}")]
    Decode { message: String },

    /// Invalid caller input (bad URL, page number, unknown field).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns true for a 404 on a single record.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Rewrites a 404 server error into [`Error::NotFound`] for the given record.
    pub fn not_found_as(self, resource: &str, id: &str) -> Self {
        match self {
            Error::Server(ref err) if err.status == 404 => Error::NotFound {
                resource: resource.to_string(),
                id: id.to_string(),
            },
            other => other,
        }
    }
}

/// Required-field and format failures found before submitting a form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more required fields are blank.
    #[error("required fields are missing: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// A new record needs the creating user.
    #[error("the creating user is required for new records")]
    MissingCreatedBy,

    /// A numeric field holds something that is not a number.
    #[error("field '{field}' must be a number, got '{value}'")]
    NotANumber { field: String, value: String },
}

/// A non-2xx answer from the clinic API.
#[derive(Debug)]
pub struct ServerError {
    /// HTTP status code.
    pub status: u16,
    /// The `detail` the API attached, if any.
    pub detail: Option<String>,
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref detail) = self.detail {
            write!(f, ": {}", detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for ServerError {}

impl ServerError {
    /// Create a new server error.
    pub fn new(status: u16, detail: Option<String>) -> Self {
        Self { status, detail }
    }
}

/// Transport-level failures.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Connection could not be established.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// The HTTP client itself could not be configured.
    #[error("client setup failed: {message}")]
    Setup { message: String },

    /// Any other HTTP-level failure.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Invalid record identifier.
    #[error("invalid record id '{value}': {reason}")]
    ResourceId { value: String, reason: String },

    /// Page or limit out of range.
    #[error("invalid page request: {reason}")]
    Page { reason: String },

    /// A field name that the resource does not define.
    #[error("unknown field '{field}' for {resource}")]
    UnknownField { resource: String, field: String },

    /// Invalid locale tag.
    #[error("unsupported locale '{value}'")]
    Locale { value: String },

    /// Generic invalid input.
    #[error("{message}")]
    Other { message: String },
}
