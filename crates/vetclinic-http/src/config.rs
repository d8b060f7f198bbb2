//! Client configuration.

use std::fmt;
use std::time::Duration;

use vetclinic_core::{ApiUrl, Locale};

/// What to do when a list endpoint answers with a bare array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaginationMode {
    /// Accept it and estimate the page count from its length.
    #[default]
    Lenient,
    /// Reject it: a page count needs a server-reported total.
    Strict,
}

/// Settings shared by every resource client.
#[derive(Clone)]
pub struct ClientConfig {
    pub base: ApiUrl,
    pub locale: Locale,
    pub pagination: PaginationMode,
    /// Bearer token sent with every request, if any.
    pub token: Option<String>,
    /// Per-request timeout; none by default.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base: ApiUrl) -> Self {
        Self {
            base,
            locale: Locale::default(),
            pagination: PaginationMode::default(),
            token: None,
            timeout: None,
        }
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn pagination(mut self, mode: PaginationMode) -> Self {
        self.pagination = mode;
        self
    }

    pub fn token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base", &self.base)
            .field("locale", &self.locale)
            .field("pagination", &self.pagination)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .finish()
    }
}
