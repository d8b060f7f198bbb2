//! Uniform wrapper for mutation results.

use serde::{Deserialize, Serialize};

/// A mutation result with its status message.
///
/// The API's delete endpoint answers `{mensaje, exito}`; clients map that
/// into this shape so every screen handles mutations the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationEnvelope<T> {
    pub data: T,
    pub message: String,
    pub success: bool,
    pub status: u16,
}

impl<T> MutationEnvelope<T> {
    pub fn new(data: T, message: impl Into<String>, success: bool, status: u16) -> Self {
        Self {
            data,
            message: message.into(),
            success,
            status,
        }
    }
}
