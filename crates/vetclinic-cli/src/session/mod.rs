//! Persisted login state.

pub mod storage;
mod types;

pub use types::{CliAuth, StoredSession};
