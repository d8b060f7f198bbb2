//! vetclinic-core - Core types, entity models and traits for the clinic client.
//!
//! Every entity screen follows the same contract: a [`ResourceClient`] turns
//! list/get/create/update/delete intents into calls against the clinic API,
//! and results come back in one canonical shape ([`PageResult`] for lists,
//! [`MutationEnvelope`] for deletes) regardless of how the backend answered.

pub mod error;
pub mod locale;
pub mod nav;
pub mod resource;
pub mod traits;
pub mod types;

pub use error::Error;
pub use locale::Locale;
pub use resource::models;
pub use resource::{FieldKind, FieldSpec, Form, FormMode, Payload, Required, Resource};
pub use traits::{Confirm, Notice, NoticeLevel, Notifier, ResourceClient};
pub use types::{ApiUrl, FilterSet, MutationEnvelope, PageCount, PageRequest, PageResult, ResourceId};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
