//! Resource definitions shared by every entity screen.
//!
//! A [`Resource`] describes one entity type: where it lives in the API, how
//! it is named to users, and the schema of its editable fields. The
//! controller and the HTTP client are written once against this trait.

mod form;
pub mod models;
mod payload;

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::locale::{Labels, Locale, LocalizedLabels};
use crate::types::ResourceId;

pub use form::{Form, FormMode};
pub use payload::Payload;

/// Wire name of the creating-user audit field.
pub const CREATED_BY: &str = "usuario_id_creacion";

/// Wire name of the last-editing-user audit field.
pub const UPDATED_BY: &str = "usuario_id_edicion";

/// An entity type managed by a list screen.
pub trait Resource:
    Serialize + DeserializeOwned + Clone + fmt::Debug + Send + Sync + 'static
{
    /// Collection path under the API base URL, e.g. `animales`.
    const PATH: &'static str;

    /// User-facing names.
    const LABELS: LocalizedLabels;

    /// Whether records carry `usuario_id_creacion`/`usuario_id_edicion`.
    const AUDITED: bool = true;

    /// The record's identifier.
    fn id(&self) -> &ResourceId;

    /// Editable fields, in form order.
    fn fields() -> &'static [FieldSpec];

    /// Short name used in prompts, e.g. an animal's name.
    fn display_name(&self) -> String;

    /// Look up one field by wire name.
    fn field(name: &str) -> Option<&'static FieldSpec> {
        Self::fields().iter().find(|f| f.name == name)
    }

    /// Labels in the given locale.
    fn labels(locale: Locale) -> Labels {
        locale.labels(&Self::LABELS)
    }
}

/// When a field must be filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Required {
    No,
    Always,
    /// Only when creating, e.g. a user's initial password.
    OnCreate,
}

/// The semantic type of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Never copied from a record into the edit form.
    Secret,
    Number,
    /// Calendar day, edited as `YYYY-MM-DD`.
    Date,
    /// Minute precision, edited as `YYYY-MM-DDTHH:MM`.
    DateTime,
    /// Foreign key into another collection path.
    Reference(&'static str),
}

impl FieldKind {
    /// Convert a record's JSON value into the text shown in the form.
    pub fn to_form_value(self, value: &Value) -> String {
        let raw = match value {
            Value::Null => return String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        match self {
            FieldKind::Secret => String::new(),
            FieldKind::Date => truncate_to_day(&raw),
            FieldKind::DateTime => truncate_to_minute(&raw),
            _ => raw,
        }
    }
}

/// Schema entry for one editable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: Required,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: Required::No,
        }
    }

    pub const fn text(name: &'static str) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub const fn required(mut self) -> Self {
        self.required = Required::Always;
        self
    }

    pub const fn required_on_create(mut self) -> Self {
        self.required = Required::OnCreate;
        self
    }

    /// Whether the field must be non-blank in the given mode.
    pub fn is_required(&self, mode: FormMode) -> bool {
        match self.required {
            Required::No => false,
            Required::Always => true,
            Required::OnCreate => mode == FormMode::Create,
        }
    }
}

fn truncate_to_day(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.date_naive().format("%Y-%m-%d").to_string();
    }
    if let Some(dt) = parse_naive(raw) {
        return dt.date().format("%Y-%m-%d").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    raw.chars().take(10).collect()
}

fn truncate_to_minute(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.naive_local().format("%Y-%m-%dT%H:%M").to_string();
    }
    if let Some(dt) = parse_naive(raw) {
        return dt.format("%Y-%m-%dT%H:%M").to_string();
    }
    raw.chars().take(16).collect()
}

fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}
