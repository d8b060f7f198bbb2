//! List filter criteria.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Named match criteria applied to a list query.
///
/// Fields holding an empty string are kept (so a screen can show an empty
/// input) but never sent: only non-empty values become query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet(BTreeMap<String, String>);

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field to a value; an empty value disables the field.
    pub fn set(&mut self, field: impl Into<String>, value: impl ToString) -> &mut Self {
        self.0.insert(field.into(), value.to_string());
        self
    }

    /// Builder form of [`FilterSet::set`].
    pub fn with(mut self, field: impl Into<String>, value: impl ToString) -> Self {
        self.set(field, value);
        self
    }

    /// Remove a field entirely.
    pub fn unset(&mut self, field: &str) -> &mut Self {
        self.0.remove(field);
        self
    }

    /// Blank every field, keeping the keys.
    pub fn clear(&mut self) {
        for value in self.0.values_mut() {
            value.clear();
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// True when no field would be sent.
    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }

    /// Fields that will be sent, in name order.
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(field, value)| (field.as_str(), value.as_str()))
    }

    /// Owned query pairs for the active fields.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.active()
            .map(|(field, value)| (field.to_string(), value.to_string()))
            .collect()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for FilterSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut filters = FilterSet::new();
        for (field, value) in iter {
            filters.set(field, value);
        }
        filters
    }
}
