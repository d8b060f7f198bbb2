//! The edit buffer behind a create/edit modal.

use std::collections::BTreeMap;

use serde_json::{Number, Value};

use crate::error::{Error, InvalidInputError, ValidationError};

use super::{CREATED_BY, FieldKind, FieldSpec, Payload, Resource, UPDATED_BY};

/// Whether a form creates a new record or updates an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update,
}

/// Text values for a resource's editable fields.
///
/// An edit form remembers the values it was opened with so an update only
/// transmits the fields the user changed.
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    resource: &'static str,
    fields: &'static [FieldSpec],
    mode: FormMode,
    values: BTreeMap<&'static str, String>,
    original: BTreeMap<&'static str, String>,
    created_by: String,
}

impl Form {
    /// An empty form for a new record.
    pub fn for_create<R: Resource>(created_by: Option<&str>) -> Self {
        let values: BTreeMap<_, _> = R::fields().iter().map(|f| (f.name, String::new())).collect();
        Self {
            resource: R::PATH,
            fields: R::fields(),
            mode: FormMode::Create,
            original: values.clone(),
            values,
            created_by: created_by.unwrap_or_default().to_string(),
        }
    }

    /// A form pre-filled from an existing record.
    pub fn for_edit<R: Resource>(record: &R) -> Self {
        let value = serde_json::to_value(record).unwrap_or_default();
        let values: BTreeMap<_, _> = R::fields()
            .iter()
            .map(|f| {
                let current = value.get(f.name).unwrap_or(&Value::Null);
                (f.name, f.kind.to_form_value(current))
            })
            .collect();
        Self {
            resource: R::PATH,
            fields: R::fields(),
            mode: FormMode::Update,
            original: values.clone(),
            values,
            created_by: String::new(),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Current text of a field.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Replace the text of a field.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource has no such field.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> Result<(), Error> {
        let spec = self.spec(field)?;
        self.values.insert(spec.name, value.into());
        Ok(())
    }

    /// Copy every known field of a JSON object into the form.
    pub fn fill_from(&mut self, payload: &Payload) -> Result<(), Error> {
        for (field, value) in payload.iter() {
            let spec = self.spec(field)?;
            let text = match (spec.kind, value) {
                (FieldKind::Secret, Value::String(s)) => s.clone(),
                (kind, value) => kind.to_form_value(value),
            };
            self.values.insert(spec.name, text);
        }
        Ok(())
    }

    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    pub fn set_created_by(&mut self, user: impl Into<String>) {
        self.created_by = user.into();
    }

    /// Fields whose text differs from when the form was opened.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| self.values.get(f.name) != self.original.get(f.name))
            .map(|f| f.name)
            .collect()
    }

    /// Check required fields, the creating user and numeric formats.
    ///
    /// Values are trimmed before the blank check.
    pub fn validate(&self, audited: bool) -> Result<(), ValidationError> {
        let missing: Vec<String> = self
            .fields
            .iter()
            .filter(|f| f.is_required(self.mode) && self.text(f.name).is_empty())
            .map(|f| f.name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        if self.mode == FormMode::Create && audited && self.created_by.trim().is_empty() {
            return Err(ValidationError::MissingCreatedBy);
        }

        for spec in self.fields.iter().filter(|f| f.kind == FieldKind::Number) {
            let text = self.text(spec.name);
            if !text.is_empty() {
                wire_value(spec, text)?;
            }
        }

        Ok(())
    }

    /// Body for a create call: every non-blank field plus the creating user.
    pub fn create_payload(&self, audited: bool) -> Result<Payload, ValidationError> {
        self.validate(audited)?;

        let mut payload = Payload::default();
        for spec in self.fields {
            let text = self.text(spec.name);
            if !text.is_empty() {
                payload.insert(spec.name, wire_value(spec, text)?);
            }
        }
        if audited {
            payload.insert(CREATED_BY, Value::String(self.created_by.trim().to_string()));
        }
        Ok(payload)
    }

    /// Body for an update call: changed fields only, cleared ones as null.
    ///
    /// Secrets are sent whenever they are non-blank and never cleared.
    pub fn update_payload(
        &self,
        audited: bool,
        updated_by: Option<&str>,
    ) -> Result<Payload, ValidationError> {
        self.validate(audited)?;

        let changed = self.changed_fields();
        let mut payload = Payload::default();
        for spec in self.fields {
            let text = self.text(spec.name);
            if spec.kind == FieldKind::Secret {
                if !text.is_empty() {
                    payload.insert(spec.name, wire_value(spec, text)?);
                }
                continue;
            }
            if !changed.contains(&spec.name) {
                continue;
            }
            let value = if text.is_empty() {
                Value::Null
            } else {
                wire_value(spec, text)?
            };
            payload.insert(spec.name, value);
        }
        if audited {
            let editor = updated_by
                .map(str::trim)
                .filter(|u| !u.is_empty())
                .map(|u| Value::String(u.to_string()))
                .unwrap_or(Value::Null);
            payload.insert(UPDATED_BY, editor);
        }
        Ok(payload)
    }

    fn text(&self, field: &str) -> &str {
        self.values.get(field).map(|v| v.trim()).unwrap_or_default()
    }

    fn spec(&self, field: &str) -> Result<&'static FieldSpec, Error> {
        self.fields.iter().find(|f| f.name == field).ok_or_else(|| {
            InvalidInputError::UnknownField {
                resource: self.resource.to_string(),
                field: field.to_string(),
            }
            .into()
        })
    }
}

fn wire_value(spec: &FieldSpec, text: &str) -> Result<Value, ValidationError> {
    if spec.kind != FieldKind::Number {
        return Ok(Value::String(text.to_string()));
    }
    let not_a_number = || ValidationError::NotANumber {
        field: spec.name.to_string(),
        value: text.to_string(),
    };
    if let Ok(n) = text.parse::<i64>() {
        return Ok(Value::Number(n.into()));
    }
    let n = text.parse::<f64>().map_err(|_| not_a_number())?;
    Number::from_f64(n).map(Value::Number).ok_or_else(not_a_number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Animal, Factura, Usuario};
    use serde_json::json;

    fn animal() -> Animal {
        serde_json::from_value(json!({
            "id_animal": "a-1",
            "nombre_animal": "Firulais",
            "especie_animal": "Perro",
            "fecha_nacimiento_animal": "2020-05-01T00:00:00Z",
            "propietario_id": "p-1",
            "categoria_id": "c-1",
            "fecha_creacion": "2024-01-01T10:00:00",
            "fecha_actualizacion": "2024-01-02T10:00:00",
            "usuario_id_creacion": "u-1"
        }))
        .unwrap()
    }

    #[test]
    fn edit_form_truncates_birth_date() {
        let form = Form::for_edit(&animal());
        assert_eq!(form.get("fecha_nacimiento_animal"), Some("2020-05-01"));
        assert_eq!(form.mode(), FormMode::Update);
        assert!(form.changed_fields().is_empty());
    }

    #[test]
    fn whitespace_only_required_field_is_missing() {
        let mut form = Form::for_create::<Animal>(Some("u-1"));
        form.set("nombre_animal", "   ").unwrap();
        form.set("especie_animal", "Gato").unwrap();
        form.set("fecha_nacimiento_animal", "2022-01-01").unwrap();
        form.set("propietario_id", "p-1").unwrap();
        form.set("categoria_id", "c-1").unwrap();
        assert_eq!(
            form.validate(true),
            Err(ValidationError::MissingFields(vec!["nombre_animal".into()]))
        );
    }

    #[test]
    fn create_requires_creating_user() {
        let mut form = Form::for_create::<Animal>(None);
        for (field, value) in [
            ("nombre_animal", "Michi"),
            ("especie_animal", "Gato"),
            ("fecha_nacimiento_animal", "2022-01-01"),
            ("propietario_id", "p-1"),
            ("categoria_id", "c-1"),
        ] {
            form.set(field, value).unwrap();
        }
        assert_eq!(form.validate(true), Err(ValidationError::MissingCreatedBy));

        form.set_created_by("u-9");
        let payload = form.create_payload(true).unwrap();
        assert_eq!(payload["usuario_id_creacion"], json!("u-9"));
        assert_eq!(payload["nombre_animal"], json!("Michi"));
    }

    #[test]
    fn update_sends_only_changed_fields() {
        let mut form = Form::for_edit(&animal());
        form.set("nombre_animal", "Firu").unwrap();
        let payload = form.update_payload(true, Some("u-2")).unwrap();
        assert_eq!(payload.len(), 2);
        assert_eq!(payload["nombre_animal"], json!("Firu"));
        assert_eq!(payload["usuario_id_edicion"], json!("u-2"));
        assert!(!payload.contains("usuario_id_creacion"));
    }

    #[test]
    fn update_never_requires_creating_user() {
        let form = Form::for_edit(&animal());
        assert!(form.validate(true).is_ok());
        let payload = form.update_payload(true, None).unwrap();
        assert_eq!(payload["usuario_id_edicion"], Value::Null);
    }

    #[test]
    fn numbers_are_sent_as_numbers() {
        let mut form = Form::for_create::<Factura>(None);
        form.set("monto_factura", "120.50").unwrap();
        form.set("descripcion_factura", "Consulta").unwrap();
        form.set("cita_id", "c-1").unwrap();
        let payload = form.create_payload(Factura::AUDITED).unwrap();
        assert_eq!(payload["monto_factura"], json!(120.5));
        assert!(!payload.contains("fecha_emision"));
        assert!(!payload.contains("usuario_id_creacion"));

        form.set("monto_factura", "ciento").unwrap();
        assert!(matches!(
            form.validate(false),
            Err(ValidationError::NotANumber { .. })
        ));
    }

    #[test]
    fn password_required_only_when_creating() {
        let mut form = Form::for_create::<Usuario>(None);
        for (field, value) in [
            ("primer_nombre_usuario", "Ana"),
            ("primer_apellido_usuario", "Gómez"),
            ("rol_usuario", "admin"),
            ("nombre_usuario", "agomez"),
        ] {
            form.set(field, value).unwrap();
        }
        assert_eq!(
            form.validate(false),
            Err(ValidationError::MissingFields(vec!["password".into()]))
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let mut form = Form::for_create::<Animal>(None);
        assert!(form.set("color", "negro").is_err());
    }
}
