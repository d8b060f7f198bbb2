use serde::{Deserialize, Serialize};

use crate::locale::{Labels, LocalizedLabels};
use crate::resource::{FieldSpec, Resource};
use crate::types::ResourceId;

use super::{Audit, full_name};

/// A veterinarian.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Veterinario {
    pub id_veterinario: ResourceId,
    pub primer_nombre_veterinario: String,
    #[serde(default)]
    pub segundo_nombre_veterinario: Option<String>,
    pub primer_apellido_veterinario: String,
    #[serde(default)]
    pub segundo_apellido_veterinario: Option<String>,
    pub telefono: String,
    pub email: String,
    pub especialidad: String,
    #[serde(flatten)]
    pub audit: Audit,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("primer_nombre_veterinario").required(),
    FieldSpec::text("segundo_nombre_veterinario"),
    FieldSpec::text("primer_apellido_veterinario").required(),
    FieldSpec::text("segundo_apellido_veterinario"),
    FieldSpec::text("telefono").required(),
    FieldSpec::text("email").required(),
    FieldSpec::text("especialidad").required(),
];

impl Resource for Veterinario {
    const PATH: &'static str = "veterinarios";
    const LABELS: LocalizedLabels = LocalizedLabels {
        es: Labels {
            singular: "Veterinario",
            plural: "Veterinarios",
            feminine: false,
        },
        en: Labels {
            singular: "Veterinarian",
            plural: "Veterinarians",
            feminine: false,
        },
    };

    fn id(&self) -> &ResourceId {
        &self.id_veterinario
    }

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn display_name(&self) -> String {
        full_name(&[
            Some(self.primer_nombre_veterinario.as_str()),
            Some(self.primer_apellido_veterinario.as_str()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_name_skips_missing_parts() {
        let vet: Veterinario = serde_json::from_value(json!({
            "id_veterinario": "v-1",
            "primer_nombre_veterinario": "Laura",
            "segundo_nombre_veterinario": null,
            "primer_apellido_veterinario": "Ríos",
            "segundo_apellido_veterinario": null,
            "telefono": "3001234567",
            "email": "laura@clinica.co",
            "especialidad": "Cirugía",
            "usuario_id_creacion": "u-1"
        }))
        .unwrap();
        assert_eq!(vet.display_name(), "Laura Ríos");
        assert_eq!(vet.audit.usuario_id_creacion.as_deref(), Some("u-1"));
    }
}
