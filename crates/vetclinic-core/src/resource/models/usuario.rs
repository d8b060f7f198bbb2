use serde::{Deserialize, Serialize};

use crate::locale::{Labels, LocalizedLabels};
use crate::resource::{FieldKind, FieldSpec, Resource};
use crate::types::ResourceId;

use super::full_name;

/// A system user. The role drives which screens are reachable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usuario {
    pub id_usuario: ResourceId,
    pub primer_nombre_usuario: String,
    #[serde(default)]
    pub segundo_nombre_usuario: Option<String>,
    pub primer_apellido_usuario: String,
    #[serde(default)]
    pub segundo_apellido_usuario: Option<String>,
    pub rol_usuario: String,
    #[serde(default)]
    pub fecha_nacimiento_usuario: Option<String>,
    pub nombre_usuario: String,
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("primer_nombre_usuario").required(),
    FieldSpec::text("segundo_nombre_usuario"),
    FieldSpec::text("primer_apellido_usuario").required(),
    FieldSpec::text("segundo_apellido_usuario"),
    FieldSpec::text("rol_usuario").required(),
    FieldSpec::new("fecha_nacimiento_usuario", FieldKind::Date),
    FieldSpec::text("nombre_usuario").required(),
    FieldSpec::new("password", FieldKind::Secret).required_on_create(),
];

impl Usuario {
    pub fn nombre_completo(&self) -> String {
        full_name(&[
            Some(self.primer_nombre_usuario.as_str()),
            self.segundo_nombre_usuario.as_deref(),
            Some(self.primer_apellido_usuario.as_str()),
            self.segundo_apellido_usuario.as_deref(),
        ])
    }
}

impl Resource for Usuario {
    const PATH: &'static str = "usuarios";
    const LABELS: LocalizedLabels = LocalizedLabels {
        es: Labels {
            singular: "Usuario",
            plural: "Usuarios",
            feminine: false,
        },
        en: Labels {
            singular: "User",
            plural: "Users",
            feminine: false,
        },
    };
    const AUDITED: bool = false;

    fn id(&self) -> &ResourceId {
        &self.id_usuario
    }

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn display_name(&self) -> String {
        self.nombre_usuario.clone()
    }
}
