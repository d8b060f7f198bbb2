use serde::{Deserialize, Serialize};

use crate::locale::{Labels, LocalizedLabels};
use crate::resource::{FieldSpec, Resource};
use crate::types::ResourceId;

use super::{Audit, full_name};

/// A pet owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Propietario {
    pub id_propietario: ResourceId,
    pub primer_nombre_propietario: String,
    #[serde(default)]
    pub segundo_nombre_propietario: Option<String>,
    pub primer_apellido_propietario: String,
    pub segundo_apellido_propietario: String,
    pub telefono: String,
    pub direccion: String,
    #[serde(flatten)]
    pub audit: Audit,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("primer_nombre_propietario").required(),
    FieldSpec::text("segundo_nombre_propietario"),
    FieldSpec::text("primer_apellido_propietario").required(),
    FieldSpec::text("segundo_apellido_propietario").required(),
    FieldSpec::text("telefono").required(),
    FieldSpec::text("direccion").required(),
];

impl Resource for Propietario {
    const PATH: &'static str = "propietarios";
    const LABELS: LocalizedLabels = LocalizedLabels {
        es: Labels {
            singular: "Propietario",
            plural: "Propietarios",
            feminine: false,
        },
        en: Labels {
            singular: "Owner",
            plural: "Owners",
            feminine: false,
        },
    };

    fn id(&self) -> &ResourceId {
        &self.id_propietario
    }

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn display_name(&self) -> String {
        full_name(&[
            Some(self.primer_nombre_propietario.as_str()),
            self.segundo_nombre_propietario.as_deref(),
            Some(self.primer_apellido_propietario.as_str()),
            Some(self.segundo_apellido_propietario.as_str()),
        ])
    }
}
