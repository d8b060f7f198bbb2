use serde::{Deserialize, Serialize};

use crate::locale::{Labels, LocalizedLabels};
use crate::resource::{FieldKind, FieldSpec, Resource};
use crate::types::ResourceId;

use super::Audit;

/// A vaccine application, with the next dose if one is scheduled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vacuna {
    pub id_vacuna: ResourceId,
    pub nombre_vacuna: String,
    pub fecha_aplicacion_vacuna: String,
    #[serde(default)]
    pub proxima_dosis_vacuna: Option<String>,
    #[serde(flatten)]
    pub audit: Audit,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("nombre_vacuna").required(),
    FieldSpec::new("fecha_aplicacion_vacuna", FieldKind::Date).required(),
    FieldSpec::new("proxima_dosis_vacuna", FieldKind::Date),
];

impl Resource for Vacuna {
    const PATH: &'static str = "vacunas";
    const LABELS: LocalizedLabels = LocalizedLabels {
        es: Labels {
            singular: "Vacuna",
            plural: "Vacunas",
            feminine: true,
        },
        en: Labels {
            singular: "Vaccine",
            plural: "Vaccines",
            feminine: false,
        },
    };

    fn id(&self) -> &ResourceId {
        &self.id_vacuna
    }

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn display_name(&self) -> String {
        self.nombre_vacuna.clone()
    }
}
