use serde::{Deserialize, Serialize};

use crate::locale::{Labels, LocalizedLabels};
use crate::resource::{FieldKind, FieldSpec, Resource};
use crate::types::ResourceId;

use super::{Audit, full_name};

/// An appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cita {
    pub id_cita: ResourceId,
    pub fecha_inicio_cita: String,
    pub fecha_final_cita: String,
    pub motivo_cita: String,
    pub animal_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vacuna_id: Option<String>,
    pub veterinario_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animal: Option<AnimalRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vacuna: Option<VacunaRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub veterinario: Option<VeterinarioRef>,
    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalRef {
    pub id_animal: String,
    #[serde(default)]
    pub nombre_animal: String,
    #[serde(default)]
    pub especie_animal: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacunaRef {
    pub id_vacuna: String,
    #[serde(default)]
    pub nombre_vacuna: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VeterinarioRef {
    pub id_veterinario: String,
    #[serde(default)]
    pub primer_nombre_veterinario: String,
    #[serde(default)]
    pub primer_apellido_veterinario: String,
}

impl VeterinarioRef {
    pub fn nombre(&self) -> String {
        full_name(&[
            Some(self.primer_nombre_veterinario.as_str()),
            Some(self.primer_apellido_veterinario.as_str()),
        ])
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("fecha_inicio_cita", FieldKind::DateTime).required(),
    FieldSpec::new("fecha_final_cita", FieldKind::DateTime).required(),
    FieldSpec::text("motivo_cita").required(),
    FieldSpec::new("animal_id", FieldKind::Reference("animales")).required(),
    FieldSpec::new("vacuna_id", FieldKind::Reference("vacunas")),
    FieldSpec::new("veterinario_id", FieldKind::Reference("veterinarios")).required(),
];

impl Resource for Cita {
    const PATH: &'static str = "citas";
    const LABELS: LocalizedLabels = LocalizedLabels {
        es: Labels {
            singular: "Cita",
            plural: "Citas",
            feminine: true,
        },
        en: Labels {
            singular: "Appointment",
            plural: "Appointments",
            feminine: false,
        },
    };

    fn id(&self) -> &ResourceId {
        &self.id_cita
    }

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn display_name(&self) -> String {
        self.motivo_cita.clone()
    }
}
