use serde::{Deserialize, Serialize};

use crate::locale::{Labels, LocalizedLabels};
use crate::resource::{FieldKind, FieldSpec, Resource};
use crate::types::ResourceId;

use super::AnimalRef;

/// An invoice for one appointment.
///
/// Invoices carry timestamps but no creating/editing user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factura {
    pub id_factura: ResourceId,
    pub monto_factura: f64,
    pub descripcion_factura: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_emision: Option<String>,
    pub cita_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cita: Option<CitaRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_creacion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_actualizacion: Option<String>,
}

/// Appointment summary embedded in an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitaRef {
    pub id_cita: String,
    #[serde(default)]
    pub fecha_inicio_cita: String,
    #[serde(default)]
    pub motivo_cita: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animal: Option<AnimalRef>,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("monto_factura", FieldKind::Number).required(),
    FieldSpec::text("descripcion_factura").required(),
    FieldSpec::new("fecha_emision", FieldKind::Date),
    FieldSpec::new("cita_id", FieldKind::Reference("citas")).required(),
];

impl Resource for Factura {
    const PATH: &'static str = "facturas";
    const LABELS: LocalizedLabels = LocalizedLabels {
        es: Labels {
            singular: "Factura",
            plural: "Facturas",
            feminine: true,
        },
        en: Labels {
            singular: "Invoice",
            plural: "Invoices",
            feminine: false,
        },
    };
    const AUDITED: bool = false;

    fn id(&self) -> &ResourceId {
        &self.id_factura
    }

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn display_name(&self) -> String {
        self.descripcion_factura.clone()
    }
}
