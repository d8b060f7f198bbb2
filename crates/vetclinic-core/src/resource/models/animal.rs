use serde::{Deserialize, Serialize};

use crate::locale::{Labels, LocalizedLabels};
use crate::resource::{FieldKind, FieldSpec, Resource};
use crate::types::ResourceId;

use super::Audit;

/// A patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub id_animal: ResourceId,
    pub nombre_animal: String,
    pub especie_animal: String,
    pub fecha_nacimiento_animal: String,
    pub propietario_id: String,
    pub categoria_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub propietario: Option<PropietarioRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categoria: Option<CategoriaRef>,
    #[serde(flatten)]
    pub audit: Audit,
}

/// Owner summary embedded in an animal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropietarioRef {
    pub id_propietario: String,
    #[serde(default)]
    pub nombre_completo: String,
}

/// Category summary embedded in an animal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoriaRef {
    pub id_categoria: String,
    #[serde(default)]
    pub nombre_categoria: String,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("nombre_animal").required(),
    FieldSpec::text("especie_animal").required(),
    FieldSpec::new("fecha_nacimiento_animal", FieldKind::Date).required(),
    FieldSpec::new("propietario_id", FieldKind::Reference("propietarios")).required(),
    FieldSpec::new("categoria_id", FieldKind::Reference("categorias")).required(),
];

impl Resource for Animal {
    const PATH: &'static str = "animales";
    const LABELS: LocalizedLabels = LocalizedLabels {
        es: Labels {
            singular: "Animal",
            plural: "Animales",
            feminine: false,
        },
        en: Labels {
            singular: "Animal",
            plural: "Animals",
            feminine: false,
        },
    };

    fn id(&self) -> &ResourceId {
        &self.id_animal
    }

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn display_name(&self) -> String {
        self.nombre_animal.clone()
    }
}
