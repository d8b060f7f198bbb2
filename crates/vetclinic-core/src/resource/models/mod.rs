//! The clinic's seven entity types.
//!
//! Field names match the API's wire format.

mod animal;
mod cita;
mod factura;
mod propietario;
mod usuario;
mod vacuna;
mod veterinario;

use serde::{Deserialize, Serialize};

pub use animal::{Animal, CategoriaRef, PropietarioRef};
pub use cita::{AnimalRef, Cita, VacunaRef, VeterinarioRef};
pub use factura::{CitaRef, Factura};
pub use propietario::Propietario;
pub use usuario::Usuario;
pub use vacuna::Vacuna;
pub use veterinario::Veterinario;

/// Server-maintained audit columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_creacion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_actualizacion: Option<String>,
    /// Creating user; set once and never changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usuario_id_creacion: Option<String>,
    /// Last editing user, if the record was ever updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usuario_id_edicion: Option<String>,
}

/// Join non-blank name parts with single spaces.
pub(crate) fn full_name(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .flatten()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
