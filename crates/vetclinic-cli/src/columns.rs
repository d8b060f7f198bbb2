//! Table layout for each entity.

use vetclinic_core::Resource;
use vetclinic_core::models::{
    Animal, Cita, Factura, Propietario, Usuario, Vacuna, Veterinario,
};

/// How a record is shown as one table row.
pub trait Columns: Resource {
    const HEADERS: &'static [&'static str];

    fn row(&self) -> Vec<String>;
}

fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

/// `2024-03-01T10:00:00` as `2024-03-01 10:00`.
fn short_datetime(value: &str) -> String {
    value.chars().take(16).collect::<String>().replace('T', " ")
}

impl Columns for Animal {
    const HEADERS: &'static [&'static str] = &["ID", "NOMBRE", "ESPECIE", "NACIMIENTO", "PROPIETARIO"];

    fn row(&self) -> Vec<String> {
        let owner = self
            .propietario
            .as_ref()
            .map(|p| p.nombre_completo.clone())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| self.propietario_id.clone());
        vec![
            self.id_animal.to_string(),
            self.nombre_animal.clone(),
            self.especie_animal.clone(),
            self.fecha_nacimiento_animal.chars().take(10).collect(),
            owner,
        ]
    }
}

impl Columns for Cita {
    const HEADERS: &'static [&'static str] = &["ID", "INICIO", "FIN", "MOTIVO", "ANIMAL", "VETERINARIO"];

    fn row(&self) -> Vec<String> {
        let animal = self
            .animal
            .as_ref()
            .map(|a| a.nombre_animal.clone())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| self.animal_id.clone());
        let vet = self
            .veterinario
            .as_ref()
            .map(|v| v.nombre())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| self.veterinario_id.clone());
        vec![
            self.id_cita.to_string(),
            short_datetime(&self.fecha_inicio_cita),
            short_datetime(&self.fecha_final_cita),
            self.motivo_cita.clone(),
            animal,
            vet,
        ]
    }
}

impl Columns for Factura {
    const HEADERS: &'static [&'static str] = &["ID", "MONTO", "DESCRIPCION", "EMISION", "CITA"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id_factura.to_string(),
            format!("{:.2}", self.monto_factura),
            self.descripcion_factura.clone(),
            or_dash(self.fecha_emision.as_deref()).chars().take(10).collect(),
            self.cita_id.clone(),
        ]
    }
}

impl Columns for Propietario {
    const HEADERS: &'static [&'static str] = &["ID", "NOMBRE", "TELEFONO", "DIRECCION"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id_propietario.to_string(),
            self.display_name(),
            self.telefono.clone(),
            self.direccion.clone(),
        ]
    }
}

impl Columns for Usuario {
    const HEADERS: &'static [&'static str] = &["ID", "USUARIO", "NOMBRE", "ROL"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id_usuario.to_string(),
            self.nombre_usuario.clone(),
            self.nombre_completo(),
            self.rol_usuario.clone(),
        ]
    }
}

impl Columns for Vacuna {
    const HEADERS: &'static [&'static str] = &["ID", "NOMBRE", "APLICACION", "PROXIMA DOSIS"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id_vacuna.to_string(),
            self.nombre_vacuna.clone(),
            self.fecha_aplicacion_vacuna.chars().take(10).collect(),
            or_dash(self.proxima_dosis_vacuna.as_deref()).chars().take(10).collect(),
        ]
    }
}

impl Columns for Veterinario {
    const HEADERS: &'static [&'static str] = &["ID", "NOMBRE", "ESPECIALIDAD", "TELEFONO", "EMAIL"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id_veterinario.to_string(),
            self.display_name(),
            self.especialidad.clone(),
            self.telefono.clone(),
            self.email.clone(),
        ]
    }
}
