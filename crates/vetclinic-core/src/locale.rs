//! User-facing message catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, InvalidInputError};

/// Display names for one resource in one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub singular: &'static str,
    pub plural: &'static str,
    /// Grammatical gender, used for Spanish participle agreement.
    pub feminine: bool,
}

/// Labels for every supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedLabels {
    pub es: Labels,
    pub en: Labels,
}

/// Language used for synthetic messages and prompts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    /// Pick the labels for this locale.
    pub fn labels(self, labels: &LocalizedLabels) -> Labels {
        match self {
            Locale::Es => labels.es,
            Locale::En => labels.en,
        }
    }

    /// Message attached to a list response the server did not envelope.
    pub fn listed(self, labels: &LocalizedLabels) -> String {
        let l = self.labels(labels);
        match self {
            Locale::Es => format!("{} {} correctamente", l.plural, participle("obtenid", l.feminine, true)),
            Locale::En => format!("{} retrieved successfully", l.plural),
        }
    }

    pub fn created(self, labels: &LocalizedLabels) -> String {
        let l = self.labels(labels);
        match self {
            Locale::Es => format!("{} {} exitosamente", l.singular, participle("cread", l.feminine, false)),
            Locale::En => format!("{} created successfully", l.singular),
        }
    }

    pub fn updated(self, labels: &LocalizedLabels) -> String {
        let l = self.labels(labels);
        match self {
            Locale::Es => format!("{} {} exitosamente", l.singular, participle("actualizad", l.feminine, false)),
            Locale::En => format!("{} updated successfully", l.singular),
        }
    }

    pub fn deleted(self, labels: &LocalizedLabels) -> String {
        let l = self.labels(labels);
        match self {
            Locale::Es => format!("{} {} exitosamente", l.singular, participle("eliminad", l.feminine, false)),
            Locale::En => format!("{} deleted successfully", l.singular),
        }
    }

    /// Yes/no question shown before deleting a record.
    pub fn delete_prompt(self, labels: &LocalizedLabels, name: &str) -> String {
        let l = self.labels(labels);
        match self {
            Locale::Es => format!("¿Eliminar {} \"{}\"?", l.singular.to_lowercase(), name),
            Locale::En => format!("Delete {} \"{}\"?", l.singular.to_lowercase(), name),
        }
    }

    /// Notice shown when a form fails validation.
    pub fn validation_failed(self) -> &'static str {
        match self {
            Locale::Es => "Los campos obligatorios deben completarse.",
            Locale::En => "Required fields must be completed.",
        }
    }
}

fn participle(stem: &str, feminine: bool, plural: bool) -> String {
    let ending = match (feminine, plural) {
        (false, false) => "o",
        (true, false) => "a",
        (false, true) => "os",
        (true, true) => "as",
    };
    format!("{stem}{ending}")
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Es => f.write_str("es"),
            Locale::En => f.write_str("en"),
        }
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" | "es-co" | "es-es" => Ok(Locale::Es),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            _ => Err(InvalidInputError::Locale {
                value: s.to_string(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CITA: LocalizedLabels = LocalizedLabels {
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

    const USUARIO: LocalizedLabels = LocalizedLabels {
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

    #[test]
    fn spanish_messages_agree_in_gender() {
        assert_eq!(Locale::Es.listed(&CITA), "Citas obtenidas correctamente");
        assert_eq!(Locale::Es.deleted(&CITA), "Cita eliminada exitosamente");
        assert_eq!(Locale::Es.created(&USUARIO), "Usuario creado exitosamente");
        assert_eq!(Locale::Es.updated(&USUARIO), "Usuario actualizado exitosamente");
    }

    #[test]
    fn english_messages() {
        assert_eq!(Locale::En.listed(&CITA), "Appointments retrieved successfully");
        assert_eq!(Locale::En.delete_prompt(&CITA, "Vacunación"), "Delete appointment \"Vacunación\"?");
    }

    #[test]
    fn parses_locale_tags() {
        assert_eq!("es-CO".parse::<Locale>().unwrap(), Locale::Es);
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
    }
}
