//! Dashboard command implementation.

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use clap::Args;
use colored::Colorize;

use vetclinic_core::Locale;
use vetclinic_core::models::Cita;
use vetclinic_core::nav::{AuthService, Route, menu_for};
use vetclinic_screen::load_reference;

use crate::cli::GlobalArgs;
use crate::commands::Session;
use crate::output;

/// Months shown in the appointment chart, the current one included.
const MONTHS: u32 = 3;

const BAR_WIDTH: usize = 30;

#[derive(Args, Debug)]
pub struct DashboardArgs {}

pub async fn run(global: &GlobalArgs, _args: DashboardArgs) -> Result<()> {
    let session = Session::enter(global, Route::Dashboard)?;

    let citas = load_reference::<Cita, _>(&session.http.resource::<Cita>())
        .await
        .context("Failed to load appointments")?;
    let today = Local::now().date_naive();
    let counts = citas_per_month(citas.records(), today);

    let labels: Vec<String> = counts
        .iter()
        .map(|(year, month, _)| month_label(global.locale, *year, *month))
        .collect();

    if global.json {
        let months: Vec<_> = labels
            .iter()
            .zip(&counts)
            .map(|(label, (_, _, n))| serde_json::json!({"month": label, "citas": n}))
            .collect();
        return output::json_pretty(&months);
    }

    let title = match global.locale {
        Locale::Es => "Citas de los últimos 3 meses",
        Locale::En => "Appointments in the last 3 months",
    };
    println!("{}", title.bold());
    println!();

    let max = counts.iter().map(|(_, _, n)| *n).max().unwrap_or(0);
    let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    for (label, (_, _, n)) in labels.iter().zip(&counts) {
        output::bar(label, width, *n, max, BAR_WIDTH);
    }

    println!();
    for item in menu_for(session.auth.user_role()) {
        println!("{:<14} {}", item.title, item.route.path().dimmed());
    }

    Ok(())
}

/// Appointment counts for the last [`MONTHS`] calendar months, oldest first.
///
/// Appointments are bucketed by the date part of their start time; those
/// outside the window or with unreadable dates are ignored.
pub(crate) fn citas_per_month(citas: &[Cita], today: NaiveDate) -> Vec<(i32, u32, usize)> {
    let mut counts: Vec<(i32, u32, usize)> = (0..MONTHS)
        .rev()
        .map(|back| {
            let (year, month) = months_before(today.year(), today.month(), back);
            (year, month, 0)
        })
        .collect();

    for cita in citas {
        let Some(date) = start_date(&cita.fecha_inicio_cita) else {
            continue;
        };
        if let Some(slot) = counts
            .iter_mut()
            .find(|(y, m, _)| *y == date.year() && *m == date.month())
        {
            slot.2 += 1;
        }
    }
    counts
}

fn months_before(year: i32, month: u32, back: u32) -> (i32, u32) {
    let index = year * 12 + (month as i32 - 1) - back as i32;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

fn start_date(value: &str) -> Option<NaiveDate> {
    let date = value.get(..10)?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

fn month_label(locale: Locale, year: i32, month: u32) -> String {
    const ES: [&str; 12] = [
        "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto",
        "septiembre", "octubre", "noviembre", "diciembre",
    ];
    const EN: [&str; 12] = [
        "January", "February", "March", "April", "May", "June", "July", "August",
        "September", "October", "November", "December",
    ];
    let names = match locale {
        Locale::Es => &ES,
        Locale::En => &EN,
    };
    let name = names.get(month as usize - 1).copied().unwrap_or("?");
    match locale {
        Locale::Es => format!("{name} de {year}"),
        Locale::En => format!("{name} {year}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cita(id: &str, start: &str) -> Cita {
        serde_json::from_value(json!({
            "id_cita": id,
            "fecha_inicio_cita": start,
            "fecha_final_cita": start,
            "motivo_cita": "Control",
            "animal_id": "a1",
            "veterinario_id": "v1"
        }))
        .unwrap()
    }

    #[test]
    fn groups_the_last_three_months() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
        let citas = [
            cita("1", "2023-12-01T09:00:00"),
            cita("2", "2024-01-10T09:00:00Z"),
            cita("3", "2024-01-31T23:00:00"),
            cita("4", "2024-02-01"),
            cita("5", "2023-11-30T09:00:00"),
            cita("6", "not a date"),
        ];

        let counts = citas_per_month(&citas, today);

        assert_eq!(counts, vec![(2023, 12, 1), (2024, 1, 2), (2024, 2, 1)]);
    }

    #[test]
    fn empty_months_are_kept() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let counts = citas_per_month(&[], today);
        assert_eq!(counts, vec![(2024, 3, 0), (2024, 4, 0), (2024, 5, 0)]);
    }

    #[test]
    fn month_labels() {
        assert_eq!(month_label(Locale::Es, 2024, 5), "mayo de 2024");
        assert_eq!(month_label(Locale::En, 2023, 12), "December 2023");
    }
}
