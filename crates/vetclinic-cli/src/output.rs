//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

pub fn warning(msg: &str) {
    eprintln!("{} {}", "!".yellow(), msg);
}

pub fn info(msg: &str) {
    eprintln!("{}", msg.dimmed());
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print rows under a header, columns padded to their widest cell.
pub fn table(headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let header = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| pad(h, *w))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", header.bold());

    for row in rows {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(c, w)| pad(c, *w))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", line.trim_end());
    }
}

/// One line of a horizontal bar chart.
pub fn bar(label: &str, label_width: usize, value: usize, max: usize, width: usize) {
    let len = if max == 0 { 0 } else { value * width / max };
    let bar = "█".repeat(len);
    println!("{}  {} {}", pad(label, label_width), bar.cyan(), value);
}

fn pad(s: &str, width: usize) -> String {
    let len = s.chars().count();
    format!("{}{}", s, " ".repeat(width.saturating_sub(len)))
}
