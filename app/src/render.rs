//! Plain-text and JSON rendering of assistant answers.

use medassist_core::assistant::{DISCLAIMER, GREETING};
use medassist_core::{Booking, MedicineRedirect, Specialty, SymptomReport, TipsReport};
use serde::Serialize;
use std::fmt::Write as _;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn bullets(out: &mut String, items: &[String]) {
    for item in items {
        let _ = writeln!(out, "  - {item}");
    }
}

#[must_use]
pub fn greeting() -> String {
    format!("{GREETING}\n")
}

#[must_use]
pub fn footer() -> String {
    format!("---\n{DISCLAIMER}\n")
}

#[must_use]
pub fn main_menu() -> String {
    [
        "  1) 📅 Book Appointment",
        "  2) 🩺 Symptom Check",
        "  3) 💊 Order Medicines",
        "  4) 💡 Health Tips",
        "  q) Quit",
        "",
    ]
    .join("\n")
}

#[must_use]
pub fn specialty_menu() -> String {
    let mut out = String::from("Please choose a speciality:\n");
    for (i, specialty) in Specialty::ALL.iter().enumerate() {
        let _ = writeln!(out, "  {}) {} {}", i + 1, specialty.emoji(), specialty);
    }
    out
}

#[must_use]
pub fn booking(booking: &Booking) -> String {
    let mut out = String::from("✅ Appointment booked\n");
    let _ = writeln!(out, "  Speciality: {}", booking.specialty);
    let _ = writeln!(out, "  Slot: {}", booking.slot);
    let _ = writeln!(out, "  {}", booking.confirmation);
    out
}

#[must_use]
pub fn symptom(report: &SymptomReport) -> String {
    let mut out = String::from("Quick Reference (from the web)\n");
    let _ = writeln!(out, "  > {}\n", report.summary);
    out.push_str("Suggested Precautions (general guidance; not a diagnosis)\n");
    bullets(&mut out, &report.precautions);
    let _ = writeln!(
        out,
        "\n🔎 Search more about “{}” on the web: {}",
        report.symptom, report.search_url
    );
    out
}

#[must_use]
pub fn tips(report: &TipsReport) -> String {
    let mut out = String::new();
    if !report.web_summary.is_empty() {
        out.push_str("From the web (neutral summary)\n");
        let _ = writeln!(out, "  > {}\n", report.web_summary);
    }
    out.push_str("Personalized, Practical Tips\n");
    bullets(&mut out, &report.tips);
    let _ = writeln!(out, "\n🔎 More tips on the web: {}", report.search_url);
    out
}

#[must_use]
pub fn medicines(redirect: &MedicineRedirect) -> String {
    format!(
        "{}\n  Go to {}: {}\n",
        redirect.message, redirect.partner, redirect.url
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tips_hide_empty_summary() {
        let report = TipsReport {
            topic: "sleep".to_string(),
            web_summary: String::new(),
            tips: vec!["Aim 7–9 hours nightly".to_string()],
            search_url: "https://www.google.com/search?q=sleep%20health%20tips".to_string(),
        };
        let text = tips(&report);
        assert!(!text.contains("From the web"));
        assert!(text.contains("  - Aim 7–9 hours nightly\n"));
    }

    #[test]
    fn test_symptom_shows_summary_and_link() {
        let report = SymptomReport {
            symptom: "rash".to_string(),
            summary: "A rash is a change of the skin.".to_string(),
            precautions: vec!["Avoid scratching".to_string()],
            search_url: "https://www.google.com/search?q=rash".to_string(),
        };
        let text = symptom(&report);
        assert!(text.contains("  > A rash is a change of the skin."));
        assert!(text.contains("  - Avoid scratching"));
        assert!(text.ends_with("https://www.google.com/search?q=rash\n"));
    }

    #[test]
    fn test_specialty_menu_is_numbered() {
        let menu = specialty_menu();
        assert!(menu.contains("  1) ❤️ Cardiologist"));
        assert!(menu.contains("  4) 🩺 Physician"));
    }
}
