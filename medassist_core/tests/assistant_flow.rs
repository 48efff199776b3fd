//! End-to-end flows through `Assistant` with a scripted summary source.

use async_trait::async_trait;
use medassist_core::{
    Assistant, AssistantConfig, Event, Screen, SessionState, Specialty, SummarySource,
    normalize_extract, tips_for,
};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
struct Scripted {
    extracts: HashMap<String, String>,
    calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl Scripted {
    fn with(mut self, query: &str, extract: &str) -> Self {
        self.extracts.insert(query.to_string(), extract.to_string());
        self
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SummarySource for Scripted {
    async fn fetch_extract(&self, query: &str) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(query.to_string());
        }
        self.extracts
            .get(query)
            .and_then(|text| normalize_extract(text))
    }
}

fn assistant(source: Scripted) -> Assistant<Scripted> {
    let Ok(assistant) = Assistant::new(source, &AssistantConfig::default()) else {
        panic!("default config should be valid");
    };
    assistant
}

#[tokio::test]
async fn symptom_check_combines_summary_and_precautions() {
    let source = Scripted::default().with("Fever", "Fever is a raised body temperature.");
    let assistant = assistant(source);

    let Ok(report) = assistant.check_symptom("Fever").await else {
        panic!("symptom check failed");
    };

    assert_eq!(report.summary, "Fever is a raised body temperature.");
    assert_eq!(
        report.precautions,
        vec![
            "Hydrate well",
            "Rest adequately",
            "Monitor temperature",
            "Use OTC antipyretics if advised",
        ]
    );
    assert_eq!(assistant.source().calls(), 1);
}

#[tokio::test]
async fn blank_symptom_makes_no_lookup() {
    let assistant = assistant(Scripted::default());
    assert!(assistant.check_symptom(" \t").await.is_err());
    assert_eq!(assistant.source().calls(), 0);
}

#[tokio::test]
async fn symptom_query_is_passed_through_untrimmed() {
    let assistant = assistant(Scripted::default());
    let Ok(report) = assistant.check_symptom("  rash ").await else {
        panic!("symptom check failed");
    };
    assert_eq!(report.precautions[0], "Avoid scratching");

    let Ok(queries) = assistant.source().queries.lock() else {
        panic!("poisoned");
    };
    assert_eq!(queries.as_slice(), ["  rash "]);
}

#[tokio::test]
async fn tips_summary_is_truncated_on_word_boundary() {
    let long = "Sleep is a state of reduced mental and physical activity. ".repeat(12);
    assert!(long.chars().count() > 600);
    let assistant = assistant(Scripted::default().with("sleep quality", &long));

    let Ok(report) = assistant.health_tips("sleep quality").await else {
        panic!("tips failed");
    };

    assert!(report.web_summary.chars().count() <= 500);
    assert!(report.web_summary.ends_with("..."));
    assert!(long.starts_with(report.web_summary.trim_end_matches("...")));
    assert_eq!(report.tips[0], "Aim 7–9 hours nightly");
    assert!(report.tips.len() <= 6);
}

#[tokio::test]
async fn tips_for_uses_empty_fallback() {
    let source = Scripted::default();
    let (web_summary, tips) = tips_for(&source, "cholesterol").await;
    assert_eq!(web_summary, "");
    assert_eq!(tips[0], "Increase soluble fiber (oats, legumes)");
    assert_eq!(source.calls(), 1);
}

#[tokio::test]
async fn tips_follow_table_order_with_dedup_enabled() {
    let config = AssistantConfig {
        tips_dedup: true,
        ..AssistantConfig::default()
    };
    let Ok(assistant) = Assistant::new(Scripted::default(), &config) else {
        panic!("config should be valid");
    };
    let (_, tips) = assistant.tips_for("bp and glucose").await;
    assert_eq!(tips[0], "Track fasting & post-meal readings");
    assert_eq!(tips[3], "Reduce sodium (<2g/day)");
    assert_eq!(tips.len(), 6);
}

#[test]
fn booking_follows_session_state() {
    let assistant = assistant(Scripted::default());
    let state = SessionState::new()
        .apply(Event::OpenBook)
        .apply(Event::ChooseSpecialty(Specialty::Physician));
    assert_eq!(state.screen, Screen::Book);

    let Some(specialty) = state.specialty else {
        panic!("specialty not chosen");
    };
    let Ok(booking) = assistant.book(specialty) else {
        panic!("booking failed");
    };
    assert_eq!(booking.specialty, Specialty::Physician);
    assert!(booking.slot.contains(" at "));
}
