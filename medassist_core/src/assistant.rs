//! The four assistant flows behind the front-end.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::SummarySource;
use crate::error::{Error, Result};
use crate::links::Links;
use crate::rules::{DEFAULT_MAX_ITEMS, MatchPolicy, PRECAUTIONS, RuleTable, TIPS};
use crate::session::Specialty;
use crate::slot::{BookingWindow, next_slot};

pub const GREETING: &str = "Hello dear user! Welcome to HCL Healthcare, making corporate India better. \
How can I help you today in your healthcare journey?";

pub const DISCLAIMER: &str = "⚠️ This assistant provides general information and convenience only. \
It is not a medical diagnosis. For urgent or persistent symptoms, consult a qualified clinician immediately.";

/// Shown when the symptom lookup finds nothing.
pub const SYMPTOM_FALLBACK: &str = "No quick reference found. Consider consulting a clinician.";

pub const BOOKING_CONFIRMATION: &str =
    "You’ll receive a confirmation on your registered email/phone.";

pub const MEDICINE_MESSAGE: &str = "We’ll direct you to our medical partner.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Maximum advice entries per answer
    #[serde(default = "AssistantConfig::default_max_advice")]
    pub max_advice: usize,

    /// Remove duplicate health tips (precautions are always deduplicated)
    #[serde(default)]
    pub tips_dedup: bool,

    #[serde(default)]
    pub booking: BookingWindow,

    /// Web search endpoint; `?q=<text>` is appended
    #[serde(default = "AssistantConfig::default_search_url")]
    pub search_url: String,

    #[serde(default = "AssistantConfig::default_medicine_partner")]
    pub medicine_partner: String,

    #[serde(default = "AssistantConfig::default_medicine_url")]
    pub medicine_url: String,
}

impl AssistantConfig {
    const fn default_max_advice() -> usize {
        DEFAULT_MAX_ITEMS
    }

    fn default_search_url() -> String {
        "https://www.google.com/search".to_string()
    }

    fn default_medicine_partner() -> String {
        "Tata 1mg".to_string()
    }

    fn default_medicine_url() -> String {
        "https://www.1mg.com/".to_string()
    }

    /// Check the advice limit and the booking window.
    pub fn validate(&self) -> Result<()> {
        if !(1..=DEFAULT_MAX_ITEMS).contains(&self.max_advice) {
            return Err(Error::MaxAdvice(self.max_advice));
        }
        self.booking.validate()?;
        Ok(())
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            max_advice: Self::default_max_advice(),
            tips_dedup: false,
            booking: BookingWindow::default(),
            search_url: Self::default_search_url(),
            medicine_partner: Self::default_medicine_partner(),
            medicine_url: Self::default_medicine_url(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Booking {
    pub specialty: Specialty,
    pub slot: String,
    pub confirmation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymptomReport {
    pub symptom: String,
    /// Quick reference from the web, or [`SYMPTOM_FALLBACK`].
    pub summary: String,
    pub precautions: Vec<String>,
    pub search_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TipsReport {
    pub topic: String,
    /// Empty when the lookup found nothing; not shown in that case.
    pub web_summary: String,
    pub tips: Vec<String>,
    pub search_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedicineRedirect {
    pub message: String,
    pub partner: String,
    pub url: String,
}

/// Web summary plus rule-based tips for `topic`, using the default tips table.
pub async fn tips_for<S>(source: &S, topic: &str) -> (String, Vec<String>)
where
    S: SummarySource + ?Sized,
{
    let web_summary = source.fetch_summary(topic, "").await;
    (web_summary, TIPS.evaluate(topic))
}

/// Front-end facing entry point for all flows.
pub struct Assistant<S> {
    source: S,
    precautions: RuleTable,
    tips: RuleTable,
    links: Links,
    booking: BookingWindow,
    medicine_partner: String,
}

impl<S> Assistant<S>
where
    S: SummarySource,
{
    pub fn new(source: S, config: &AssistantConfig) -> Result<Self> {
        config.validate()?;

        let tips_policy = MatchPolicy {
            dedup: config.tips_dedup,
            max_items: config.max_advice,
        };

        Ok(Self {
            source,
            precautions: PRECAUTIONS.with_policy(MatchPolicy::dedup(config.max_advice)),
            tips: TIPS.with_policy(tips_policy),
            links: Links::new(config.search_url.clone(), config.medicine_url.clone()),
            booking: config.booking,
            medicine_partner: config.medicine_partner.clone(),
        })
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Confirm a mock appointment with `specialty`.
    pub fn book(&self, specialty: Specialty) -> Result<Booking> {
        let slot = next_slot(&self.booking)?;
        info!("Booked {specialty} for {slot}");
        Ok(Booking {
            specialty,
            slot,
            confirmation: BOOKING_CONFIRMATION.to_string(),
        })
    }

    #[must_use]
    pub fn precautions_for(&self, symptom: &str) -> Vec<String> {
        self.precautions.evaluate(symptom)
    }

    pub async fn tips_for(&self, topic: &str) -> (String, Vec<String>) {
        let web_summary = self.source.fetch_summary(topic, "").await;
        (web_summary, self.tips.evaluate(topic))
    }

    pub async fn check_symptom(&self, symptom: &str) -> Result<SymptomReport> {
        if symptom.trim().is_empty() {
            return Err(Error::EmptyInput("symptom"));
        }

        debug!(
            "Symptom rules matched: {:?}",
            self.precautions.matching_rules(symptom)
        );
        let summary = self.source.fetch_summary(symptom, SYMPTOM_FALLBACK).await;

        Ok(SymptomReport {
            symptom: symptom.to_string(),
            summary,
            precautions: self.precautions_for(symptom),
            search_url: self.links.search(symptom),
        })
    }

    #[must_use]
    pub fn order_medicines(&self) -> MedicineRedirect {
        MedicineRedirect {
            message: MEDICINE_MESSAGE.to_string(),
            partner: self.medicine_partner.clone(),
            url: self.links.medicine().to_string(),
        }
    }

    pub async fn health_tips(&self, topic: &str) -> Result<TipsReport> {
        if topic.trim().is_empty() {
            return Err(Error::EmptyInput("topic"));
        }

        debug!("Tip rules matched: {:?}", self.tips.matching_rules(topic));
        let (web_summary, tips) = self.tips_for(topic).await;

        Ok(TipsReport {
            topic: topic.to_string(),
            web_summary,
            tips,
            search_url: self.links.tips_search(topic),
        })
    }
}
