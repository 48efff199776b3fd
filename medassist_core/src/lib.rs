#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Core logic of the healthcare assistant.
//!
//! Everything here is synchronous and total except the [`SummarySource`]
//! seam, which is the only place that talks to the outside world.

use async_trait::async_trait;
use std::sync::Arc;

pub mod assistant;
pub mod error;
pub mod links;
pub mod rules;
pub mod session;
pub mod slot;
pub mod summary;

pub use assistant::{
    Assistant, AssistantConfig, Booking, MedicineRedirect, SymptomReport, TipsReport, tips_for,
};
pub use error::{Error, Result};
pub use links::Links;
pub use rules::{MatchPolicy, Rule, RuleTable, precautions_for, tips_rules_for};
pub use session::{Event, Screen, SessionState, Specialty};
pub use slot::BookingWindow;
pub use summary::{SummaryConfig, normalize_extract, truncate_extract};

/// A read-only source of short encyclopedia summaries.
///
/// Implementations must absorb every failure: a lookup either yields a
/// normalized, non-empty extract or `None`.
#[async_trait]
pub trait SummarySource: Send + Sync {
    /// Look up the normalized extract for `query`.
    async fn fetch_extract(&self, query: &str) -> Option<String>;

    /// Look up `query`, substituting `fallback` when nothing usable comes back.
    ///
    /// An empty query never reaches [`SummarySource::fetch_extract`].
    async fn fetch_summary(&self, query: &str, fallback: &str) -> String {
        if query.is_empty() {
            return fallback.to_string();
        }
        self.fetch_extract(query)
            .await
            .unwrap_or_else(|| fallback.to_string())
    }
}

#[async_trait]
impl<T> SummarySource for Arc<T>
where
    T: SummarySource + ?Sized,
{
    async fn fetch_extract(&self, query: &str) -> Option<String> {
        (**self).fetch_extract(query).await
    }
}

/// Summary source that never finds anything. Used when lookups are disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSummary;

#[async_trait]
impl SummarySource for NoSummary {
    async fn fetch_extract(&self, _query: &str) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counting {
        calls: AtomicUsize,
        reply: Option<String>,
    }

    #[async_trait]
    impl SummarySource for Counting {
        async fn fetch_extract(&self, _query: &str) -> Option<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone()
        }
    }

    #[tokio::test]
    async fn empty_query_skips_lookup() {
        let source = Counting {
            calls: AtomicUsize::new(0),
            reply: Some("never used".to_string()),
        };
        let summary = source.fetch_summary("", "fallback text").await;
        assert_eq!(summary, "fallback text");
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_extract_uses_fallback() {
        let source = Arc::new(Counting {
            calls: AtomicUsize::new(0),
            reply: None,
        });
        let summary = source.fetch_summary("fever", "nothing found").await;
        assert_eq!(summary, "nothing found");
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn extract_wins_over_fallback() {
        let source = Counting {
            calls: AtomicUsize::new(0),
            reply: Some("Fever is a rise in body temperature.".to_string()),
        };
        let summary = source.fetch_summary("fever", "nothing found").await;
        assert_eq!(summary, "Fever is a rise in body temperature.");
    }

    #[tokio::test]
    async fn no_summary_always_falls_back() {
        assert_eq!(NoSummary.fetch_summary("sleep", "").await, "");
    }
}
