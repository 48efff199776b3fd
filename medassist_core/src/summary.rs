//! Normalization of encyclopedia extracts and the summary lookup settings.

use serde::{Deserialize, Serialize};

/// Extracts longer than this many characters are shortened.
pub const MAX_EXTRACT_CHARS: usize = 500;

/// Length of the prefix searched for a word boundary when shortening.
const CUT_CHARS: usize = MAX_EXTRACT_CHARS - ELLIPSIS.len();

const ELLIPSIS: &str = "...";

/// Shorten `text` to at most [`MAX_EXTRACT_CHARS`] characters.
///
/// The first 497 characters are kept up to their last space and an ellipsis
/// is appended. Text without any space in that prefix is cut hard.
#[must_use]
pub fn truncate_extract(text: &str) -> String {
    if text.chars().count() <= MAX_EXTRACT_CHARS {
        return text.to_string();
    }

    let end = text
        .char_indices()
        .nth(CUT_CHARS)
        .map_or(text.len(), |(idx, _)| idx);
    let head = &text[..end];
    let kept = head.rsplit_once(' ').map_or(head, |(before, _)| before);

    format!("{kept}{ELLIPSIS}")
}

/// Shorten and trim an extract; `None` when nothing is left.
#[must_use]
pub fn normalize_extract(text: &str) -> Option<String> {
    let shortened = truncate_extract(text);
    let trimmed = shortened.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Settings for the summary lookup and its cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Whether to query the summary API at all.
    #[serde(default = "SummaryConfig::default_enabled")]
    pub enabled: bool,

    /// REST API root; `/page/summary/{title}` is appended.
    #[serde(default = "SummaryConfig::default_base_url")]
    pub base_url: String,

    /// Request timeout (seconds)
    #[serde(default = "SummaryConfig::default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header
    #[serde(default = "SummaryConfig::default_user_agent")]
    pub user_agent: String,

    /// How long a fetched extract stays cached (seconds)
    #[serde(default = "SummaryConfig::default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Maximum number of cached queries
    #[serde(default = "SummaryConfig::default_cache_capacity")]
    pub cache_capacity: usize,
}

impl SummaryConfig {
    const fn default_enabled() -> bool {
        true
    }

    fn default_base_url() -> String {
        "https://en.wikipedia.org/api/rest_v1".to_string()
    }

    const fn default_timeout_secs() -> u64 {
        6
    }

    fn default_user_agent() -> String {
        format!("medassist/{} (healthcare assistant CLI)", env!("CARGO_PKG_VERSION"))
    }

    const fn default_cache_ttl_secs() -> u64 {
        3600
    }

    const fn default_cache_capacity() -> usize {
        256
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            base_url: Self::default_base_url(),
            timeout_secs: Self::default_timeout_secs(),
            user_agent: Self::default_user_agent(),
            cache_ttl_secs: Self::default_cache_ttl_secs(),
            cache_capacity: Self::default_cache_capacity(),
        }
    }
}
