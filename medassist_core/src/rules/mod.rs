//! Keyword rule tables.
//!
//! A [`RuleTable`] is an ordered list of [`Rule`]s. Input is lower-cased once
//! and every rule whose keyword set matches appends its advice, in table
//! order. When nothing matches the table's fallback list is used instead.
//! The [`MatchPolicy`] then optionally removes duplicates (first occurrence
//! wins) and truncates the result.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

mod precautions;
mod tips;

pub use precautions::{PRECAUTIONS, precautions_for};
pub use tips::{TIPS, tips_rules_for};

/// Upper bound on the advice list shown for one request.
pub const DEFAULT_MAX_ITEMS: usize = 6;

/// One keyword set and the advice it contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Short label used in logs.
    pub name: &'static str,
    /// Lower-case substrings; any one of them matching fires the rule.
    pub keywords: &'static [&'static str],
    pub advice: &'static [&'static str],
}

impl Rule {
    #[must_use]
    pub const fn new(
        name: &'static str,
        keywords: &'static [&'static str],
        advice: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            keywords,
            advice,
        }
    }

    /// Check `lowered` (already lower-cased) against the keyword set.
    #[must_use]
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// How the accumulated advice is post-processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPolicy {
    /// Drop repeated advice, keeping the first occurrence.
    #[serde(default)]
    pub dedup: bool,
    /// Maximum number of entries returned.
    #[serde(default = "MatchPolicy::default_max_items")]
    pub max_items: usize,
}

impl MatchPolicy {
    const fn default_max_items() -> usize {
        DEFAULT_MAX_ITEMS
    }

    #[must_use]
    pub const fn dedup(max_items: usize) -> Self {
        Self {
            dedup: true,
            max_items,
        }
    }

    #[must_use]
    pub const fn keep_all(max_items: usize) -> Self {
        Self {
            dedup: false,
            max_items,
        }
    }
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self::dedup(DEFAULT_MAX_ITEMS)
    }
}

/// An ordered, data-driven rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleTable {
    pub rules: &'static [Rule],
    /// Used only when no rule matched.
    pub fallback: &'static [&'static str],
    pub policy: MatchPolicy,
}

impl RuleTable {
    #[must_use]
    pub const fn new(
        rules: &'static [Rule],
        fallback: &'static [&'static str],
        policy: MatchPolicy,
    ) -> Self {
        Self {
            rules,
            fallback,
            policy,
        }
    }

    #[must_use]
    pub const fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Names of the rules that fire for `input`, in table order.
    #[must_use]
    pub fn matching_rules(&self, input: &str) -> Vec<&'static str> {
        let lowered = input.to_lowercase();
        self.rules
            .iter()
            .filter(|rule| rule.matches(&lowered))
            .map(|rule| rule.name)
            .collect()
    }

    /// Evaluate the table against free text.
    #[must_use]
    pub fn evaluate(&self, input: &str) -> Vec<String> {
        let lowered = input.to_lowercase();

        let mut advice: Vec<&'static str> = Vec::new();
        for rule in self.rules.iter().filter(|rule| rule.matches(&lowered)) {
            debug!("Rule '{}' matched", rule.name);
            advice.extend_from_slice(rule.advice);
        }

        if advice.is_empty() {
            debug!("No rule matched, using fallback advice");
            advice.extend_from_slice(self.fallback);
        }

        if self.policy.dedup {
            let mut seen = HashSet::new();
            advice.retain(|item| seen.insert(*item));
        }

        advice
            .into_iter()
            .take(self.policy.max_items)
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRST: Rule = Rule::new("first", &["alpha", "beta"], &["one", "shared", "two"]);
    const SECOND: Rule = Rule::new("second", &["gamma"], &["shared", "three"]);
    const RULES: &[Rule] = &[FIRST, SECOND];
    const FALLBACK: &[&str] = &["generic"];

    #[test]
    fn test_rule_matches_any_keyword() {
        assert!(FIRST.matches("some beta text"));
        assert!(!FIRST.matches("nothing here"));
    }

    #[test]
    fn test_overlap_keeps_first_position() {
        let table = RuleTable::new(RULES, FALLBACK, MatchPolicy::dedup(6));
        assert_eq!(
            table.evaluate("alpha and gamma"),
            vec!["one", "shared", "two", "three"]
        );
    }

    #[test]
    fn test_keep_all_preserves_duplicates() {
        let table = RuleTable::new(RULES, FALLBACK, MatchPolicy::keep_all(6));
        assert_eq!(
            table.evaluate("alpha and gamma"),
            vec!["one", "shared", "two", "shared", "three"]
        );
    }

    #[test]
    fn test_fallback_when_nothing_matches() {
        let table = RuleTable::new(RULES, FALLBACK, MatchPolicy::default());
        assert_eq!(table.evaluate("delta"), vec!["generic"]);
    }

    #[test]
    fn test_truncation_applies_after_dedup() {
        let table = RuleTable::new(RULES, FALLBACK, MatchPolicy::dedup(3));
        assert_eq!(table.evaluate("ALPHA GAMMA"), vec!["one", "shared", "two"]);
    }

    #[test]
    fn test_matching_rules_in_table_order() {
        let table = RuleTable::new(RULES, FALLBACK, MatchPolicy::default());
        assert_eq!(table.matching_rules("gamma alpha"), vec!["first", "second"]);
        assert!(table.matching_rules("").is_empty());
    }

    #[test]
    fn test_policy_defaults_from_partial_json() {
        let Ok(policy) = serde_json::from_str::<MatchPolicy>(r#"{"dedup": false}"#) else {
            panic!("Failed to parse policy");
        };
        assert_eq!(policy, MatchPolicy::keep_all(DEFAULT_MAX_ITEMS));
    }
}
