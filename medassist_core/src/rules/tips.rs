use super::{DEFAULT_MAX_ITEMS, MatchPolicy, Rule, RuleTable};

const RULES: &[Rule] = &[
    Rule::new(
        "sleep",
        &["sleep"],
        &[
            "Aim 7–9 hours nightly",
            "Keep a consistent bedtime/wake time",
            "Limit caffeine after noon",
            "No screens 60 min before bed",
        ],
    ),
    Rule::new(
        "weight",
        &["weight", "bmi", "obesity"],
        &[
            "Prioritize whole foods & protein",
            "250–500 kcal daily deficit for gradual loss",
            "Walk 8–10k steps/day",
            "2–3 strength sessions/week",
        ],
    ),
    Rule::new(
        "diabetes",
        &["diabetes", "glucose", "a1c"],
        &[
            "Track fasting & post-meal readings",
            "Plate method: half veg, quarter lean protein, quarter whole grains",
            "Daily activity ≥30 mins",
        ],
    ),
    Rule::new(
        "cholesterol",
        &["cholesterol", "lipid"],
        &[
            "Increase soluble fiber (oats, legumes)",
            "Cut trans fats; prefer unsaturated fats",
            "Discuss statins if LDL remains high",
        ],
    ),
    Rule::new(
        "blood_pressure",
        &["bp", "blood pressure", "hypertension"],
        &[
            "Reduce sodium (<2g/day)",
            "DASH-style diet",
            "Regular aerobic activity",
            "Limit alcohol; manage stress",
        ],
    ),
];

const FALLBACK: &[&str] = &[
    "Stay active daily",
    "Balanced diet (more plants, fewer ultra-processed foods)",
    "Sleep 7–9 hours",
    "Don’t ignore persistent symptoms",
];

/// Wellness tips table. Duplicates are kept unless the policy is overridden.
pub const TIPS: RuleTable =
    RuleTable::new(RULES, FALLBACK, MatchPolicy::keep_all(DEFAULT_MAX_ITEMS));

/// Rule-based tips for a wellness topic, without the web summary.
#[must_use]
pub fn tips_rules_for(topic: &str) -> Vec<String> {
    TIPS.evaluate(topic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sleep_quality_starts_with_hours() {
        let tips = tips_rules_for("sleep quality");
        assert_eq!(tips[0], "Aim 7–9 hours nightly");
        assert_eq!(tips.len(), 4);
    }

    #[test]
    fn test_topic_is_case_insensitive() {
        assert_eq!(tips_rules_for("High BLOOD PRESSURE")[0], "Reduce sodium (<2g/day)");
    }

    #[test]
    fn test_general_wellness_fallback() {
        assert_eq!(tips_rules_for("running shoes"), FALLBACK);
    }

    #[test]
    fn test_multiple_topics_truncated() {
        let tips = tips_rules_for("weight and diabetes");
        assert_eq!(tips.len(), 6);
        assert_eq!(tips[3], "2–3 strength sessions/week");
        assert_eq!(tips[4], "Track fasting & post-meal readings");
    }
}
