//! Symptom → precautions. General guidance, not a diagnosis.

use super::{DEFAULT_MAX_ITEMS, MatchPolicy, Rule, RuleTable};

const RULES: &[Rule] = &[
    Rule::new(
        "fever",
        &["fever", "temperature", "flu"],
        &[
            "Hydrate well",
            "Rest adequately",
            "Monitor temperature",
            "Use OTC antipyretics if advised",
        ],
    ),
    Rule::new(
        "respiratory",
        &["cough", "cold", "sore throat"],
        &[
            "Warm fluids & steam inhalation",
            "Avoid irritants/smoke",
            "Salt-water gargle",
            "Consider lozenges",
        ],
    ),
    Rule::new(
        "chest",
        &["chest pain", "pressure", "tightness", "breath"],
        &[
            "Seek urgent medical evaluation",
            "Avoid exertion",
            "Stay with someone until evaluated",
        ],
    ),
    Rule::new(
        "headache",
        &["headache", "migraine"],
        &[
            "Hydrate",
            "Dim lights & rest",
            "Limit screen time",
            "OTC analgesics only if appropriate",
        ],
    ),
    Rule::new(
        "skin",
        &["rash", "itch", "hives"],
        &[
            "Avoid scratching",
            "Mild hypoallergenic moisturizer",
            "Note triggers (new foods, detergents)",
        ],
    ),
];

const FALLBACK: &[&str] = &[
    "Hydrate and rest",
    "Monitor symptoms",
    "Avoid known triggers",
    "Consult a clinician if it persists/worsens",
];

/// The precautions table with its default policy (dedup, at most six items).
pub const PRECAUTIONS: RuleTable =
    RuleTable::new(RULES, FALLBACK, MatchPolicy::dedup(DEFAULT_MAX_ITEMS));

/// Precautions for a free-text symptom description.
#[must_use]
pub fn precautions_for(symptom: &str) -> Vec<String> {
    PRECAUTIONS.evaluate(symptom)
}
