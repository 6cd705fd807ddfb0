// 🏷️ Name Rules - Token cleaning + gender by name ending
// Rules as data: the fallback used when the gender lookup has no answer

use crate::entry::Gender;

// ============================================================================
// NAME CLEANING
// ============================================================================

/// Punctuation that decorates tokens in the published name-day list
pub const STRIPPED_CHARS: [char; 4] = ['.', '(', ')', ':'];

/// Latgalian marker appended to some names; removed exact-case only
pub const LATGALIAN_MARKER: &str = "LTG";

/// Clean a raw name token. An empty result means "drop the token".
///
/// The marker is removed until none is left, so `clean_name` is idempotent
/// even for inputs like "LLTGTG".
pub fn clean_name(raw: &str) -> String {
    let mut cleaned: String = raw.chars().filter(|c| !STRIPPED_CHARS.contains(c)).collect();

    while cleaned.contains(LATGALIAN_MARKER) {
        cleaned = cleaned.replace(LATGALIAN_MARKER, "");
    }

    cleaned.trim().to_string()
}

// ============================================================================
// ENDING RULE
// ============================================================================

#[derive(Debug, Clone)]
pub struct EndingRule {
    /// Rule ID for tracking
    pub id: &'static str,

    /// Lowercase endings; any one of them matches
    pub endings: &'static [&'static str],

    /// Gender assigned on match
    pub gender: Gender,
}

impl EndingRule {
    /// Check if the (already lowercased) name ends with one of the endings
    pub fn matches(&self, name_lower: &str) -> bool {
        self.endings.iter().any(|ending| name_lower.ends_with(ending))
    }
}

/// Latvian given-name endings, checked in this order
const LATVIAN_RULES: [EndingRule; 2] = [
    EndingRule {
        id: "feminine",
        endings: &["a", "e"],
        gender: Gender::Female,
    },
    EndingRule {
        id: "masculine",
        endings: &["s", "š", "o"],
        gender: Gender::Male,
    },
];

// ============================================================================
// RULE ENGINE
// ============================================================================

#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: Vec<EndingRule>,
}

impl RuleEngine {
    /// -a/-e feminine, then -s/-š/-o masculine
    pub fn latvian() -> Self {
        RuleEngine {
            rules: LATVIAN_RULES.to_vec(),
        }
    }

    /// First matching rule wins; no match → Undefined
    pub fn classify(&self, name: &str) -> Gender {
        self.try_classify(name).unwrap_or(Gender::Undefined)
    }

    pub fn try_classify(&self, name: &str) -> Option<Gender> {
        let name_lower = name.trim().to_lowercase();
        if name_lower.is_empty() {
            return None;
        }

        self.rules
            .iter()
            .find(|rule| rule.matches(&name_lower))
            .map(|rule| rule.gender)
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::latvian()
    }
}

// ============================================================================
// TESTS
// ============================================================================
