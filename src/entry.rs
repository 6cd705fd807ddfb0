// 📅 Name-Day Entry - Output record of the pipeline
// One entry per (date, name) pair, fully populated at creation

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Year label ("1920", "2020", ...) → newborn count, in source column order
pub type YearCounts = IndexMap<String, u64>;

// ============================================================================
// GENDER
// ============================================================================

/// Gender attached to an output entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "Vīrietis")]
    Male,

    #[serde(rename = "Sieviete")]
    Female,

    /// Neither the lookup nor the ending rules could decide
    #[serde(rename = "Nedefinēts")]
    Undefined,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Undefined];

    /// Latvian label, exactly as written to JSON
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Vīrietis",
            Gender::Female => "Sieviete",
            Gender::Undefined => "Nedefinēts",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// CALENDAR
// ============================================================================

/// Which name-day calendar a name belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Calendar {
    /// Listed in the traditional name-day calendar
    #[serde(rename = "tradicionālais")]
    Traditional,

    /// Only present in the extended list
    #[serde(rename = "paplašinātais")]
    Extended,
}

impl Calendar {
    pub const ALL: [Calendar; 2] = [Calendar::Traditional, Calendar::Extended];

    pub fn label(&self) -> &'static str {
        match self {
            Calendar::Traditional => "tradicionālais",
            Calendar::Extended => "paplašinātais",
        }
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// ENTRY
// ============================================================================

/// Field order here is the field order of the JSON objects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameDayEntry {
    pub name: String,

    /// "DD.MM", trailing period already stripped
    pub date: String,

    pub gender: Gender,

    /// Population count from the gender data, 0 when the name is unknown there
    pub count: u64,

    #[serde(rename = "kalendārs")]
    pub calendar: Calendar,

    /// Only present when popularity data was supplied
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popularity: Option<YearCounts>,
}
