// 👥 Gender Lookup - Registry names → reported gender + population count
//
// Built once from the gender CSV (columns Vardi, Dzimums, Skaits) and then
// only read. Lookups go exact first, then case-insensitive through a folded
// index built alongside the records.

use crate::entry::Gender;
use crate::parser::{SourceKind, SourceTable};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub const NAME_COLUMN: &str = "Vardi";
pub const GENDER_COLUMN: &str = "Dzimums";
pub const COUNT_COLUMN: &str = "Skaits";

/// Registry placeholder for "no name"
pub const NAME_PLACEHOLDER: &str = "-";

// ============================================================================
// REPORTED GENDER
// ============================================================================

/// Gender as the registry reports it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportedGender {
    Female,
    Male,
    /// Any other non-empty value, kept verbatim
    Other(String),
}

impl ReportedGender {
    /// Normalize a raw Dzimums cell; None for an empty cell
    pub fn normalize(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        let upper = raw.to_uppercase();
        Some(if upper == "SIEVIETE" {
            ReportedGender::Female
        } else if upper == "VĪRIETIS" {
            ReportedGender::Male
        } else {
            ReportedGender::Other(raw.to_string())
        })
    }

    pub fn label(&self) -> &str {
        match self {
            ReportedGender::Female => "Sieviete",
            ReportedGender::Male => "Vīrietis",
            ReportedGender::Other(value) => value.as_str(),
        }
    }

    /// Output gender; non-canonical registry values become Undefined
    pub fn to_gender(&self) -> Gender {
        match self {
            ReportedGender::Female => Gender::Female,
            ReportedGender::Male => Gender::Male,
            ReportedGender::Other(_) => Gender::Undefined,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderRecord {
    pub gender: ReportedGender,
    pub count: u64,
}

// ============================================================================
// LOOKUP
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct GenderLookup {
    records: HashMap<String, GenderRecord>,

    /// Uppercased name → first-inserted original key
    folded: HashMap<String, String>,
}

impl GenderLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from (name, record) pairs in source order
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (String, GenderRecord)>,
    {
        let mut lookup = GenderLookup::new();
        for (name, record) in records {
            lookup.insert(name, record);
        }
        lookup
    }

    /// Max-by-count: a repeated name only replaces the record on a strictly
    /// higher count
    fn insert(&mut self, name: String, record: GenderRecord) {
        match self.records.get_mut(&name) {
            Some(existing) => {
                if record.count > existing.count {
                    *existing = record;
                }
            }
            None => {
                self.folded
                    .entry(name.to_uppercase())
                    .or_insert_with(|| name.clone());
                self.records.insert(name, record);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Tier 1: exact-string match
    pub fn try_exact(&self, name: &str) -> Option<&GenderRecord> {
        self.records.get(name)
    }

    /// Tier 2: case-insensitive match; the earliest-seen spelling wins
    pub fn try_case_insensitive(&self, name: &str) -> Option<&GenderRecord> {
        self.folded
            .get(&name.to_uppercase())
            .and_then(|key| self.records.get(key))
    }

    /// Exact, then case-insensitive
    pub fn find(&self, name: &str) -> Option<&GenderRecord> {
        self.try_exact(name)
            .or_else(|| self.try_case_insensitive(name))
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Parse gender CSV text into a lookup
pub fn parse_gender_data(text: &str) -> Result<GenderLookup> {
    let table = SourceTable::parse(text, SourceKind::Gender)?;
    Ok(build_gender_lookup(&table))
}

pub fn build_gender_lookup(table: &SourceTable) -> GenderLookup {
    let records = table.rows().filter_map(|row| {
        let name = row.field(NAME_COLUMN);
        if name.is_empty() || name == NAME_PLACEHOLDER {
            return None;
        }

        let gender = ReportedGender::normalize(row.field(GENDER_COLUMN))?;
        let count = row.field(COUNT_COLUMN).parse::<u64>().unwrap_or(0);

        Some((name.to_string(), GenderRecord { gender, count }))
    });

    GenderLookup::from_records(records)
}

/// Load the gender CSV; any failure degrades to an empty lookup
pub fn load_gender_data(path: &Path) -> GenderLookup {
    match SourceTable::from_path(path, SourceKind::Gender) {
        Ok(table) => {
            let lookup = build_gender_lookup(&table);
            tracing::info!(path = %path.display(), names = lookup.len(), "Loaded gender data");
            lookup
        }
        Err(err) => {
            tracing::warn!("Gender data unavailable, using ending rules only: {:#}", err);
            GenderLookup::new()
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
