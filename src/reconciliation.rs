// ⚖️ Name-Day Reconciler - Primary CSV × lookups → enriched entries
//
// For every (date, name) in the name-day list:
//   gender     = exact lookup → case-insensitive lookup → ending rules
//   count      = exact lookup → case-insensitive lookup → 0
//   popularity = record years → all-zero years → omitted (no data at all)
//   calendar   = traditional set membership
//
// Each tier is its own Option-returning step so the order stays auditable.

use crate::entry::{Calendar, Gender, NameDayEntry, YearCounts};
use crate::gender::GenderLookup;
use crate::parser::{SourceKind, SourceTable};
use crate::popularity::PopularityLookup;
use crate::rules::{clean_name, RuleEngine};
use crate::traditional::TraditionalNameSet;
use anyhow::{Context, Result};
use std::path::Path;

pub const DATE_COLUMN: &str = "datums";
pub const NAMES_COLUMN: &str = "vardadienas";

/// "01.01." → "01.01"; only one trailing period is removed
pub fn normalize_date(raw: &str) -> &str {
    let raw = raw.trim();
    raw.strip_suffix('.').unwrap_or(raw)
}

// ============================================================================
// REFERENCE DATA
// ============================================================================

/// The three auxiliary lookups, built before reconciliation and only read
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub gender: GenderLookup,
    pub traditional: TraditionalNameSet,
    pub popularity: PopularityLookup,
}

// ============================================================================
// RECONCILER
// ============================================================================

pub struct NameDayReconciler<'a> {
    reference: &'a ReferenceData,
    rules: RuleEngine,
}

impl<'a> NameDayReconciler<'a> {
    pub fn new(reference: &'a ReferenceData) -> Self {
        NameDayReconciler {
            reference,
            rules: RuleEngine::latvian(),
        }
    }

    // ------------------------------------------------------------------------
    // Gender / count tiers
    // ------------------------------------------------------------------------

    pub fn try_gender_exact(&self, name: &str) -> Option<Gender> {
        self.reference
            .gender
            .try_exact(name)
            .map(|record| record.gender.to_gender())
    }

    pub fn try_gender_case_insensitive(&self, name: &str) -> Option<Gender> {
        self.reference
            .gender
            .try_case_insensitive(name)
            .map(|record| record.gender.to_gender())
    }

    pub fn try_gender_by_rules(&self, name: &str) -> Option<Gender> {
        self.rules.try_classify(name)
    }

    pub fn resolve_gender(&self, name: &str) -> Gender {
        self.try_gender_exact(name)
            .or_else(|| self.try_gender_case_insensitive(name))
            .or_else(|| self.try_gender_by_rules(name))
            .unwrap_or(Gender::Undefined)
    }

    /// Counts never come from the ending rules
    pub fn resolve_count(&self, name: &str) -> u64 {
        self.reference
            .gender
            .find(name)
            .map(|record| record.count)
            .unwrap_or(0)
    }

    // ------------------------------------------------------------------------
    // Popularity / calendar
    // ------------------------------------------------------------------------

    pub fn resolve_popularity(&self, name: &str) -> Option<YearCounts> {
        self.reference.popularity.resolve(name)
    }

    pub fn classify_calendar(&self, name: &str) -> Calendar {
        self.reference.traditional.classify(name)
    }

    // ------------------------------------------------------------------------
    // Rows
    // ------------------------------------------------------------------------

    /// Build the entry for one already-cleaned name
    pub fn enrich(&self, name: &str, date: &str) -> NameDayEntry {
        NameDayEntry {
            name: name.to_string(),
            date: date.to_string(),
            gender: self.resolve_gender(name),
            count: self.resolve_count(name),
            calendar: self.classify_calendar(name),
            popularity: self.resolve_popularity(name),
        }
    }

    /// One entry per name token that survives cleaning.
    /// A row with an empty date or name list yields nothing.
    pub fn reconcile_row(&self, date: &str, names: &str) -> Vec<NameDayEntry> {
        let (date, names) = (date.trim(), names.trim());
        if date.is_empty() || names.is_empty() {
            return Vec::new();
        }

        let date = normalize_date(date);

        names
            .split_whitespace()
            .map(clean_name)
            .filter(|name| !name.is_empty())
            .map(|name| self.enrich(&name, date))
            .collect()
    }

    pub fn reconcile(&self, table: &SourceTable) -> Vec<NameDayEntry> {
        if !table.has_column(DATE_COLUMN) || !table.has_column(NAMES_COLUMN) {
            tracing::warn!(
                headers = ?table.headers(),
                "Name days file lacks '{}' or '{}' column",
                DATE_COLUMN,
                NAMES_COLUMN
            );
        }

        table
            .rows()
            .flat_map(|row| self.reconcile_row(row.field(DATE_COLUMN), row.field(NAMES_COLUMN)))
            .collect()
    }

    pub fn parse_name_days(&self, text: &str) -> Result<Vec<NameDayEntry>> {
        let table = SourceTable::parse(text, SourceKind::NameDays)?;
        Ok(self.reconcile(&table))
    }

    /// The primary file is required: any failure here is fatal
    pub fn load_name_days(&self, path: &Path) -> Result<Vec<NameDayEntry>> {
        let table = SourceTable::from_path(path, SourceKind::NameDays)
            .with_context(|| format!("Cannot process name days from {}", path.display()))?;

        let entries = self.reconcile(&table);
        tracing::info!(
            path = %path.display(),
            rows = table.len(),
            entries = entries.len(),
            "Reconciled name days"
        );
        Ok(entries)
    }
}

// ============================================================================
// TESTS
// ============================================================================
