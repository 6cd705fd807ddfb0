// 📈 Popularity Lookup - Newborn counts per name per year
//
// Tab-separated sources: one "vārds" column plus one column per year.
// Records are keyed by uppercased name and the first-seen record always wins,
// inside one file and across merged files alike.

use crate::entry::YearCounts;
use crate::parser::{SourceKind, SourceTable};
use anyhow::Result;
use std::collections::HashMap;
use std::path::Path;

pub const NAME_COLUMN: &str = "vārds";

/// A header is a year column when it is made only of digits
pub fn is_year_label(header: &str) -> bool {
    !header.is_empty() && header.chars().all(|c| c.is_ascii_digit())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopularityRecord {
    /// Spelling as first seen in the source
    pub original_name: String,
    pub years: YearCounts,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopularityLookup {
    records: HashMap<String, PopularityRecord>,

    /// Year columns in header order
    years: Vec<String>,
}

impl PopularityLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn years(&self) -> &[String] {
        &self.years
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Popularity is attached to entries only when this holds
    pub fn is_available(&self) -> bool {
        !self.records.is_empty() && !self.years.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&PopularityRecord> {
        self.records.get(&name.to_uppercase())
    }

    fn insert_first(&mut self, key: String, record: PopularityRecord) {
        self.records.entry(key).or_insert(record);
    }

    /// Merge a later source into this one. Existing names are never
    /// overwritten; the year list is taken from `other` only if ours is empty.
    pub fn merge(mut self, other: PopularityLookup) -> Self {
        for (key, record) in other.records {
            self.insert_first(key, record);
        }
        if self.years.is_empty() {
            self.years = other.years;
        }
        self
    }

    /// Merge sources in priority order (first = highest)
    pub fn merge_all<I>(sources: I) -> Self
    where
        I: IntoIterator<Item = PopularityLookup>,
    {
        sources
            .into_iter()
            .fold(PopularityLookup::new(), PopularityLookup::merge)
    }

    /// Year map for a name: its record, or every known year at 0.
    /// None when no popularity data is available at all.
    pub fn resolve(&self, name: &str) -> Option<YearCounts> {
        if !self.is_available() {
            return None;
        }

        Some(match self.get(name) {
            Some(record) => record.years.clone(),
            None => self.years.iter().map(|year| (year.clone(), 0)).collect(),
        })
    }
}

pub fn parse_popularity_data(text: &str) -> Result<PopularityLookup> {
    let table = SourceTable::parse(text, SourceKind::Popularity)?;
    Ok(build_popularity_lookup(&table))
}

pub fn build_popularity_lookup(table: &SourceTable) -> PopularityLookup {
    let years: Vec<String> = table
        .headers()
        .iter()
        .filter(|h| is_year_label(h))
        .cloned()
        .collect();

    let mut lookup = PopularityLookup {
        records: HashMap::new(),
        years,
    };

    for row in table.rows() {
        let name = row.field(NAME_COLUMN);
        if name.is_empty() {
            continue;
        }

        let counts: YearCounts = lookup
            .years
            .iter()
            .map(|year| (year.clone(), row.field(year).parse::<u64>().unwrap_or(0)))
            .collect();

        lookup.insert_first(
            name.to_uppercase(),
            PopularityRecord {
                original_name: name.to_string(),
                years: counts,
            },
        );
    }

    lookup
}

/// Load one popularity source; any failure degrades to an empty lookup
pub fn load_popularity_data(path: &Path) -> PopularityLookup {
    match SourceTable::from_path(path, SourceKind::Popularity) {
        Ok(table) => {
            let lookup = build_popularity_lookup(&table);
            tracing::info!(
                path = %path.display(),
                names = lookup.len(),
                years = lookup.years().len(),
                "Loaded popularity data"
            );
            lookup
        }
        Err(err) => {
            tracing::warn!("Popularity data unavailable: {:#}", err);
            PopularityLookup::new()
        }
    }
}

/// Load and merge every source, earlier paths taking precedence
pub fn load_popularity_sources<P: AsRef<Path>>(paths: &[P]) -> PopularityLookup {
    let sources = paths.iter().map(|p| load_popularity_data(p.as_ref()));
    let merged = PopularityLookup::merge_all(sources);

    if !merged.is_empty() {
        tracing::info!(
            names = merged.len(),
            years = merged.years().len(),
            "Merged popularity sources"
        );
    }
    merged
}
