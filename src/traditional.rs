// 📜 Traditional Names - Set of names from the traditional calendar

use crate::entry::Calendar;
use crate::parser::{SourceKind, SourceTable};
use anyhow::Result;
use std::collections::HashSet;
use std::path::Path;

pub const NAMES_COLUMN: &str = "vardadienas";

/// Uppercased names listed in the traditional calendar
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraditionalNameSet {
    names: HashSet<String>,
}

impl TraditionalNameSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name.to_uppercase())
    }

    pub fn classify(&self, name: &str) -> Calendar {
        if self.contains(name) {
            Calendar::Traditional
        } else {
            Calendar::Extended
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for TraditionalNameSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        TraditionalNameSet {
            names: iter
                .into_iter()
                .map(|name| name.as_ref().trim().to_uppercase())
                .filter(|name| !name.is_empty())
                .collect(),
        }
    }
}

/// Split a cell on commas, then on whitespace
pub fn split_name_list(cell: &str) -> impl Iterator<Item = &str> {
    cell.split(',').flat_map(str::split_whitespace)
}

pub fn parse_traditional_names(text: &str) -> Result<TraditionalNameSet> {
    let table = SourceTable::parse(text, SourceKind::Traditional)?;
    Ok(build_traditional_names(&table))
}

pub fn build_traditional_names(table: &SourceTable) -> TraditionalNameSet {
    table
        .rows()
        .flat_map(|row| split_name_list(row.field(NAMES_COLUMN)))
        .collect()
}

/// Load the traditional calendar; any failure degrades to an empty set
pub fn load_traditional_names(path: &Path) -> TraditionalNameSet {
    match SourceTable::from_path(path, SourceKind::Traditional) {
        Ok(table) => {
            let names = build_traditional_names(&table);
            tracing::info!(path = %path.display(), names = names.len(), "Loaded traditional names");
            names
        }
        Err(err) => {
            tracing::warn!(
                "Traditional names unavailable, every name is 'paplašinātais': {:#}",
                err
            );
            TraditionalNameSet::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_then_space_split() {
        let names: Vec<&str> = split_name_list("Jānis, Anna Ieva").collect();
        assert_eq!(names, vec!["Jānis", "Anna", "Ieva"]);

        let names: Vec<&str> = split_name_list(" ,, Ilze ,").collect();
        assert_eq!(names, vec!["Ilze"]);
    }

    #[test]
    fn test_set_from_cell() {
        let text = "datums,vardadienas\n24.06.,\"Jānis, Anna Ieva\"\n";
        let set = parse_traditional_names(text).unwrap();

        let expected: TraditionalNameSet = ["JĀNIS", "ANNA", "IEVA"].into_iter().collect();
        assert_eq!(set, expected);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_membership_is_case_folded() {
        let set: TraditionalNameSet = ["Jānis"].into_iter().collect();

        assert!(set.contains("jānis"));
        assert!(set.contains("JĀNIS"));
        assert_eq!(set.classify("Jānis"), Calendar::Traditional);
        assert_eq!(set.classify("Jans"), Calendar::Extended);
    }

    #[test]
    fn test_missing_column_gives_empty_set() {
        let set = parse_traditional_names("datums,names\n01.01.,Anna\n").unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let set = load_traditional_names(&dir.path().join("traditional.csv"));

        assert!(set.is_empty());
        assert_eq!(set.classify("Anna"), Calendar::Extended);
    }
}
