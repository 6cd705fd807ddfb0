// 🏗️ Source Reader - Shared CSV plumbing for the four input files
// Files are read whole, BOM-stripped, then parsed with csv::ReaderBuilder

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

// ============================================================================
// SOURCE KIND
// ============================================================================

/// SourceKind - Which of the input datasets a file belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    NameDays,
    Gender,
    Traditional,
    Popularity,
}

impl SourceKind {
    /// Human-readable name for log lines and error context
    pub fn name(&self) -> &str {
        match self {
            SourceKind::NameDays => "name days",
            SourceKind::Gender => "gender data",
            SourceKind::Traditional => "traditional name days",
            SourceKind::Popularity => "popularity data",
        }
    }

    /// Field delimiter used by the publisher of this dataset
    pub fn delimiter(&self) -> u8 {
        match self {
            SourceKind::Popularity => b'\t',
            SourceKind::NameDays | SourceKind::Gender | SourceKind::Traditional => b',',
        }
    }
}

// ============================================================================
// READING
// ============================================================================

/// Drop a leading UTF-8 byte-order mark, if any
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

/// Read a whole source file as UTF-8 text; the BOM is left for `SourceTable::parse`
pub fn read_source(path: &Path, kind: SourceKind) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read {} file: {}", kind.name(), path.display()))
}

// ============================================================================
// TABLE
// ============================================================================

/// A parsed CSV with named columns
///
/// Rows may be shorter or longer than the header; missing cells read as "".
#[derive(Debug, Clone)]
pub struct SourceTable {
    headers: Vec<String>,
    columns: HashMap<String, usize>,
    rows: Vec<StringRecord>,
}

impl SourceTable {
    pub fn parse(text: &str, kind: SourceKind) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(kind.delimiter())
            .from_reader(strip_bom(text).as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .with_context(|| format!("Failed to read {} header", kind.name()))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        // Later duplicates shadow earlier ones
        let columns = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.clone(), i))
            .collect();

        let mut rows = Vec::new();
        for (line_num, result) in reader.records().enumerate() {
            let record = result.with_context(|| {
                format!("Failed to parse {} line {}", kind.name(), line_num + 2)
            })?;
            rows.push(record);
        }

        Ok(SourceTable {
            headers,
            columns,
            rows,
        })
    }

    /// Read and parse a source file in one step
    pub fn from_path(path: &Path, kind: SourceKind) -> Result<Self> {
        let text = read_source(path, kind)?;
        Self::parse(&text, kind)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(move |record| Row {
            table: self,
            record,
        })
    }
}

/// A borrowed data row with access by header name
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a SourceTable,
    record: &'a StringRecord,
}

impl<'a> Row<'a> {
    /// Trimmed cell under `column`, "" when the column or cell is missing
    pub fn field(&self, column: &str) -> &'a str {
        self.table
            .columns
            .get(column)
            .and_then(|&i| self.record.get(i))
            .map(str::trim)
            .unwrap_or("")
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_bom() {
        assert_eq!(strip_bom("\u{feff}datums,vardadienas"), "datums,vardadienas");
        assert_eq!(strip_bom("datums"), "datums");
    }

    #[test]
    fn test_parse_comma_table_by_name() {
        let text = "\u{feff}datums,vardadienas\n01.01.,Laimnesis Solvita\n";
        let table = SourceTable::parse(text, SourceKind::NameDays).unwrap();

        assert_eq!(table.headers(), &["datums", "vardadienas"]);
        assert_eq!(table.len(), 1);

        let row = table.rows().next().unwrap();
        assert_eq!(row.field("datums"), "01.01.");
        assert_eq!(row.field("vardadienas"), "Laimnesis Solvita");
        assert_eq!(row.field("missing"), "");
    }

    #[test]
    fn test_parse_tab_table() {
        let text = "vārds\t2019\t2020\nAnna\t10\t\n";
        let table = SourceTable::parse(text, SourceKind::Popularity).unwrap();

        assert_eq!(table.headers(), &["vārds", "2019", "2020"]);
        let row = table.rows().next().unwrap();
        assert_eq!(row.field("2019"), "10");
        assert_eq!(row.field("2020"), "");
    }

    #[test]
    fn test_short_rows_are_tolerated() {
        let text = "Vardi,Dzimums,Skaits\nAnna,Sieviete\n";
        let table = SourceTable::parse(text, SourceKind::Gender).unwrap();

        let row = table.rows().next().unwrap();
        assert_eq!(row.field("Dzimums"), "Sieviete");
        assert_eq!(row.field("Skaits"), "");
    }

    #[test]
    fn test_quoted_cells_keep_commas() {
        let text = "datums,vardadienas\n02.01.,\"Indulis, Ivo\"\n";
        let table = SourceTable::parse(text, SourceKind::Traditional).unwrap();

        let row = table.rows().next().unwrap();
        assert_eq!(row.field("vardadienas"), "Indulis, Ivo");
    }

    #[test]
    fn test_read_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_source(&dir.path().join("nope.csv"), SourceKind::Gender).unwrap_err();
        assert!(err.to_string().contains("gender data"));
    }

    #[test]
    fn test_from_path_strips_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bom.csv");
        fs::write(&path, "\u{feff}Vardi,Dzimums,Skaits\nAnna,Sieviete,150\n").unwrap();

        let table = SourceTable::from_path(&path, SourceKind::Gender).unwrap();
        assert_eq!(table.headers(), &["Vardi", "Dzimums", "Skaits"]);
        assert_eq!(table.rows().next().unwrap().field("Vardi"), "Anna");
    }
}
