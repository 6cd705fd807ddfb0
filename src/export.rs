// 💾 Serializer - Chronological sort + pretty JSON output
//
// The JSON is rendered fully in memory and persisted through a temp file in
// the target directory, so the output path either holds the complete
// document or is left untouched.

use crate::entry::NameDayEntry;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// "DD.MM" → (month, day); anything else sorts first as (0, 0)
pub fn date_sort_key(date: &str) -> (i32, i32) {
    let mut parts = date.split('.');
    let (Some(day), Some(month), None) = (parts.next(), parts.next(), parts.next()) else {
        return (0, 0);
    };

    match (day.trim().parse::<i32>(), month.trim().parse::<i32>()) {
        (Ok(day), Ok(month)) => (month, day),
        _ => (0, 0),
    }
}

/// Sort by (month, day), then by name (code-point order)
pub fn sort_entries(entries: &mut [NameDayEntry]) {
    entries.sort_by(|a, b| {
        date_sort_key(&a.date)
            .cmp(&date_sort_key(&b.date))
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Two-space indented JSON array, non-ASCII kept literal
pub fn to_json(entries: &[NameDayEntry]) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(entries).context("Failed to serialize name day entries")
}

/// Write already-sorted entries to `path` atomically
pub fn write_json(entries: &[NameDayEntry], path: &Path) -> Result<()> {
    let json = to_json(entries)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    file.write_all(&json)
        .with_context(|| format!("Failed to write output for {}", path.display()))?;
    file.persist(path)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;

    tracing::info!(path = %path.display(), entries = entries.len(), "Saved name days JSON");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{Calendar, Gender, YearCounts};

    fn entry(name: &str, date: &str) -> NameDayEntry {
        NameDayEntry {
            name: name.to_string(),
            date: date.to_string(),
            gender: Gender::Undefined,
            count: 0,
            calendar: Calendar::Extended,
            popularity: None,
        }
    }

    #[test]
    fn test_date_sort_key() {
        assert_eq!(date_sort_key("24.06"), (6, 24));
        assert_eq!(date_sort_key("01.12"), (12, 1));
        assert_eq!(date_sort_key("xx.01"), (0, 0));
        assert_eq!(date_sort_key("24.06.2024"), (0, 0));
        assert_eq!(date_sort_key("2406"), (0, 0));
        assert_eq!(date_sort_key(""), (0, 0));
    }

    #[test]
    fn test_sort_chronological_then_name() {
        let mut entries = vec![
            entry("Anna", "26.07"),
            entry("Ziedonis", "02.01"),
            entry("Ābele", "02.01"),
            entry("Aivars", "02.01"),
            entry("Nezināms", "bad"),
            entry("Jānis", "24.06"),
            entry("Elza", "01.12"),
        ];

        sort_entries(&mut entries);

        let order: Vec<(&str, &str)> = entries
            .iter()
            .map(|e| (e.date.as_str(), e.name.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("bad", "Nezināms"),
                ("02.01", "Aivars"),
                ("02.01", "Ziedonis"),
                // 'Ā' sorts after ASCII letters in code-point order
                ("02.01", "Ābele"),
                ("24.06", "Jānis"),
                ("26.07", "Anna"),
                ("01.12", "Elza"),
            ]
        );
    }

    #[test]
    fn test_json_format() {
        let mut years = YearCounts::new();
        years.insert("2020".to_string(), 3);
        let mut anna = entry("Anna", "26.07");
        anna.popularity = Some(years);

        let json = String::from_utf8(to_json(&[entry("Jānis", "24.06"), anna]).unwrap()).unwrap();

        assert!(json.starts_with("[\n  {\n    \"name\": \"Jānis\",\n    \"date\": \"24.06\","));
        assert!(json.contains("\"kalendārs\": \"paplašinātais\""));
        assert!(json.contains("\"gender\": \"Nedefinēts\""));
        assert!(json.contains("\"popularity\": {\n      \"2020\": 3\n    }"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_write_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs").join("name_days_processed.json");

        let mut entries = vec![
            entry("Jānis", "24.06"),
            entry("Anna", "26.07"),
            entry("Kaut kas", "??"),
            entry("Ieva", "24.06"),
        ];
        sort_entries(&mut entries);
        write_json(&entries, &path).unwrap();

        let parsed: Vec<NameDayEntry> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

        assert_eq!(parsed.len(), 4);
        assert_eq!(parsed, entries);
        assert_eq!(date_sort_key(&parsed[0].date), (0, 0));
        for pair in parsed.windows(2) {
            let a = (date_sort_key(&pair[0].date), &pair[0].name);
            let b = (date_sort_key(&pair[1].date), &pair[1].name);
            assert!(a <= b);
        }
    }

    #[test]
    fn test_unwritable_output_is_error() {
        let dir = tempfile::tempdir().unwrap();
        // A file where the parent directory should be
        let blocker = dir.path().join("docs");
        fs::write(&blocker, "not a directory").unwrap();

        let result = write_json(&[entry("Anna", "26.07")], &blocker.join("out.json"));
        assert!(result.is_err());
    }
}
