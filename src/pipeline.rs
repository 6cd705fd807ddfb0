// 🔄 Pipeline - Builders → Reconciler → Serializer, in one pass
//
// Auxiliary sources degrade to empty lookups; the primary CSV and the output
// write are the only fatal steps. Nothing is written unless every step
// before the write succeeded.

use crate::config::Config;
use crate::entry::NameDayEntry;
use crate::export::{sort_entries, write_json};
use crate::gender::{load_gender_data, GenderLookup};
use crate::popularity::load_popularity_sources;
use crate::reconciliation::{NameDayReconciler, ReferenceData};
use crate::report::RunReport;
use crate::traditional::{load_traditional_names, TraditionalNameSet};
use anyhow::Result;
use std::path::Path;

/// Build the three lookups; missing or broken files become empty values
pub fn load_reference_data(config: &Config) -> ReferenceData {
    let gender = config
        .gender
        .as_deref()
        .map(load_gender_data)
        .unwrap_or_else(GenderLookup::new);

    let traditional = config
        .traditional
        .as_deref()
        .map(load_traditional_names)
        .unwrap_or_else(TraditionalNameSet::new);

    let popularity = load_popularity_sources(&config.popularity);

    ReferenceData {
        gender,
        traditional,
        popularity,
    }
}

/// Reconcile and sort, without writing anything
pub fn build_entries(name_days: &Path, reference: &ReferenceData) -> Result<Vec<NameDayEntry>> {
    let reconciler = NameDayReconciler::new(reference);
    let mut entries = reconciler.load_name_days(name_days)?;
    sort_entries(&mut entries);
    Ok(entries)
}

/// Full run: load, reconcile, sort, write
pub fn run(config: &Config) -> Result<RunReport> {
    let reference = load_reference_data(config);
    let entries = build_entries(&config.name_days, &reference)?;

    write_json(&entries, &config.output)?;

    Ok(RunReport::new(&entries, &reference))
}
