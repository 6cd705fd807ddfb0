// Name Days - Core Library
// Merges the Latvian name-day list with gender, popularity and
// traditional-calendar data into one sorted JSON document

pub mod config;
pub mod entry;
pub mod export;
pub mod gender;
pub mod parser;
pub mod pipeline;
pub mod popularity;
pub mod reconciliation;
pub mod report;
pub mod rules;
pub mod traditional;

// Re-export commonly used types
pub use config::Config;
pub use entry::{Calendar, Gender, NameDayEntry, YearCounts};
pub use export::{date_sort_key, sort_entries, to_json, write_json};
pub use gender::{
    load_gender_data, parse_gender_data, GenderLookup, GenderRecord, ReportedGender,
};
pub use parser::{read_source, strip_bom, Row, SourceKind, SourceTable};
pub use pipeline::{build_entries, load_reference_data, run};
pub use popularity::{
    load_popularity_data, load_popularity_sources, parse_popularity_data, PopularityLookup,
    PopularityRecord,
};
pub use reconciliation::{normalize_date, NameDayReconciler, ReferenceData};
pub use report::RunReport;
pub use rules::{clean_name, EndingRule, RuleEngine};
pub use traditional::{load_traditional_names, parse_traditional_names, TraditionalNameSet};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
