// ⚙️ Run Configuration - Where to read inputs and write the JSON
//
// Defaults follow the repository layout (data/ in, docs/ out). Each path can
// be overridden from the environment (or a .env file loaded by the binary);
// setting an optional source to "" turns it off.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

pub const NAME_DAYS_VAR: &str = "NAME_DAYS_CSV";
pub const GENDER_VAR: &str = "GENDER_CSV";
pub const TRADITIONAL_VAR: &str = "TRADITIONAL_CSV";
pub const POPULARITY_VAR: &str = "POPULARITY_CSV";
pub const OUTPUT_VAR: &str = "OUTPUT_JSON";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Primary name-day list (required)
    pub name_days: PathBuf,

    pub gender: Option<PathBuf>,
    pub traditional: Option<PathBuf>,

    /// Earlier sources take precedence when names repeat
    pub popularity: Vec<PathBuf>,

    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            name_days: PathBuf::from("data/name_days.csv"),
            gender: Some(PathBuf::from("data/gender_data.csv")),
            traditional: Some(PathBuf::from("data/traditional_name_days.csv")),
            popularity: vec![
                PathBuf::from("data/0_0_1920_2020_all_data.csv"),
                PathBuf::from("data/1_0_1920_2020_all_data.csv"),
            ],
            output: PathBuf::from("docs/name_days_processed.json"),
        }
    }
}

impl Config {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var_os(key))
    }

    /// Defaults overridden by whatever `var` returns
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let mut config = Config::default();

        if let Some(path) = var(NAME_DAYS_VAR).filter(|v| !v.is_empty()) {
            config.name_days = PathBuf::from(path);
        }
        if let Some(path) = var(GENDER_VAR) {
            config.gender = optional_path(path);
        }
        if let Some(path) = var(TRADITIONAL_VAR) {
            config.traditional = optional_path(path);
        }
        if let Some(paths) = var(POPULARITY_VAR) {
            config.popularity = env::split_paths(&paths)
                .filter(|p| !p.as_os_str().is_empty())
                .collect();
        }
        if let Some(path) = var(OUTPUT_VAR).filter(|v| !v.is_empty()) {
            config.output = PathBuf::from(path);
        }

        config
    }
}

fn optional_path(value: OsString) -> Option<PathBuf> {
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}
