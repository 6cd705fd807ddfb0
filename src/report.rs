// 📊 Run Report - What a pipeline run produced

use crate::entry::{Calendar, Gender, NameDayEntry};
use crate::reconciliation::ReferenceData;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenderStats {
    pub male: usize,
    pub female: usize,
    pub undefined: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarStats {
    pub traditional: usize,
    pub extended: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub total_entries: usize,
    pub unique_dates: usize,
    pub unique_names: usize,
    pub genders: GenderStats,
    pub calendars: CalendarStats,

    // Sizes of the reference data used
    pub gender_names: usize,
    pub traditional_names: usize,
    pub popularity_names: usize,
    pub popularity_years: usize,
}

impl RunReport {
    pub fn new(entries: &[NameDayEntry], reference: &ReferenceData) -> Self {
        let mut genders = GenderStats::default();
        let mut calendars = CalendarStats::default();

        for entry in entries {
            match entry.gender {
                Gender::Male => genders.male += 1,
                Gender::Female => genders.female += 1,
                Gender::Undefined => genders.undefined += 1,
            }
            match entry.calendar {
                Calendar::Traditional => calendars.traditional += 1,
                Calendar::Extended => calendars.extended += 1,
            }
        }

        RunReport {
            total_entries: entries.len(),
            unique_dates: entries.iter().map(|e| e.date.as_str()).collect::<HashSet<_>>().len(),
            unique_names: entries.iter().map(|e| e.name.as_str()).collect::<HashSet<_>>().len(),
            genders,
            calendars,
            gender_names: reference.gender.len(),
            traditional_names: reference.traditional.len(),
            popularity_names: reference.popularity.len(),
            popularity_years: reference.popularity.years().len(),
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{} entries ({} dates, {} names); {}: {}, {}: {}, {}: {}; {}: {}, {}: {}",
            self.total_entries,
            self.unique_dates,
            self.unique_names,
            Gender::Male,
            self.genders.male,
            Gender::Female,
            self.genders.female,
            Gender::Undefined,
            self.genders.undefined,
            Calendar::Traditional,
            self.calendars.traditional,
            Calendar::Extended,
            self.calendars.extended,
        )
    }
}
