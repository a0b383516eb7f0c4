//! Sync status report derived from the component registry
//!
//! `SyncReport` is an owned snapshot of both component lists. All
//! statistics are computed accessors so the numbers cannot drift out
//! of sync with the lists they describe.

use serde::{Deserialize, Serialize};

use crate::registry;

/// Snapshot of database sync status across all tracked form components
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Components already wired for database sync, in declared order
    pub updated: Vec<String>,
    /// Components still waiting for database sync, in declared order
    pub remaining: Vec<String>,
}

impl SyncReport {
    /// Build the report from the compiled-in component registry.
    #[must_use]
    pub fn from_registry() -> Self {
        Self {
            updated: to_owned_list(registry::UPDATED_FORMS),
            remaining: to_owned_list(registry::REMAINING_FORMS),
        }
    }

    /// Returns the number of components already updated
    #[must_use]
    pub fn updated_count(&self) -> usize {
        self.updated.len()
    }

    /// Returns the number of components still to update
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    /// Returns the total number of tracked components
    #[must_use]
    pub fn total(&self) -> usize {
        self.updated.len() + self.remaining.len()
    }

    /// Migration progress as a percentage of all tracked components.
    ///
    /// An empty report has a progress of `0.0`.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        {
            self.updated_count() as f64 / total as f64 * 100.0
        }
    }

    /// Raw progress fraction, e.g. `"12/17"`.
    #[must_use]
    pub fn progress_fraction(&self) -> String {
        format!("{}/{}", self.updated_count(), self.total())
    }

    /// Build the JSON-facing view of the report, with the derived
    /// statistics materialized alongside the lists.
    #[must_use]
    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            total: self.total(),
            updated_count: self.updated_count(),
            remaining_count: self.remaining_count(),
            progress_percent: (self.progress_percent() * 10.0).round() / 10.0,
            progress_fraction: self.progress_fraction(),
            updated: self.updated.clone(),
            remaining: self.remaining.clone(),
        }
    }
}

/// JSON-facing view of a [`SyncReport`]
///
/// The percentage is rounded to one decimal so the JSON surface agrees
/// with the text report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Total number of tracked components
    pub total: usize,
    /// Number of components already updated
    pub updated_count: usize,
    /// Number of components still to update
    pub remaining_count: usize,
    /// Progress percentage, rounded to one decimal
    pub progress_percent: f64,
    /// Raw progress fraction, e.g. `"12/17"`
    pub progress_fraction: String,
    /// Components already wired for database sync, in declared order
    pub updated: Vec<String>,
    /// Components still waiting for database sync, in declared order
    pub remaining: Vec<String>,
}

fn to_owned_list(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_of_three() -> SyncReport {
        SyncReport {
            updated: vec!["A.tsx".to_string(), "B.tsx".to_string()],
            remaining: vec!["C.tsx".to_string()],
        }
    }

    #[test]
    fn test_counts_from_registry() {
        let report = SyncReport::from_registry();
        assert_eq!(report.updated_count(), 12);
        assert_eq!(report.remaining_count(), 5);
        assert_eq!(report.total(), 17);
    }

    #[test]
    fn test_registry_order_preserved() {
        let report = SyncReport::from_registry();
        assert_eq!(report.updated[0], "PersonalInformationForm.tsx");
        assert_eq!(report.remaining[0], "FinalWishesLegacyPlanningForm.tsx");
    }

    #[test]
    fn test_progress_percent_literal_data() {
        let report = SyncReport::from_registry();
        // 12/17 renders as 70.6% at one decimal
        assert_eq!(format!("{:.1}", report.progress_percent()), "70.6");
    }

    #[test]
    fn test_progress_fraction_literal_data() {
        let report = SyncReport::from_registry();
        assert_eq!(report.progress_fraction(), "12/17");
    }

    #[test]
    fn test_progress_percent_partial() {
        let report = two_of_three();
        assert!((report.progress_percent() - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_report_has_zero_progress() {
        let report = SyncReport {
            updated: vec![],
            remaining: vec![],
        };
        assert_eq!(report.total(), 0);
        assert!((report.progress_percent() - 0.0).abs() < f64::EPSILON);
        assert_eq!(report.progress_fraction(), "0/0");
    }

    #[test]
    fn test_summary_materializes_statistics() {
        let summary = two_of_three().summary();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.updated_count, 2);
        assert_eq!(summary.remaining_count, 1);
        assert!((summary.progress_percent - 66.7).abs() < f64::EPSILON);
        assert_eq!(summary.progress_fraction, "2/3");
    }

    #[test]
    fn test_summary_round_trip() {
        let summary = SyncReport::from_registry().summary();
        let json = serde_json::to_string(&summary).unwrap();
        let recovered: ReportSummary = serde_json::from_str(&json).unwrap();

        assert_eq!(recovered, summary);
        assert_eq!(recovered.updated.len(), 12);
        assert_eq!(recovered.remaining.len(), 5);
    }

    #[test]
    fn test_summary_percent_rounded_to_one_decimal() {
        let summary = SyncReport::from_registry().summary();
        assert!((summary.progress_percent - 70.6).abs() < f64::EPSILON);
    }
}
