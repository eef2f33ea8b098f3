// 📊 Category Stats - aggregate totals and means for one category
//
// Only produced by `aggregation::category_stats_by_name` (or deserialized); a
// category with zero projects never yields an entry, so `total_projects >= 1`
// holds. Fields are read through accessors so callers cannot build one.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    category: String,

    /// floor(total_backers / total_projects)
    mean_backers: u64,

    /// floor(total_pledged / total_projects)
    mean_pledged: i64,

    total_backers: u64,

    total_pledged: f64,

    total_projects: usize,
}

impl CategoryStats {
    /// Build from running totals. `total_projects` must be non-zero.
    pub(crate) fn from_totals(
        category: String,
        total_backers: u64,
        total_pledged: f64,
        total_projects: usize,
    ) -> Self {
        debug_assert!(total_projects > 0, "category stats need at least one project");

        CategoryStats {
            category,
            mean_backers: total_backers / total_projects as u64,
            mean_pledged: (total_pledged / total_projects as f64).floor() as i64,
            total_backers,
            total_pledged,
            total_projects,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn mean_backers(&self) -> u64 {
        self.mean_backers
    }

    pub fn mean_pledged(&self) -> i64 {
        self.mean_pledged
    }

    pub fn total_backers(&self) -> u64 {
        self.total_backers
    }

    pub fn total_pledged(&self) -> f64 {
        self.total_pledged
    }

    pub fn total_projects(&self) -> usize {
        self.total_projects
    }
}
