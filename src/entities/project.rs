// 🎯 Project Entity - a fundraising campaign

use serde::{Deserialize, Serialize};

/// A fundraising campaign.
///
/// Identity is `id`, unique within any collection passed to the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Stable identity
    pub id: u64,

    /// Display name (e.g., "Kung Fury")
    pub name: String,

    /// Free-form grouping label (e.g., "art", "film")
    pub category: String,

    /// Amount the project set as its goal
    pub goal: f64,

    /// Total amount raised so far
    pub pledged: f64,

    /// Total number of backers
    pub backers: u64,
}

impl Project {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        category: impl Into<String>,
        goal: f64,
        pledged: f64,
        backers: u64,
    ) -> Self {
        Project {
            id,
            name: name.into(),
            category: category.into(),
            goal,
            pledged,
            backers,
        }
    }

    /// Check if a pledged total meets or exceeds this project's goal
    pub fn reaches_goal(&self, total: f64) -> bool {
        total >= self.goal
    }
}
