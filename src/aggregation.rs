// 📊 Project Aggregation - category filtering and per-category statistics
//
// Stats are accumulated in a single pass keyed by category, means are
// computed once at the end, and the output is ordered by category name.

use crate::entities::{CategoryStats, Project};
use crate::radix::radix_sort_unsigned;
use std::collections::HashMap;
use tracing::debug;

/// Ids of every project in `category`, ascending.
pub fn select_ids_of_category(projects: &[Project], category: &str) -> Vec<u64> {
    let ids: Vec<u64> = projects
        .iter()
        .filter(|p| p.category == category)
        .map(|p| p.id)
        .collect();

    debug!(category, matched = ids.len(), "selected project ids");

    radix_sort_unsigned(&ids)
}

// ============================================================================
// CATEGORY STATS
// ============================================================================

#[derive(Debug, Default)]
struct CategoryTotals {
    backers: u64,
    pledged: f64,
    projects: usize,
}

/// Aggregate per-category totals and means, sorted by category name.
///
/// Names are compared by codepoint, not locale.
pub fn category_stats_by_name(projects: &[Project]) -> Vec<CategoryStats> {
    let mut totals: HashMap<&str, CategoryTotals> = HashMap::new();

    for project in projects {
        let entry = totals.entry(project.category.as_str()).or_default();
        entry.backers = entry.backers.saturating_add(project.backers);
        entry.pledged += project.pledged;
        entry.projects += 1;
    }

    let mut stats: Vec<CategoryStats> = totals
        .into_iter()
        .map(|(category, t)| {
            CategoryStats::from_totals(category.to_string(), t.backers, t.pledged, t.projects)
        })
        .collect();

    stats.sort_by(|a, b| a.category().cmp(b.category()));

    debug!(
        projects = projects.len(),
        categories = stats.len(),
        "aggregated category stats"
    );

    stats
}

// ============================================================================
// TESTS
// ============================================================================
