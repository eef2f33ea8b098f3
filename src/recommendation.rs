// 🧭 Recommendation Engine - same-category suggestions and the backer feed
//
// Both lists are ordered by backers, most first. The sort is stable so
// projects with equal backers keep their input order.

use crate::entities::Project;
use std::collections::HashSet;
use tracing::debug;

/// Other projects in `project`'s category, most backed first.
///
/// `candidates` may contain `project` itself; it is never returned.
pub fn same_category_recommendations<'a>(
    project: &Project,
    candidates: &'a [Project],
) -> Vec<&'a Project> {
    let mut matches: Vec<&Project> = candidates
        .iter()
        .filter(|other| other.category == project.category && other.id != project.id)
        .collect();

    sort_by_backers_desc(&mut matches);
    matches
}

/// Recommendations for a backer based on the projects they already backed.
///
/// Returns every project in `all_projects` sharing a category with a backed
/// project, excluding the backed projects themselves, most backed first.
/// Categories and backed ids are held in sets so `all_projects` is scanned once.
pub fn recommendation_feed<'a>(
    backed_projects: &[Project],
    all_projects: &'a [Project],
) -> Vec<&'a Project> {
    let categories: HashSet<&str> = backed_projects
        .iter()
        .map(|p| p.category.as_str())
        .collect();
    let backed_ids: HashSet<u64> = backed_projects.iter().map(|p| p.id).collect();

    let mut feed: Vec<&Project> = all_projects
        .iter()
        .filter(|p| categories.contains(p.category.as_str()) && !backed_ids.contains(&p.id))
        .collect();

    sort_by_backers_desc(&mut feed);

    debug!(
        backed = backed_projects.len(),
        categories = categories.len(),
        recommended = feed.len(),
        "built recommendation feed"
    );

    feed
}

fn sort_by_backers_desc(projects: &mut [&Project]) {
    projects.sort_by(|a, b| b.backers.cmp(&a.backers));
}

// ============================================================================
// TESTS
// ============================================================================
