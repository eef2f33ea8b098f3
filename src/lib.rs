// Crowdfund Analytics - Core Library
// Pure, in-memory transformations over crowdfunding records

pub mod entities;
pub mod error;
pub mod radix;          // Integer radix sort
pub mod aggregation;    // Category filtering and stats
pub mod accounting;     // Pledge totals, goal tracking, monthly deltas
pub mod recommendation; // Same-category suggestions and backer feed
pub mod activity;       // Run-length encoded activity feed
pub mod combinators;
pub mod scaling;
pub mod records;        // CSV/JSON record loading with validation

#[cfg(test)]
mod fixtures;

// Re-export commonly used types
pub use entities::{CategoryStats, Pledge, PledgeAction, PledgeChange, Project};
pub use error::RecordError;
pub use radix::{radix_sort, radix_sort_unsigned};
pub use aggregation::{category_stats_by_name, select_ids_of_category};
pub use accounting::{
    compare_monthly_stats, goal_reached_after_each_change, pledge_timeline, total_charged,
    MonthlyDelta, PledgeStep,
};
pub use recommendation::{recommendation_feed, same_category_recommendations};
pub use activity::{run_length_decode, run_length_encode};
pub use combinators::flip;
pub use scaling::ScaleFilter;
pub use records::{
    pledge_changes_from_csv, pledges_from_csv, projects_from_csv, projects_from_json,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
