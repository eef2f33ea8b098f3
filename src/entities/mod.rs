// Entity Models - crowdfunding records consumed by the analytics functions
//
// Every record is a plain value: caller-constructed, caller-owned, and never
// retained by the library beyond a single call.

pub mod project;
pub mod pledge;
pub mod category_stats;

pub use project::Project;
pub use pledge::{Pledge, PledgeAction, PledgeChange};
pub use category_stats::CategoryStats;
