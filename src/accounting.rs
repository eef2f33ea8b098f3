// 💰 Pledge Accounting - totals, goal tracking, and month-over-month deltas

use crate::entities::{Pledge, PledgeAction, PledgeChange, Project};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Total charged across all pledges (base + shipping + tax each).
pub fn total_charged(pledges: &[Pledge]) -> f64 {
    pledges.iter().map(Pledge::charged).sum()
}

// ============================================================================
// GOAL TRACKING
// ============================================================================

/// State of a project right after one pledge change was applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PledgeStep {
    pub action: PledgeAction,
    pub delta: f64,

    /// Pledged total including this change
    pub running_total: f64,

    /// Whether `running_total >= goal`
    pub goal_reached: bool,
}

/// Replay `changes` on top of `project.pledged`, one step per change.
///
/// A project can reach its goal and later fall back under it when a backer
/// cancels or lowers a pledge.
pub fn pledge_timeline(project: &Project, changes: &[PledgeChange]) -> Vec<PledgeStep> {
    let mut running_total = project.pledged;

    let steps: Vec<PledgeStep> = changes
        .iter()
        .map(|change| {
            running_total += change.delta;
            let goal_reached = project.reaches_goal(running_total);

            trace!(
                project_id = project.id,
                action = %change.action,
                delta = change.delta,
                running_total,
                goal_reached,
                "applied pledge change"
            );

            PledgeStep {
                action: change.action,
                delta: change.delta,
                running_total,
                goal_reached,
            }
        })
        .collect();

    debug!(project_id = project.id, changes = steps.len(), "built pledge timeline");

    steps
}

/// Whether the project had reached its goal after each change, in order.
pub fn goal_reached_after_each_change(project: &Project, changes: &[PledgeChange]) -> Vec<bool> {
    pledge_timeline(project, changes)
        .into_iter()
        .map(|step| step.goal_reached)
        .collect()
}

// ============================================================================
// MONTHLY COMPARISON
// ============================================================================

/// Difference between two monthly figures, `after - before`.
///
/// Integer differences saturate at the type's bounds (unsigned ones floor at
/// zero); floats subtract normally.
pub trait MonthlyDelta: Copy {
    fn delta(before: Self, after: Self) -> Self;
}

macro_rules! saturating_delta {
    ($($t:ty),*) => {
        $(
            impl MonthlyDelta for $t {
                fn delta(before: Self, after: Self) -> Self {
                    after.saturating_sub(before)
                }
            }
        )*
    };
}

saturating_delta!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl MonthlyDelta for f32 {
    fn delta(before: Self, after: Self) -> Self {
        after - before
    }
}

impl MonthlyDelta for f64 {
    fn delta(before: Self, after: Self) -> Self {
        after - before
    }
}

/// Change per month from `year1` to `year2` (`year2[i] - year1[i]`).
///
/// Only months present in both years are compared; the longer input is
/// truncated to the shorter one's length.
pub fn compare_monthly_stats<T: MonthlyDelta>(year1: &[T], year2: &[T]) -> Vec<T> {
    year1
        .iter()
        .zip(year2.iter())
        .map(|(before, after)| T::delta(*before, *after))
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use proptest::prelude::*;

    fn create_test_changes() -> Vec<PledgeChange> {
        vec![
            PledgeChange::new(PledgeAction::Adjust, -50.0),
            PledgeChange::new(PledgeAction::Cancel, -25.0),
            PledgeChange::new(PledgeAction::New, 25.0),
            PledgeChange::new(PledgeAction::New, 10.0),
            PledgeChange::new(PledgeAction::Cancel, -25.0),
            PledgeChange::new(PledgeAction::New, 25.0),
            PledgeChange::new(PledgeAction::New, 25.0),
            PledgeChange::new(PledgeAction::Cancel, -25.0),
            PledgeChange::new(PledgeAction::New, 25.0),
            PledgeChange::new(PledgeAction::Adjust, 15.0),
        ]
    }

    #[test]
    fn test_total_charged() {
        let pledges = vec![
            Pledge::new(901, 180, 25.0, 5.0, 2.0),
            Pledge::new(7, 180, 25.0, 5.0, 2.0),
            Pledge::new(335, 181, 95.0, 20.0, 15.0),
            Pledge::new(866, 182, 5.0, 0.0, 0.0),
            Pledge::new(717, 180, 25.0, 5.0, 2.0),
        ];

        assert_eq!(total_charged(&pledges), 231.0);
    }

    #[test]
    fn test_total_charged_empty() {
        assert_eq!(total_charged(&[]), 0.0);
    }

    #[test]
    fn test_goal_reached_after_each_change() {
        let project = fixtures::skull_graphic_tee();
        let changes = create_test_changes();

        assert_eq!(
            goal_reached_after_each_change(&project, &changes),
            vec![false, false, false, false, false, false, true, false, true, true]
        );
    }

    #[test]
    fn test_goal_reached_no_changes() {
        let project = fixtures::skull_graphic_tee();
        assert!(goal_reached_after_each_change(&project, &[]).is_empty());
    }

    #[test]
    fn test_timeline_echoes_actions() {
        let project = fixtures::skull_graphic_tee();
        let changes = create_test_changes();

        let timeline = pledge_timeline(&project, &changes);

        assert_eq!(timeline.len(), changes.len());
        assert_eq!(timeline[0].action, PledgeAction::Adjust);
        assert_eq!(timeline[0].running_total, 75.0);
        assert_eq!(timeline[6].running_total, 110.0);
        assert!(timeline[6].goal_reached);
        assert_eq!(timeline[9].action, PledgeAction::Adjust);
        assert_eq!(timeline[9].running_total, 125.0);
    }

    #[test]
    fn test_goal_exactly_met_counts() {
        let project = Project::new(1, "Exact", "art", 100.0, 90.0, 3);
        let changes = vec![PledgeChange::new(PledgeAction::New, 10.0)];

        assert_eq!(goal_reached_after_each_change(&project, &changes), vec![true]);
    }

    #[test]
    fn test_compare_full_year() {
        let stats_2014 = [35, 48, 45, 60, 39, 43, 29, 34, 44, 47, 55, 37];
        let stats_2015 = [63, 58, 41, 39, 59, 58, 69, 58, 37, 66, 32, 51];

        assert_eq!(
            compare_monthly_stats(&stats_2014, &stats_2015),
            vec![28, 10, -4, -21, 20, 15, 40, 24, -7, 19, -23, 14]
        );
    }

    #[test]
    fn test_compare_truncates_to_shorter() {
        assert_eq!(compare_monthly_stats(&[5, 7], &[9, 8, 3]), vec![4, 1]);
        assert_eq!(compare_monthly_stats(&[5, 7, 9], &[8, 3]), vec![3, -4]);
        assert!(compare_monthly_stats::<i64>(&[], &[1, 2]).is_empty());
    }

    #[test]
    fn test_compare_fractional_values() {
        assert_eq!(compare_monthly_stats(&[1.5, 2.0], &[2.0, 1.25]), vec![0.5, -0.75]);
    }

    #[test]
    fn test_compare_saturates_at_integer_bounds() {
        assert_eq!(compare_monthly_stats(&[i64::MIN], &[1i64]), vec![i64::MAX]);
        assert_eq!(compare_monthly_stats(&[1i64], &[i64::MIN]), vec![i64::MIN]);
        assert_eq!(compare_monthly_stats(&[9u32, 3], &[4u32, 8]), vec![0, 5]);
    }

    proptest! {
        #[test]
        fn monthly_delta_length_is_min(
            year1 in prop::collection::vec(-1000i64..1000, 0..12),
            year2 in prop::collection::vec(-1000i64..1000, 0..12)
        ) {
            let deltas = compare_monthly_stats(&year1, &year2);
            prop_assert_eq!(deltas.len(), year1.len().min(year2.len()));
            for (i, d) in deltas.iter().enumerate() {
                prop_assert_eq!(*d, year2[i] - year1[i]);
            }
        }
    }
}
