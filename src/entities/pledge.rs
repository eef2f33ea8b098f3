// 💵 Pledge Entities - backer commitments and changes to them

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// PLEDGE
// ============================================================================

/// A single backer's commitment to a reward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pledge {
    /// The user that pledged
    pub user_id: u64,

    /// The reward pledged for
    pub reward_id: u64,

    /// Cost of the reward, excluding shipping and tax
    pub base_amount: f64,

    pub shipping: f64,

    pub tax: f64,
}

impl Pledge {
    pub fn new(user_id: u64, reward_id: u64, base_amount: f64, shipping: f64, tax: f64) -> Self {
        Pledge {
            user_id,
            reward_id,
            base_amount,
            shipping,
            tax,
        }
    }

    /// Amount the backer was charged: base + shipping + tax
    pub fn charged(&self) -> f64 {
        self.base_amount + self.shipping + self.tax
    }
}

// ============================================================================
// PLEDGE CHANGE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PledgeAction {
    /// Backer made a new pledge
    New,

    /// Backer raised or lowered an existing pledge
    Adjust,

    /// Backer withdrew a pledge
    Cancel,
}

impl PledgeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            PledgeAction::New => "new",
            PledgeAction::Adjust => "adjust",
            PledgeAction::Cancel => "cancel",
        }
    }
}

impl fmt::Display for PledgeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A signed change to a project's pledged total.
///
/// A new pledge of 25, raised by 10, then cancelled:
/// `(New, 25)`, `(Adjust, 10)`, `(Cancel, -35)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PledgeChange {
    pub action: PledgeAction,

    /// Difference in pledged value when the change is applied
    pub delta: f64,
}

impl PledgeChange {
    pub fn new(action: PledgeAction, delta: f64) -> Self {
        PledgeChange { action, delta }
    }
}
