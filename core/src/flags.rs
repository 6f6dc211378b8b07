use serde::{Deserialize, Serialize};

use crate::CellCount;

/// Flags the player still holds, bounded by the round's budget.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagInventory {
    remaining: CellCount,
    budget: CellCount,
}

impl FlagInventory {
    pub const fn new(budget: CellCount) -> Self {
        Self {
            remaining: budget,
            budget,
        }
    }

    pub const fn remaining(&self) -> CellCount {
        self.remaining
    }

    pub const fn budget(&self) -> CellCount {
        self.budget
    }

    /// Flags currently out on the board.
    pub const fn placed(&self) -> CellCount {
        self.budget - self.remaining
    }

    pub const fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Takes a flag out of the inventory, `false` if none are left.
    pub fn take(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }

    /// Returns a flag to the inventory.
    pub fn refund(&mut self) {
        if self.remaining < self.budget {
            self.remaining += 1;
        } else {
            log::warn!("Flag refund ignored, inventory already holds all {} flags", self.budget);
        }
    }
}
