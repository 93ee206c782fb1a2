use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};

/// planner policy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// hard stop for the amortization loop, guarantees termination
    pub month_ceiling: u32,
    /// default minimum payment as a share of balance when the account
    /// has no real minimum on file
    pub min_payment_rate: Rate,
    /// absolute floor for the defaulted minimum payment
    pub min_payment_floor: Money,
    /// goal solver convergence threshold
    pub solver_epsilon: Money,
    /// goal solver bisection cap
    pub solver_max_iterations: u32,
    /// goal solver upper-bound doubling cap
    pub solver_max_expansions: u32,
}

impl PlannerConfig {
    /// default minimum payment for a balance: max(rate share, floor)
    pub fn default_minimum_payment(&self, balance: Money) -> Money {
        balance.apply_rate(self.min_payment_rate).max(self.min_payment_floor)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            // 50 years of months
            month_ceiling: 600,
            min_payment_rate: Rate::from_decimal(dec!(0.02)),
            min_payment_floor: Money::from_major(25),
            solver_epsilon: Money::CENT,
            solver_max_iterations: 100,
            solver_max_expansions: 32,
        }
    }
}
