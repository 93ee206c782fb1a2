use rust_decimal_macros::dec;

use crate::card::CreditCard;
use crate::config::PlannerConfig;
use crate::decimal::Money;
use crate::errors::{PlannerError, Result};
use crate::simulator::PayoffSimulator;
use crate::strategy::Strategy;

/// searches for the smallest extra monthly payment that hits a target
/// payoff horizon, by repeated simulation
pub struct GoalSolver {
    simulator: PayoffSimulator,
}

impl GoalSolver {
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            simulator: PayoffSimulator::new(config),
        }
    }

    /// minimal non-negative extra payment with total_months <= target
    ///
    /// bisects between zero and an upper bound grown from the total
    /// balance until it is feasible. an infeasible target returns the
    /// largest bound tested rather than an error; callers detect that
    /// case by re-simulating with the returned value.
    pub fn solve_for_extra(
        &self,
        cards: &[CreditCard],
        strategy: Strategy,
        target_months: u32,
    ) -> Result<Money> {
        if target_months == 0 {
            return Err(PlannerError::InvalidTargetMonths { months: 0 });
        }

        if self.meets_target(cards, strategy, Money::ZERO, target_months)? {
            return Ok(Money::ZERO);
        }

        let config = self.simulator.config();
        let total_balance: Money = cards.iter().map(|c| c.balance).sum();

        // the whole balance as extra clears everything in one month
        // unless month-1 interest intervenes, so grow until feasible
        let mut upper = total_balance.max(Money::CENT);
        let mut expansions = 0;
        while !self.meets_target(cards, strategy, upper, target_months)? {
            if expansions >= config.solver_max_expansions {
                return Ok(upper.ceil_to_cents());
            }
            expansions += 1;
            upper = upper * dec!(2);
        }

        let mut lower = Money::ZERO;
        let mut iterations = 0;
        while upper - lower > config.solver_epsilon
            && iterations < config.solver_max_iterations
        {
            iterations += 1;
            let mid = (lower + upper) / dec!(2);
            if self.meets_target(cards, strategy, mid, target_months)? {
                upper = mid;
            } else {
                lower = mid;
            }
        }

        Ok(upper.ceil_to_cents())
    }

    fn meets_target(
        &self,
        cards: &[CreditCard],
        strategy: Strategy,
        extra: Money,
        target_months: u32,
    ) -> Result<bool> {
        let result = self.simulator.simulate(cards, strategy, extra)?;
        Ok(result.is_payoff_possible && result.total_months <= target_months)
    }
}

impl Default for GoalSolver {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}
