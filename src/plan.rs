use serde::{Deserialize, Serialize};

use crate::card::CreditCard;
use crate::config::PlannerConfig;
use crate::decimal::Money;
use crate::errors::Result;
use crate::simulator::PayoffSimulator;
use crate::strategy::Strategy;
use crate::types::PayoffResult;

/// an accelerated plan against the minimums-only baseline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanComparison {
    pub baseline: PayoffResult,
    pub accelerated: PayoffResult,
    /// interest avoided by paying extra; zero when the baseline never
    /// converges, since its interest total is open-ended
    pub interest_saved: Money,
    pub months_saved: u32,
}

/// simulate both the minimums-only baseline and the accelerated plan
pub fn compare_plans(
    cards: &[CreditCard],
    strategy: Strategy,
    extra_payment: Money,
    config: &PlannerConfig,
) -> Result<PlanComparison> {
    let simulator = PayoffSimulator::new(config.clone());

    let baseline = simulator.simulate(cards, strategy, Money::ZERO)?;
    let accelerated = simulator.simulate(cards, strategy, extra_payment)?;

    let (interest_saved, months_saved) = if baseline.is_payoff_possible {
        (
            (baseline.total_interest_paid - accelerated.total_interest_paid)
                .max(Money::ZERO),
            baseline.total_months.saturating_sub(accelerated.total_months),
        )
    } else {
        (Money::ZERO, 0)
    };

    Ok(PlanComparison {
        baseline,
        accelerated,
        interest_saved,
        months_saved,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Rate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn card(id: u128, balance: Decimal, apr: Decimal, minimum: Decimal) -> CreditCard {
        CreditCard {
            id: Uuid::from_u128(id),
            name: format!("Card {id}"),
            balance: Money::from_decimal(balance),
            apr: Rate::from_apr_percentage(apr),
            apr_provided: true,
            minimum_payment: Money::from_decimal(minimum),
            minimum_payment_provided: true,
            currency: "USD".to_string(),
            credit_limit: None,
            payment_due_date: None,
        }
    }

    #[test]
    fn test_extra_payment_saves_interest_and_months() {
        let config = PlannerConfig::default();
        let cards = vec![
            card(1, dec!(2500), dec!(24.99), dec!(60)),
            card(2, dec!(900), dec!(17.5), dec!(25)),
        ];

        let comparison =
            compare_plans(&cards, Strategy::Avalanche, Money::from_major(200), &config)
                .unwrap();

        assert!(comparison.baseline.is_payoff_possible);
        assert!(comparison.accelerated.is_payoff_possible);
        assert!(comparison.interest_saved.is_positive());
        assert!(comparison.months_saved > 0);
    }

    #[test]
    fn test_zero_extra_is_a_wash() {
        let config = PlannerConfig::default();
        let cards = vec![card(1, dec!(1000), dec!(20), dec!(50))];

        let comparison =
            compare_plans(&cards, Strategy::Snowball, Money::ZERO, &config).unwrap();

        assert_eq!(comparison.baseline, comparison.accelerated);
        assert_eq!(comparison.interest_saved, Money::ZERO);
        assert_eq!(comparison.months_saved, 0);
    }

    #[test]
    fn test_diverging_baseline_reports_no_savings_figure() {
        let config = PlannerConfig::default();
        // minimums alone never cover the interest
        let cards = vec![card(1, dec!(1000), dec!(36), dec!(20))];

        let comparison =
            compare_plans(&cards, Strategy::Avalanche, Money::from_major(100), &config)
                .unwrap();

        assert!(!comparison.baseline.is_payoff_possible);
        assert!(comparison.baseline.negative_amortization);
        assert!(comparison.accelerated.is_payoff_possible);
        assert_eq!(comparison.interest_saved, Money::ZERO);
        assert_eq!(comparison.months_saved, 0);
    }
}
