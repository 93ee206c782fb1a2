use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::card::CreditCard;
use crate::decimal::{Money, Rate};
use crate::types::CardId;

/// portfolio-level totals, recomputed on demand and never persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CreditSummary {
    pub total_balance: Money,
    pub total_minimum_payments: Money,
    /// simple mean APR across cards
    pub average_apr: Rate,
    /// balance-weighted mean APR; zero when the total balance is zero
    pub weighted_average_apr: Rate,
    pub total_credit_limit: Money,
    /// total balance over total known credit limit; zero when no limits
    /// are on file
    pub utilization: Rate,
    pub cards_missing_apr: Vec<CardId>,
    pub cards_missing_min_payment: Vec<CardId>,
}

impl CreditSummary {
    pub fn has_missing_data(&self) -> bool {
        !self.cards_missing_apr.is_empty() || !self.cards_missing_min_payment.is_empty()
    }
}

/// reduce a card list to its dashboard summary
pub fn summarize(cards: &[CreditCard]) -> CreditSummary {
    if cards.is_empty() {
        return CreditSummary::default();
    }

    let total_balance: Money = cards.iter().map(|c| c.balance).sum();
    let total_minimum_payments: Money = cards.iter().map(|c| c.minimum_payment).sum();
    let total_credit_limit: Money = cards.iter().filter_map(|c| c.credit_limit).sum();

    let apr_sum: Decimal = cards.iter().map(|c| c.apr.as_decimal()).sum();
    let average_apr = Rate::from_decimal(apr_sum / Decimal::from(cards.len()));

    let weighted_average_apr = if total_balance.is_zero() {
        Rate::ZERO
    } else {
        let weighted_sum: Decimal = cards
            .iter()
            .map(|c| c.balance.as_decimal() * c.apr.as_decimal())
            .sum();
        Rate::from_decimal(weighted_sum / total_balance.as_decimal())
    };

    let utilization = if total_credit_limit.is_zero() {
        Rate::ZERO
    } else {
        Rate::from_decimal(total_balance.as_decimal() / total_credit_limit.as_decimal())
    };

    CreditSummary {
        total_balance,
        total_minimum_payments,
        average_apr,
        weighted_average_apr,
        total_credit_limit,
        utilization,
        cards_missing_apr: cards
            .iter()
            .filter(|c| !c.apr_provided)
            .map(|c| c.id)
            .collect(),
        cards_missing_min_payment: cards
            .iter()
            .filter(|c| !c.minimum_payment_provided)
            .map(|c| c.id)
            .collect(),
    }
}
