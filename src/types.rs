use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Money;

/// unique identifier for a card, stable reference to the source account
pub type CardId = Uuid;

/// one card's activity within one simulated month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPayment {
    pub card_id: CardId,
    pub card_name: String,
    /// amount applied toward this card this month, principal plus interest,
    /// capped at the post-interest balance
    pub payment: Money,
    /// interest charged this month before payment
    pub interest_accrued: Money,
    /// balance after this month's payment, floored at zero
    pub remaining_balance: Money,
}

/// one simulated month across the portfolio
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSnapshot {
    /// 1-based month number
    pub month: u32,
    /// one entry per card that was still carrying a balance at month start
    pub payments: Vec<MonthlyPayment>,
    pub total_payment: Money,
    pub total_remaining: Money,
}

/// outcome of one payoff simulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffResult {
    /// false when the simulation hit the month ceiling with debt remaining
    pub is_payoff_possible: bool,
    /// true when month-1 payments fall short of month-1 interest, so the
    /// debt grows indefinitely under these inputs
    pub negative_amortization: bool,
    /// smallest extra payment that would cover month-1 interest, rounded
    /// up to cents; only set when negative_amortization is true
    pub minimum_extra_required: Option<Money>,
    /// months until every balance reached zero; meaningful only when
    /// is_payoff_possible is true
    pub total_months: u32,
    pub total_interest_paid: Money,
    pub total_paid: Money,
    /// card ids in the order their balances first reached zero
    pub payoff_order: Vec<CardId>,
    pub timeline: Vec<MonthSnapshot>,
}

impl PayoffResult {
    /// project the calendar payoff date from a start date
    pub fn payoff_date_from(&self, start: NaiveDate) -> Option<NaiveDate> {
        if !self.is_payoff_possible {
            return None;
        }
        start.checked_add_months(chrono::Months::new(self.total_months))
    }
}
