use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::account::AccountRecord;
use crate::config::PlannerConfig;
use crate::decimal::{Money, Rate};
use crate::types::CardId;

/// normalized credit card, immutable for the duration of a simulation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCard {
    pub id: CardId,
    pub name: String,
    /// outstanding amount owed, never negative
    pub balance: Money,
    /// annual percentage rate; zero when unknown
    pub apr: Rate,
    /// true when apr reflects real user data rather than a fallback
    pub apr_provided: bool,
    /// required monthly payment floor
    pub minimum_payment: Money,
    /// same provenance semantics as apr_provided
    pub minimum_payment_provided: bool,
    pub currency: String,
    pub credit_limit: Option<Money>,
    pub payment_due_date: Option<NaiveDate>,
}

impl CreditCard {
    pub fn is_paid_off(&self) -> bool {
        self.balance.is_zero()
    }

    /// ready for planning: both rate and minimum are real user data
    pub fn has_planning_data(&self) -> bool {
        self.apr_provided && self.minimum_payment_provided
    }
}

/// normalize raw account rows into credit cards for one currency
///
/// balance precedence: explicit due balance, then credit limit minus
/// available balance, then the raw balance field, then zero. absent or
/// non-positive apr/minimum fields become policy defaults with their
/// provenance flag cleared.
pub fn build_cards(
    records: &[AccountRecord],
    currency: &str,
    config: &PlannerConfig,
) -> Vec<CreditCard> {
    records
        .iter()
        .filter(|r| r.is_credit() && r.currency == currency)
        .map(|record| build_card(record, config))
        .collect()
}

fn build_card(record: &AccountRecord, config: &PlannerConfig) -> CreditCard {
    let balance = resolve_balance(record);

    let (apr, apr_provided) = match record.apr {
        Some(apr) if apr.is_sign_positive() && !apr.is_zero() => {
            (Rate::from_apr_percentage(apr), true)
        }
        _ => (Rate::ZERO, false),
    };

    let (minimum_payment, minimum_payment_provided) = match record.minimum_payment {
        Some(min) if min.is_sign_positive() && !min.is_zero() => {
            (Money::from_decimal(min), true)
        }
        _ => (config.default_minimum_payment(balance), false),
    };

    CreditCard {
        id: record.id,
        name: record.name.clone(),
        balance,
        apr,
        apr_provided,
        minimum_payment,
        minimum_payment_provided,
        currency: record.currency.clone(),
        credit_limit: record.credit_limit.map(Money::from_decimal),
        payment_due_date: record.payment_due_date,
    }
}

fn resolve_balance(record: &AccountRecord) -> Money {
    let owed = if let Some(due) = record.due_balance {
        due
    } else if let (Some(limit), Some(available)) =
        (record.credit_limit, record.available_balance)
    {
        limit - available
    } else {
        record.balance
    };

    Money::from_decimal(owed).max(Money::ZERO)
}
