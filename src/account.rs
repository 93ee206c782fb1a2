use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// account category as stored by the account store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Credit,
    Depository,
    Loan,
    #[serde(other)]
    Other,
}

/// raw account row as delivered by the account store; numeric fields the
/// user has not filled in arrive absent or null, never as errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: Uuid,
    pub name: String,
    pub account_type: AccountType,
    pub currency: String,
    pub balance: Decimal,
    #[serde(default)]
    pub credit_limit: Option<Decimal>,
    #[serde(default)]
    pub available_balance: Option<Decimal>,
    #[serde(default)]
    pub due_balance: Option<Decimal>,
    #[serde(default)]
    pub apr: Option<Decimal>,
    #[serde(default)]
    pub minimum_payment: Option<Decimal>,
    #[serde(default)]
    pub payment_due_date: Option<NaiveDate>,
}

impl AccountRecord {
    pub fn is_credit(&self) -> bool {
        self.account_type == AccountType::Credit
    }
}
