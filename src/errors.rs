use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("extra payment must be non-negative: {amount}")]
    NegativeExtraPayment {
        amount: Money,
    },

    #[error("target horizon must be at least one month: {months}")]
    InvalidTargetMonths {
        months: u32,
    },
}

pub type Result<T> = std::result::Result<T, PlannerError>;
