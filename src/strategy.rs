use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::types::CardId;

/// repayment strategy, a closed variant dispatching to one comparator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// highest APR first
    Avalanche,
    /// smallest balance first
    Snowball,
}

/// per-card view the comparator ranks: the card's rate, its current
/// working balance, and its id for a deterministic final tie-break
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardRank {
    pub id: CardId,
    pub apr: Rate,
    pub balance: Money,
}

impl Strategy {
    /// total order over candidate cards; the extra payment targets the
    /// first card under this order
    ///
    /// avalanche: higher apr, then larger balance, then smaller id.
    /// snowball: smaller balance, then higher apr, then smaller id.
    pub fn compare(&self, a: &CardRank, b: &CardRank) -> Ordering {
        match self {
            Strategy::Avalanche => b
                .apr
                .cmp(&a.apr)
                .then(b.balance.cmp(&a.balance))
                .then(a.id.cmp(&b.id)),
            Strategy::Snowball => a
                .balance
                .cmp(&b.balance)
                .then(b.apr.cmp(&a.apr))
                .then(a.id.cmp(&b.id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn rank(apr: rust_decimal::Decimal, balance: i64) -> CardRank {
        CardRank {
            id: Uuid::new_v4(),
            apr: Rate::from_apr_percentage(apr),
            balance: Money::from_major(balance),
        }
    }

    #[test]
    fn test_avalanche_prefers_higher_apr() {
        let low = rank(dec!(10), 5000);
        let high = rank(dec!(25), 500);

        assert_eq!(Strategy::Avalanche.compare(&high, &low), Ordering::Less);
    }

    #[test]
    fn test_avalanche_breaks_apr_tie_by_balance() {
        let small = rank(dec!(20), 500);
        let large = rank(dec!(20), 2000);

        assert_eq!(Strategy::Avalanche.compare(&large, &small), Ordering::Less);
    }

    #[test]
    fn test_snowball_prefers_smaller_balance() {
        let small = rank(dec!(10), 500);
        let large = rank(dec!(25), 2000);

        assert_eq!(Strategy::Snowball.compare(&small, &large), Ordering::Less);
    }

    #[test]
    fn test_snowball_breaks_balance_tie_by_apr() {
        let low = rank(dec!(10), 1000);
        let high = rank(dec!(25), 1000);

        assert_eq!(Strategy::Snowball.compare(&high, &low), Ordering::Less);
    }

    #[test]
    fn test_id_tie_break_is_deterministic() {
        let mut a = rank(dec!(20), 1000);
        let mut b = rank(dec!(20), 1000);
        a.id = Uuid::from_u128(1);
        b.id = Uuid::from_u128(2);

        assert_eq!(Strategy::Avalanche.compare(&a, &b), Ordering::Less);
        assert_eq!(Strategy::Snowball.compare(&a, &b), Ordering::Less);
    }
}
