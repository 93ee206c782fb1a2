use crate::card::CreditCard;
use crate::config::PlannerConfig;
use crate::decimal::Money;
use crate::errors::{PlannerError, Result};
use crate::strategy::{CardRank, Strategy};
use crate::types::{MonthSnapshot, MonthlyPayment, PayoffResult};

/// monthly reducing-balance amortization engine
pub struct PayoffSimulator {
    config: PlannerConfig,
}

/// per-card mutable state local to one simulation run
struct WorkingCard<'a> {
    card: &'a CreditCard,
    balance: Money,
    paid_off_recorded: bool,
}

impl<'a> WorkingCard<'a> {
    fn rank(&self) -> CardRank {
        CardRank {
            id: self.card.id,
            apr: self.card.apr,
            balance: self.balance,
        }
    }
}

impl PayoffSimulator {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// project month-by-month balances until payoff or the month ceiling
    ///
    /// inputs are never mutated; every call recomputes from scratch. cards
    /// that start at zero balance head the payoff order (in strategy
    /// order) and never appear in the timeline; each month's snapshot
    /// covers exactly the cards that carried a balance into that month.
    pub fn simulate(
        &self,
        cards: &[CreditCard],
        strategy: Strategy,
        extra_payment: Money,
    ) -> Result<PayoffResult> {
        if extra_payment.is_negative() {
            return Err(PlannerError::NegativeExtraPayment {
                amount: extra_payment,
            });
        }

        let mut payoff_order = Vec::with_capacity(cards.len());
        let mut prepaid: Vec<&CreditCard> =
            cards.iter().filter(|c| c.is_paid_off()).collect();
        prepaid.sort_by(|a, b| {
            strategy.compare(
                &CardRank { id: a.id, apr: a.apr, balance: Money::ZERO },
                &CardRank { id: b.id, apr: b.apr, balance: Money::ZERO },
            )
        });
        payoff_order.extend(prepaid.iter().map(|c| c.id));

        let mut working: Vec<WorkingCard> = cards
            .iter()
            .filter(|c| !c.is_paid_off())
            .map(|card| WorkingCard {
                card,
                balance: card.balance,
                paid_off_recorded: false,
            })
            .collect();

        let mut timeline = Vec::new();
        let mut total_interest_paid = Money::ZERO;
        let mut total_paid = Money::ZERO;
        let mut negative_amortization = false;
        let mut minimum_extra_required = None;
        let mut month = 0u32;

        while working.iter().any(|w| w.balance.is_positive()) {
            if month >= self.config.month_ceiling {
                break;
            }
            month += 1;

            let active: Vec<usize> = (0..working.len())
                .filter(|&i| working[i].balance.is_positive())
                .collect();

            // accrue interest onto each balance before any payment
            let mut interest = vec![Money::ZERO; working.len()];
            for &i in &active {
                let accrued = working[i].balance.apply_rate(working[i].card.apr.monthly());
                interest[i] = accrued;
                working[i].balance += accrued;
            }
            let month_interest: Money = active.iter().map(|&i| interest[i]).sum();

            // strategy ranking over post-interest, pre-payment balances
            let mut ranked = active.clone();
            ranked.sort_by(|&a, &b| strategy.compare(&working[a].rank(), &working[b].rank()));

            // minimums first, each capped at the card's balance
            let mut payments = vec![Money::ZERO; working.len()];
            for &i in &active {
                let due = working[i].card.minimum_payment.min(working[i].balance);
                working[i].balance -= due;
                payments[i] = due;
            }
            let month_minimums: Money = active.iter().map(|&i| payments[i]).sum();

            // extra goes to the target card, rolling any remainder down
            // the same ranking within the month
            let mut remaining_extra = extra_payment;
            for &i in &ranked {
                if remaining_extra.is_zero() {
                    break;
                }
                let applied = remaining_extra.min(working[i].balance);
                working[i].balance -= applied;
                payments[i] += applied;
                remaining_extra -= applied;
            }

            // newly zeroed cards enter the payoff order in ranking order
            for &i in &ranked {
                if working[i].balance.is_zero() && !working[i].paid_off_recorded {
                    working[i].paid_off_recorded = true;
                    payoff_order.push(working[i].card.id);
                }
            }

            let rows: Vec<MonthlyPayment> = active
                .iter()
                .map(|&i| MonthlyPayment {
                    card_id: working[i].card.id,
                    card_name: working[i].card.name.clone(),
                    payment: payments[i],
                    interest_accrued: interest[i],
                    remaining_balance: working[i].balance,
                })
                .collect();

            let total_payment: Money = rows.iter().map(|r| r.payment).sum();
            let total_remaining: Money = rows.iter().map(|r| r.remaining_balance).sum();

            total_interest_paid += month_interest;
            total_paid += total_payment;

            if month == 1 && total_payment < month_interest {
                negative_amortization = true;
                let shortfall = (month_interest - month_minimums)
                    .ceil_to_cents()
                    .max(Money::ZERO);
                minimum_extra_required = Some(shortfall);
            }

            timeline.push(MonthSnapshot {
                month,
                payments: rows,
                total_payment,
                total_remaining,
            });
        }

        let is_payoff_possible = working.iter().all(|w| w.balance.is_zero());

        Ok(PayoffResult {
            is_payoff_possible,
            negative_amortization,
            minimum_extra_required,
            total_months: month,
            total_interest_paid,
            total_paid,
            payoff_order,
            timeline,
        })
    }
}

impl Default for PayoffSimulator {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}
