pub mod account;
pub mod card;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod plan;
pub mod simulator;
pub mod solver;
pub mod strategy;
pub mod summary;
pub mod types;

// re-export key types
pub use account::{AccountRecord, AccountType};
pub use card::{build_cards, CreditCard};
pub use config::PlannerConfig;
pub use decimal::{Money, Rate};
pub use errors::{PlannerError, Result};
pub use plan::{compare_plans, PlanComparison};
pub use simulator::PayoffSimulator;
pub use solver::GoalSolver;
pub use strategy::{CardRank, Strategy};
pub use summary::{summarize, CreditSummary};
pub use types::{CardId, MonthSnapshot, MonthlyPayment, PayoffResult};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
