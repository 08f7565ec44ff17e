//! Data models for the tip bot commands and services
//!
//! Persisted ledger records plus the result structs handed from services to
//! the command layer for rendering.

pub mod balance;
pub mod tip;
pub mod withdraw;
pub mod setbal;

pub use balance::{BalanceRecord, BalanceResult, Balances, COIN, LTC_USD_RATE};
pub use tip::TipResult;
pub use withdraw::{PendingWithdrawal, WithdrawalStage, WithdrawalStep};
pub use setbal::SetBalanceResult;
