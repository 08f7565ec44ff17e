//! Balance ledger models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The only coin the wallet knows about
pub const COIN: &str = "ltc";

/// Fixed LTC -> USD conversion used for every fiat figure
pub const LTC_USD_RATE: f64 = 85.0;

/// One user's wallet as stored in the balance file: `{"ltc": 0.0}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceRecord {
    pub ltc: f64,
}

/// Whole ledger keyed by the decimal Discord user id
pub type Balances = BTreeMap<String, BalanceRecord>;

/// Result of a balance query
#[derive(Debug, Clone)]
pub struct BalanceResult {
    pub username: String,
    pub ltc: f64,
    pub usd: f64,
}
