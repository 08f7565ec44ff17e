//! Operator balance-set models

/// Result of overwriting a user's balance
#[derive(Debug, Clone)]
pub struct SetBalanceResult {
    pub user_id: u64,
    pub ltc_amount: f64,
    pub usd: f64,
}
