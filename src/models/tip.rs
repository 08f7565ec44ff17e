//! Tip command models

/// Result of a successful tip
#[derive(Debug, Clone)]
pub struct TipResult {
    pub sender_id: u64,
    pub receiver_id: u64,
    pub ltc_amount: f64,
    pub usd: f64,
}
