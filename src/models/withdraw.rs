//! Withdrawal dialogue models

use serenity::model::id::MessageId;

/// Where a user currently is in the withdrawal dialogue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawalStage {
    AwaitingAddress,
    AwaitingAmount,
}

/// In-memory withdrawal session for one user
#[derive(Debug, Clone, PartialEq)]
pub struct PendingWithdrawal {
    pub stage: WithdrawalStage,
    pub address: Option<String>,
    /// The `withdraw` command message that opened this session
    pub origin: MessageId,
}

impl PendingWithdrawal {
    pub fn new(origin: MessageId) -> Self {
        PendingWithdrawal {
            stage: WithdrawalStage::AwaitingAddress,
            address: None,
            origin,
        }
    }
}

/// Outcome of feeding one direct message into the withdrawal dialogue
#[derive(Debug, Clone, PartialEq)]
pub enum WithdrawalStep {
    /// The user has no session, or the message opened it
    Idle,
    Cancelled,
    /// Address stored, now asking for the amount
    AddressAccepted { balance: f64 },
    /// `all` was sent; always refused and the session ends
    AllRejected,
    /// Not a number; session unchanged
    InvalidAmount,
    /// Non-positive or more than the balance; session unchanged
    InsufficientBalance,
    Completed { amount: f64, address: String },
}
