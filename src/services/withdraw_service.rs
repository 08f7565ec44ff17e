use lazy_static::lazy_static;
use serenity::builder::CreateEmbed;
use serenity::model::channel::Message;
use serenity::model::id::{MessageId, UserId};
use serenity::prelude::Context;
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::debug;

use crate::db::{self, BalanceStore};
use crate::models::{Balances, PendingWithdrawal, WithdrawalStage, WithdrawalStep, COIN};
use crate::services::{self, ServiceError};
use crate::utils::parse_ltc_amount;

pub type PendingWithdrawals = HashMap<UserId, PendingWithdrawal>;

lazy_static! {
    // Lost on restart. An abandoned session stays until the next `cancel`.
    static ref PENDING_WITHDRAWALS: Mutex<PendingWithdrawals> = Mutex::new(HashMap::new());
}

const BLURPLE: u32 = 0x5865f2;

/// Why the `withdraw` command itself was refused
#[derive(Debug, Error, PartialEq)]
pub enum WithdrawEntryError {
    #[error("❌ Withdrawals must be done in DMs.")]
    NotInDm,
    #[error("❌ Only `ltc` withdrawals are supported.")]
    UnsupportedCoin,
}

/// `withdraw` only works in DMs and only for exactly `ltc` (case-sensitive, required)
pub fn check_withdraw_entry(in_dm: bool, coin: Option<&str>) -> Result<(), WithdrawEntryError> {
    if !in_dm {
        return Err(WithdrawEntryError::NotInDm);
    }
    if coin != Some(COIN) {
        return Err(WithdrawEntryError::UnsupportedCoin);
    }
    Ok(())
}

/// Start (or restart) a withdrawal dialogue for a user
pub fn open_session(pending: &mut PendingWithdrawals, user_id: UserId, origin: MessageId) {
    pending.insert(user_id, PendingWithdrawal::new(origin));
}

/// End a user's withdrawal dialogue
pub fn close_session(pending: &mut PendingWithdrawals, user_id: UserId) {
    pending.remove(&user_id);
}

/// Feed one direct message into the user's withdrawal dialogue.
///
/// `balances` is only mutated when the withdrawal completes. The session is
/// left open in that case: the caller saves the ledger, then calls
/// `close_session`.
pub fn advance(
    pending: &mut PendingWithdrawals,
    balances: &mut Balances,
    user_id: UserId,
    message_id: MessageId,
    content: &str,
) -> WithdrawalStep {
    let Some(session) = pending.get_mut(&user_id) else {
        return WithdrawalStep::Idle;
    };
    if session.origin == message_id {
        return WithdrawalStep::Idle;
    }

    let input = content.trim().to_lowercase();
    if input == "cancel" {
        pending.remove(&user_id);
        return WithdrawalStep::Cancelled;
    }

    let balance = db::account::get_account_balance(balances, user_id);

    match session.stage {
        WithdrawalStage::AwaitingAddress => {
            session.address = Some(content.trim().to_string());
            session.stage = WithdrawalStage::AwaitingAmount;
            WithdrawalStep::AddressAccepted { balance }
        }
        WithdrawalStage::AwaitingAmount => {
            // `all` is advertised in the prompt but never honoured
            if input == "all" {
                pending.remove(&user_id);
                return WithdrawalStep::AllRejected;
            }

            let Some(amount) = parse_ltc_amount(content) else {
                return WithdrawalStep::InvalidAmount;
            };
            if amount <= 0.0 || amount > balance {
                return WithdrawalStep::InsufficientBalance;
            }

            db::account::update_balance(balances, user_id, -amount);
            let address = session.address.clone().unwrap_or_default();
            WithdrawalStep::Completed { amount, address }
        }
    }
}

pub async fn start_withdrawal(user_id: UserId, origin: MessageId) {
    let mut pending = PENDING_WITHDRAWALS.lock().await;
    open_session(&mut pending, user_id, origin);
    debug!("Withdrawal session opened for {}", user_id);
}

/// Persist a completed withdrawal and end the session.
///
/// A failed save leaves the session open so the user can retry.
pub async fn finish_withdrawal(
    store: &BalanceStore,
    pending: &mut PendingWithdrawals,
    balances: &Balances,
    user_id: UserId,
) -> Result<(), ServiceError> {
    store.save(balances).await?;
    close_session(pending, user_id);
    Ok(())
}

/// Run a direct message through the withdrawal dialogue, saving the ledger on completion
pub async fn handle_direct_message(ctx: &Context, msg: &Message) -> Result<WithdrawalStep, ServiceError> {
    let mut pending = PENDING_WITHDRAWALS.lock().await;
    if !pending.contains_key(&msg.author.id) {
        return Ok(WithdrawalStep::Idle);
    }

    let store = services::ledger(ctx).await?;
    let mut balances = store.load().await?;

    let step = advance(&mut pending, &mut balances, msg.author.id, msg.id, &msg.content);
    if let WithdrawalStep::Completed { .. } = step {
        finish_withdrawal(&store, &mut pending, &balances, msg.author.id).await?;
    }

    debug!("Withdrawal step for {}: {:?}", msg.author.id, step);
    Ok(step)
}

pub fn create_address_prompt_embed() -> CreateEmbed {
    CreateEmbed::default()
        .title("❓ Enter your **Litecoin (LTC)** destination address.")
        .description("Reply with `cancel` to cancel.")
        .color(BLURPLE)
}

pub fn create_amount_prompt_embed(balance: f64) -> CreateEmbed {
    CreateEmbed::default()
        .title("❓ How much **Litecoin (LTC)** do you want to withdraw?")
        .description(format!(
            "You have **{:.8} LTC**.\nReply with `all` to withdraw all.\nReply with `cancel` to cancel.",
            balance
        ))
        .color(BLURPLE)
}

pub fn create_unavailable_embed() -> CreateEmbed {
    CreateEmbed::default()
        .title("⛔ Command error")
        .description("Cannot make a withdrawal at this moment.\nPlease try again later.")
        .color(0xe74c3c)
}
