use serenity::model::channel::Message;
use serenity::model::id::UserId;
use serenity::prelude::Context;
use tracing::debug;

use crate::db;
use crate::models::{Balances, TipResult, LTC_USD_RATE};
use crate::services::{self, ServiceError};
use crate::utils::{float_repr, parse_usd_amount, parse_user_id, round_to, template};

/// Why a tip request was turned away before reaching the ledger
#[derive(Debug, PartialEq)]
pub enum TipRequestError {
    /// Missing arguments or an unknown receiver; show the usage embed
    Usage,
    /// Shown to the user as-is
    Rejected(String),
}

/// Split `tip` arguments into receiver and amount.
///
/// All three arguments are required, but the coin is never looked at.
pub fn parse_tip_args<'a>(args: &[&'a str]) -> Result<(UserId, &'a str), TipRequestError> {
    if args.len() < 3 {
        return Err(TipRequestError::Usage);
    }
    let receiver_id = parse_user_id(args[0]).map_err(|_| TipRequestError::Usage)?;
    Ok((receiver_id, args[1]))
}

/// Check a parsed tip request once the receiver has been looked up on Discord.
///
/// Receivers that could not be resolved to a real user are refused before
/// any other check, so no money can move to a dead account.
pub fn prepare_tip(
    sender_id: UserId,
    receiver_id: UserId,
    receiver_found: bool,
    amount_str: &str,
) -> Result<f64, TipRequestError> {
    if !receiver_found {
        return Err(TipRequestError::Usage);
    }
    validate_tip(sender_id, receiver_id, amount_str).map_err(TipRequestError::Rejected)
}

/// Check a tip request before touching the ledger and return the USD amount.
///
/// The coin argument is not looked at here, any value is accepted.
pub fn validate_tip(sender_id: UserId, receiver_id: UserId, amount_str: &str) -> Result<f64, String> {
    // Self-tips are refused before the amount is even parsed
    if sender_id == receiver_id {
        return Err("You can't tip yourself.".to_string());
    }

    parse_usd_amount(amount_str).ok_or_else(|| "Please use the format like `10$`.".to_string())
}

/// Move `usd` worth of LTC (rounded to 4 places) from sender to receiver
pub fn apply_tip(
    balances: &mut Balances,
    sender_id: UserId,
    receiver_id: UserId,
    usd: f64,
) -> Result<TipResult, ServiceError> {
    let ltc_amount = round_to(usd / LTC_USD_RATE, 4);

    let sender_balance = db::account::get_account_balance(balances, sender_id);
    db::account::get_or_create(balances, receiver_id);

    if sender_balance < ltc_amount {
        return Err(ServiceError::Rejected(format!(
            "❌ You don't have enough LTC. Your balance: {} LTC.",
            float_repr(sender_balance)
        )));
    }

    db::account::update_balance(balances, sender_id, -ltc_amount);
    db::account::update_balance(balances, receiver_id, ltc_amount);

    Ok(TipResult {
        sender_id: sender_id.get(),
        receiver_id: receiver_id.get(),
        ltc_amount,
        usd,
    })
}

pub async fn execute_tip(
    ctx: &Context,
    msg: &Message,
    receiver_id: UserId,
    usd: f64,
) -> Result<TipResult, ServiceError> {
    let store = services::ledger(ctx).await?;
    let mut balances = store.load().await?;

    let result = apply_tip(&mut balances, msg.author.id, receiver_id, usd)?;
    store.save(&balances).await?;

    debug!(
        "Tip {} LTC from {} to {}",
        result.ltc_amount, result.sender_id, result.receiver_id
    );
    Ok(result)
}

/// Fill `TIP_MESSAGE_FORMAT` for a completed tip
pub fn render_tip_message(format: &str, result: &TipResult) -> Result<String, ServiceError> {
    let sender = format!("<@{}>", result.sender_id);
    let receiver = format!("<@{}>", result.receiver_id);
    let ltc_amount = float_repr(result.ltc_amount);
    let usd = format!("{:.2}", result.usd);
    Ok(template::render(
        format,
        &[
            ("sender", &sender),
            ("receiver", &receiver),
            ("ltc_amount", &ltc_amount),
            ("usd", &usd),
        ],
    )?)
}
