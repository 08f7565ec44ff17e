use serenity::model::channel::Message;
use serenity::model::id::UserId;
use serenity::prelude::Context;
use tracing::info;

use crate::db;
use crate::models::{Balances, SetBalanceResult, COIN, LTC_USD_RATE};
use crate::services::{self, permission_service, ServiceError};
use crate::utils::parse_usd_whole;

const MIN_USD: f64 = 1.0;
const MAX_USD: f64 = 100.0;

/// Validate coin and amount for `setbal`, returning the USD value
pub fn validate_setbal(coin: &str, amount_str: &str) -> Result<f64, ServiceError> {
    if coin.to_lowercase() != COIN {
        return Err(ServiceError::Rejected("❌ Only `ltc` is supported.".to_string()));
    }

    let usd = parse_usd_whole(amount_str)
        .ok_or_else(|| ServiceError::Rejected("❌ Use format like `50$`.".to_string()))?;

    if !(MIN_USD..=MAX_USD).contains(&usd) {
        return Err(ServiceError::Rejected(
            "❌ Amount must be between 1$ and 100$.".to_string(),
        ));
    }

    Ok(usd)
}

/// Overwrite a user's balance with `usd` worth of LTC (rounded to 8 places)
pub fn apply_set_balance(balances: &mut Balances, user_id: UserId, usd: f64) -> SetBalanceResult {
    let ltc_amount = crate::utils::round_to(usd / LTC_USD_RATE, 8);
    db::account::set_balance(balances, user_id, ltc_amount);

    SetBalanceResult {
        user_id: user_id.get(),
        ltc_amount,
        usd,
    }
}

pub async fn execute_setbal(
    ctx: &Context,
    msg: &Message,
    coin: &str,
    amount_str: &str,
    target_id: UserId,
) -> Result<SetBalanceResult, ServiceError> {
    // Operator check comes before any argument validation
    permission_service::check_permission(ctx, msg).await?;
    let usd = validate_setbal(coin, amount_str)?;

    let store = services::ledger(ctx).await?;
    let mut balances = store.load().await?;
    let result = apply_set_balance(&mut balances, target_id, usd);
    store.save(&balances).await?;

    info!(
        "Operator {} set balance of {} to {} LTC",
        msg.author.id, result.user_id, result.ltc_amount
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_range() {
        assert_eq!(validate_setbal("ltc", "1$").unwrap(), 1.0);
        assert_eq!(validate_setbal("LTC", "100$").unwrap(), 100.0);
    }

    #[test]
    fn test_validate_rejects_coin_first() {
        let err = validate_setbal("btc", "garbage").unwrap_err();
        assert_eq!(err.to_string(), "❌ Only `ltc` is supported.");
    }

    #[test]
    fn test_validate_rejects_format() {
        for amount in ["50.5$", "0.5$", "50", "abc$"] {
            let err = validate_setbal("ltc", amount).unwrap_err();
            assert_eq!(err.to_string(), "❌ Use format like `50$`.", "amount {}", amount);
        }
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        for amount in ["0$", "101$"] {
            let err = validate_setbal("ltc", amount).unwrap_err();
            assert_eq!(err.to_string(), "❌ Amount must be between 1$ and 100$.", "amount {}", amount);
        }
    }

    #[test]
    fn test_set_balance_overwrites() {
        let mut balances = Balances::new();
        let user = UserId::new(4);
        db::account::set_balance(&mut balances, user, 12.0);

        let result = apply_set_balance(&mut balances, user, 50.0);
        assert_eq!(result.ltc_amount, 0.58823529);
        assert_eq!(db::account::get_account_balance(&mut balances, user), 0.58823529);
    }
}
