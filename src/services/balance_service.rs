use serenity::builder::{CreateEmbed, CreateEmbedFooter};
use serenity::model::channel::Message;
use serenity::model::id::UserId;
use serenity::prelude::Context;

use crate::db;
use crate::models::{BalanceResult, Balances, COIN, LTC_USD_RATE};
use crate::services::{self, ServiceError};
use crate::utils::template;

/// Coin argument of `bal`, `ltc` when omitted
pub fn coin_arg<'a>(args: &[&'a str]) -> &'a str {
    args.first().copied().unwrap_or(COIN)
}

/// Only `ltc` is accepted, in any case
pub fn check_coin(coin: &str) -> Result<(), ServiceError> {
    if coin.to_lowercase() != COIN {
        return Err(ServiceError::Rejected("❌ Unsupported coin. Use `ltc`.".to_string()));
    }
    Ok(())
}

/// Read a user's balance and its USD value. Creates the wallet in memory only.
pub fn balance_of(balances: &mut Balances, user_id: UserId, username: &str) -> BalanceResult {
    let ltc = db::account::get_account_balance(balances, user_id);
    BalanceResult {
        username: username.to_string(),
        ltc,
        usd: ltc * LTC_USD_RATE,
    }
}

pub async fn get_balance(
    ctx: &Context,
    msg: &Message,
    username: &str,
) -> Result<BalanceResult, ServiceError> {
    let store = services::ledger(ctx).await?;
    let mut balances = store.load().await?;
    Ok(balance_of(&mut balances, msg.author.id, username))
}

/// Fill `BAL_MESSAGE_FORMAT` for a balance result
pub fn render_balance_message(format: &str, result: &BalanceResult) -> Result<String, ServiceError> {
    let ltc = format!("{:.4}", result.ltc);
    let usd = format!("{:.2}", result.usd);
    Ok(template::render(
        format,
        &[("ltc", &ltc), ("usd", &usd), ("username", &result.username)],
    )?)
}

pub fn create_balance_embed(result: &BalanceResult, description: String) -> CreateEmbed {
    CreateEmbed::default()
        .title(format!("{}'s Litecoin wallet", result.username))
        .description(description)
        .footer(CreateEmbedFooter::new("Try $balances command to see all of your balances."))
        .color(0x607d8b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_defaults_to_ltc() {
        assert_eq!(coin_arg(&[]), "ltc");
        assert!(check_coin(coin_arg(&[])).is_ok());
        assert_eq!(coin_arg(&["btc"]), "btc");
    }

    #[test]
    fn test_check_coin() {
        assert!(check_coin("ltc").is_ok());
        assert!(check_coin("LTC").is_ok());
        let err = check_coin("btc").unwrap_err();
        assert_eq!(err.to_string(), "❌ Unsupported coin. Use `ltc`.");
    }

    #[test]
    fn test_balance_of_new_user() {
        let mut balances = Balances::new();
        let result = balance_of(&mut balances, UserId::new(3), "carol");
        assert_eq!(result.ltc, 0.0);
        assert_eq!(result.usd, 0.0);
        assert_eq!(balances.len(), 1);
    }

    #[test]
    fn test_balance_of_existing_user() {
        let mut balances = Balances::new();
        db::account::set_balance(&mut balances, UserId::new(3), 2.0);

        let result = balance_of(&mut balances, UserId::new(3), "carol");
        assert_eq!(result.ltc, 2.0);
        assert_eq!(result.usd, 170.0);
    }

    #[test]
    fn test_render_balance_message() {
        let result = BalanceResult {
            username: "carol".to_string(),
            ltc: 0.5,
            usd: 42.5,
        };
        let rendered = render_balance_message("{username}: {ltc} LTC (${usd})", &result).unwrap();
        assert_eq!(rendered, "carol: 0.5000 LTC ($42.50)");
    }
}
