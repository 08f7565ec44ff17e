use serenity::builder::{CreateEmbed, CreateMessage};
use serenity::model::channel::Message;
use serenity::prelude::Context;

pub fn create_help_embed(prefix: &str) -> CreateEmbed {
    CreateEmbed::default()
        .title("📖 Litecoin Wallet Commands")
        .description("A simulated Litecoin wallet. Balances are not real money.")
        .color(0x00b0f4)
        .field(
            "💰 Balance",
            format!("`{p}bal [coin]` - Show your LTC balance (alias `{p}bals`)", p = prefix),
            false,
        )
        .field(
            "💸 Tipping",
            format!("`{p}tip <@user> <amount>$ <coin>` - Tip a user a USD amount in LTC", p = prefix),
            false,
        )
        .field(
            "🏧 Withdrawals",
            format!(
                "`{p}withdraw ltc` - Start a withdrawal (DMs only)\nReply `cancel` at any step to stop",
                p = prefix
            ),
            false,
        )
        .field(
            "🛠️ Operators",
            format!("`{p}setbal <coin> <amount>$ <@user>` - Set a balance (1$-100$)", p = prefix),
            false,
        )
        .field("🎯 General", format!("`{p}help` - Show this help message", p = prefix), false)
}

pub async fn execute(ctx: &Context, msg: &Message, prefix: &str) -> Result<(), String> {
    msg.channel_id
        .send_message(ctx, CreateMessage::default().embed(create_help_embed(prefix)))
        .await
        .map_err(|e| format!("Failed to send help message: {}", e))?;

    Ok(())
}
