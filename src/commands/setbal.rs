use serenity::builder::{CreateEmbed, CreateMessage};
use serenity::model::channel::Message;
use serenity::prelude::Context;

use crate::services::{permission_service, setbal_service, ServiceError};
use crate::utils::{float_repr, parse_user_id};

fn usage_embed() -> CreateEmbed {
    CreateEmbed::default()
        .title("🛠️ Set Balance Command")
        .description("Overwrite a user's LTC balance (operators only)")
        .field("Usage", "`setbal <coin> <amount>$ <@user or id>`", false)
        .field("Examples", "`setbal ltc 50$ @Alice`", false)
        .field("Requirements",
            "• Listed in the bot's operator IDs\n\
             • Whole dollar amount between 1$ and 100$\n\
             • Replaces the balance, it does not add to it",
            false)
        .color(0x9900ff)
}

pub async fn execute(ctx: &Context, msg: &Message, args: &[&str]) -> Result<(), String> {
    let target_id = match (args.len() >= 3, args.get(2).map(|a| parse_user_id(a))) {
        (true, Some(Ok(target_id))) => target_id,
        _ => {
            msg.channel_id
                .send_message(ctx, CreateMessage::default().embed(usage_embed()))
                .await
                .map_err(|e| e.to_string())?;
            return Ok(());
        }
    };

    match setbal_service::execute_setbal(ctx, msg, args[0], args[1], target_id).await {
        Ok(result) => {
            let name = permission_service::get_display_name(ctx, msg, target_id).await;
            msg.reply(
                ctx,
                format!(
                    "✅ Set {}'s LTC balance to {} LTC (≈ ${}).",
                    name,
                    float_repr(result.ltc_amount),
                    float_repr(result.usd)
                ),
            )
            .await
            .map_err(|e| e.to_string())?;
        }
        Err(ServiceError::Rejected(reason)) => {
            msg.reply(ctx, reason).await.map_err(|e| e.to_string())?;
        }
        Err(e) => return Err(e.to_string()),
    }

    Ok(())
}
