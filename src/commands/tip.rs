use serenity::builder::{CreateEmbed, CreateMessage};
use serenity::model::channel::Message;
use serenity::prelude::Context;

use crate::services::tip_service::{self, TipRequestError};
use crate::services::{self, permission_service, ServiceError};

fn usage_embed() -> CreateEmbed {
    CreateEmbed::default()
        .title("💸 Tip Command")
        .description("Tip another user some of your Litecoin")
        .field("Usage", "`tip <@user or id> <amount>$ <coin>`", false)
        .field("Examples",
            "`tip @Alice 10$ ltc`\n\
             `tip 123456789 2.50$ ltc`",
            false)
        .field("Notes",
            "• The amount is in USD and converted at the fixed LTC rate\n\
             • The receiver must be a real Discord user\n\
             • You can't tip yourself",
            false)
        .color(0x00ff00)
}

async fn send_usage(ctx: &Context, msg: &Message) -> Result<(), String> {
    msg.channel_id
        .send_message(ctx, CreateMessage::default().embed(usage_embed()))
        .await
        .map_err(|e| e.to_string())?;
    Ok(())
}

pub async fn execute(ctx: &Context, msg: &Message, args: &[&str]) -> Result<(), String> {
    let (receiver_id, amount_str) = match tip_service::parse_tip_args(args) {
        Ok(parsed) => parsed,
        Err(_) => return send_usage(ctx, msg).await,
    };

    let receiver_found = permission_service::lookup_user(ctx, msg, receiver_id).await.is_some();
    let usd = match tip_service::prepare_tip(msg.author.id, receiver_id, receiver_found, amount_str) {
        Ok(usd) => usd,
        Err(TipRequestError::Usage) => return send_usage(ctx, msg).await,
        Err(TipRequestError::Rejected(reason)) => {
            msg.channel_id.say(ctx, reason).await.map_err(|e| e.to_string())?;
            return Ok(());
        }
    };

    let result = match tip_service::execute_tip(ctx, msg, receiver_id, usd).await {
        Ok(result) => result,
        Err(ServiceError::Rejected(reason)) => {
            msg.reply(ctx, reason).await.map_err(|e| e.to_string())?;
            return Ok(());
        }
        Err(e) => return Err(e.to_string()),
    };

    let config = services::config(ctx).await.map_err(|e| e.to_string())?;
    let content = tip_service::render_tip_message(&config.tip_message_format, &result)
        .map_err(|e| e.to_string())?;
    msg.reply(ctx, content).await.map_err(|e| e.to_string())?;

    Ok(())
}
