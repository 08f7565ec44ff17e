use serenity::builder::CreateMessage;
use serenity::model::channel::Message;
use serenity::prelude::Context;

use crate::services::{self, balance_service};
use crate::utils;

pub async fn execute(ctx: &Context, msg: &Message, args: &[&str]) -> Result<(), String> {
    let coin = balance_service::coin_arg(args);

    if let Err(e) = balance_service::check_coin(coin) {
        msg.reply(ctx, e.to_string()).await.map_err(|e| e.to_string())?;
        return Ok(());
    }

    let config = services::config(ctx).await.map_err(|e| e.to_string())?;
    let username = utils::author_display_name(ctx, msg).await;

    let result = balance_service::get_balance(ctx, msg, &username)
        .await
        .map_err(|e| e.to_string())?;
    let description = balance_service::render_balance_message(&config.bal_message_format, &result)
        .map_err(|e| e.to_string())?;

    let embed = balance_service::create_balance_embed(&result, description);
    msg.channel_id
        .send_message(ctx, CreateMessage::default().embed(embed).reference_message(msg))
        .await
        .map_err(|e| e.to_string())?;

    Ok(())
}
