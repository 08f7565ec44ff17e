use serenity::builder::CreateMessage;
use serenity::model::channel::Message;
use serenity::prelude::Context;

use crate::models::WithdrawalStep;
use crate::services::withdraw_service::{self, WithdrawEntryError};

pub async fn execute(ctx: &Context, msg: &Message, args: &[&str]) -> Result<(), String> {
    match withdraw_service::check_withdraw_entry(msg.guild_id.is_none(), args.first().copied()) {
        Ok(()) => {}
        Err(e @ WithdrawEntryError::NotInDm) => {
            msg.reply(ctx, e.to_string()).await.map_err(|e| e.to_string())?;
            return Ok(());
        }
        Err(e @ WithdrawEntryError::UnsupportedCoin) => {
            msg.channel_id.say(ctx, e.to_string()).await.map_err(|e| e.to_string())?;
            return Ok(());
        }
    }

    let embed = withdraw_service::create_address_prompt_embed();
    msg.channel_id
        .send_message(ctx, CreateMessage::default().embed(embed))
        .await
        .map_err(|e| e.to_string())?;

    withdraw_service::start_withdrawal(msg.author.id, msg.id).await;
    Ok(())
}

/// Answer a direct message that continues a withdrawal dialogue
pub async fn handle_reply(ctx: &Context, msg: &Message) -> Result<(), String> {
    let step = withdraw_service::handle_direct_message(ctx, msg)
        .await
        .map_err(|e| e.to_string())?;

    let response = match step {
        WithdrawalStep::Idle => return Ok(()),
        WithdrawalStep::Cancelled => CreateMessage::default().content("❌ Withdrawal canceled."),
        WithdrawalStep::AddressAccepted { balance } => {
            CreateMessage::default().embed(withdraw_service::create_amount_prompt_embed(balance))
        }
        WithdrawalStep::AllRejected => {
            CreateMessage::default().embed(withdraw_service::create_unavailable_embed())
        }
        WithdrawalStep::InvalidAmount => {
            CreateMessage::default().content("❌ Invalid amount. Please enter a number or `all`.")
        }
        WithdrawalStep::InsufficientBalance => {
            CreateMessage::default().content("❌ Invalid or insufficient balance.")
        }
        WithdrawalStep::Completed { amount, address } => CreateMessage::default().content(
            format!("✅ Sent {:.4} LTC to `{}` successfully.", amount, address),
        ),
    };

    msg.channel_id
        .send_message(ctx, response)
        .await
        .map_err(|e| e.to_string())?;
    Ok(())
}
