use serenity::model::channel::Message;
use serenity::model::id::UserId;
use serenity::prelude::Context;
use tracing::debug;

use crate::config::Config;
use crate::services::{self, ServiceError};

/// Check a user against the configured operator list
pub fn check_operator(config: &Config, user_id: UserId) -> Result<(), ServiceError> {
    if !config.is_owner(user_id.get()) {
        debug!("User {} is not an operator", user_id);
        return Err(ServiceError::Rejected(
            "❌ You are not authorized to use this command.".to_string(),
        ));
    }
    Ok(())
}

/// Check that the author of a message is an operator
pub async fn check_permission(ctx: &Context, msg: &Message) -> Result<(), ServiceError> {
    let config = services::config(ctx).await?;
    check_operator(&config, msg.author.id)
}

/// Resolve a command target the way a member argument is resolved: a member
/// of the guild when the message came from a guild, any user in DMs.
///
/// Returns the display name, `None` when there is no such member or user.
pub async fn lookup_user(ctx: &Context, msg: &Message, user_id: UserId) -> Option<String> {
    if let Some(guild_id) = msg.guild_id {
        return match guild_id.member(ctx, user_id).await {
            Ok(member) => Some(member.display_name().to_string()),
            Err(e) => {
                debug!("User {} is not a member of guild {}: {}", user_id, guild_id, e);
                None
            }
        };
    }

    fetch_user_name(ctx, user_id).await
}

async fn fetch_user_name(ctx: &Context, user_id: UserId) -> Option<String> {
    match user_id.to_user(ctx).await {
        Ok(user) => Some(user.display_name().to_string()),
        Err(e) => {
            debug!("Failed to fetch user {}: {}", user_id, e);
            None
        }
    }
}

/// Best display name for any user: guild nickname, global name, then the raw ID
pub async fn get_display_name(ctx: &Context, msg: &Message, user_id: UserId) -> String {
    if let Some(name) = lookup_user(ctx, msg, user_id).await {
        return name;
    }
    if msg.guild_id.is_some() {
        if let Some(name) = fetch_user_name(ctx, user_id).await {
            return name;
        }
    }
    user_id.to_string()
}
