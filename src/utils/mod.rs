pub mod number;
pub mod parse;
pub mod template;

pub use number::{float_repr, round_to};
pub use parse::{parse_ltc_amount, parse_usd_amount, parse_usd_whole, parse_user_id};
pub use template::TemplateError;

use serenity::model::channel::Message;
use serenity::prelude::Context;

/// Name to greet a message author by: guild nickname, then global display name
pub async fn author_display_name(ctx: &Context, msg: &Message) -> String {
    match msg.author_nick(ctx).await {
        Some(nick) => nick,
        None => msg.author.display_name().to_string(),
    }
}
