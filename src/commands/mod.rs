pub mod balance;
pub mod tip;
pub mod withdraw;
pub mod setbal;
pub mod help;

use serenity::model::channel::Message;
use serenity::prelude::Context;
use tracing::{debug, error};

use crate::services;

/// Split a message into command name and arguments.
///
/// The name has to follow the prefix directly: `$bal` is a command, `$ bal` is not.
pub fn parse_command<'a>(content: &'a str, prefix: &str) -> Option<(&'a str, Vec<&'a str>)> {
    let rest = content.strip_prefix(prefix)?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        return None;
    }

    let mut parts = rest.split_whitespace();
    let command = parts.next()?;
    Some((command, parts.collect()))
}

pub async fn handle_message(ctx: &Context, msg: &Message) {
    if msg.author.bot {
        return;
    }

    let config = match services::config(ctx).await {
        Ok(config) => config,
        Err(e) => {
            error!("Cannot dispatch message: {}", e);
            return;
        }
    };

    if let Some((command, args)) = parse_command(&msg.content, &config.prefix) {
        debug!("{} invoked `{}` with {:?}", msg.author.id, command, args);

        let result = match command {
            "bal" | "bals" => balance::execute(ctx, msg, &args).await,
            "tip" => tip::execute(ctx, msg, &args).await,
            "withdraw" => withdraw::execute(ctx, msg, &args).await,
            "setbal" => setbal::execute(ctx, msg, &args).await,
            "help" => help::execute(ctx, msg, &config.prefix).await,
            _ => Ok(()),
        };

        if let Err(e) = result {
            error!("❌ Error executing command {}: {}", command, e);
        }
    }

    // Direct messages also drive the withdrawal dialogue
    if msg.guild_id.is_none() {
        if let Err(e) = withdraw::handle_reply(ctx, msg).await {
            error!("❌ Error handling withdrawal reply from {}: {}", msg.author.id, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        let (command, args) = parse_command("$tip <@2> 10$ ltc", "$").unwrap();
        assert_eq!(command, "tip");
        assert_eq!(args, vec!["<@2>", "10$", "ltc"]);
    }

    #[test]
    fn test_parse_command_without_args() {
        let (command, args) = parse_command("!bal", "!").unwrap();
        assert_eq!(command, "bal");
        assert!(args.is_empty());
    }

    #[test]
    fn test_parse_command_multi_char_prefix() {
        let (command, _) = parse_command("ltc!withdraw ltc", "ltc!").unwrap();
        assert_eq!(command, "withdraw");
    }

    #[test]
    fn test_not_a_command() {
        assert!(parse_command("hello", "$").is_none());
        assert!(parse_command("$", "$").is_none());
        assert!(parse_command("$ bal", "$").is_none());
    }
}
