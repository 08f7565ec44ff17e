pub mod balance_service;
pub mod tip_service;
pub mod withdraw_service;
pub mod setbal_service;
pub mod permission_service;

use serenity::prelude::Context;
use std::sync::Arc;
use thiserror::Error;

use crate::config::Config;
use crate::db::{BalanceStore, LedgerError};
use crate::utils::TemplateError;

/// Failure of a service call
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Validation failure, shown to the user as-is
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error("{0} not initialized")]
    Missing(&'static str),
}

/// Get the balance store from client data
pub async fn ledger(ctx: &Context) -> Result<Arc<BalanceStore>, ServiceError> {
    let data = ctx.data.read().await;
    data.get::<crate::Ledger>()
        .cloned()
        .ok_or(ServiceError::Missing("Balance store"))
}

/// Get the bot configuration from client data
pub async fn config(ctx: &Context) -> Result<Arc<Config>, ServiceError> {
    let data = ctx.data.read().await;
    data.get::<crate::BotConfig>()
        .cloned()
        .ok_or(ServiceError::Missing("Config"))
}
