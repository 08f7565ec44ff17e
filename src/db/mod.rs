use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::models::Balances;

pub mod account;

/// Ledger file errors
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Balance file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Balance file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Flat JSON file holding every user's balance.
///
/// Each command does its own `load` -> mutate -> `save` cycle. There is no
/// locking between cycles, so concurrent writers race and the last one wins.
#[derive(Debug, Clone)]
pub struct BalanceStore {
    path: PathBuf,
}

impl BalanceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        BalanceStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole ledger, empty when the file does not exist yet
    pub async fn load(&self) -> Result<Balances, LedgerError> {
        if !tokio::fs::try_exists(&self.path).await? {
            debug!("No balance file at {}, starting empty", self.path.display());
            return Ok(Balances::new());
        }

        let raw = tokio::fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&raw)?)
    }

    /// Rewrite the whole ledger, pretty-printed with 4-space indentation
    pub async fn save(&self, balances: &Balances) -> Result<(), LedgerError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        balances.serialize(&mut ser)?;

        tokio::fs::write(&self.path, buf).await?;
        debug!("Saved {} balances to {}", balances.len(), self.path.display());
        Ok(())
    }
}
