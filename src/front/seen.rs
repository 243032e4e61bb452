use crate::front::mention::Mention;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::PathBuf;

/// Flat-file record of mention ids that were already answered
pub struct SeenStore {
    path: PathBuf,
}

impl SeenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub async fn load(&self) -> Result<HashSet<u64>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HashSet::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", self.path.display()))
            }
        };
        let ids: Vec<u64> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to decode {}", self.path.display()))?;
        Ok(ids.into_iter().collect())
    }

    /// Mentions from `batch` that have not been answered yet
    pub async fn unread<'a>(&self, batch: &'a [Mention]) -> Result<Vec<&'a Mention>> {
        let seen = self.load().await?;
        Ok(batch.iter().filter(|m| !seen.contains(&m.id)).collect())
    }

    /// Replace the stored ids with every id in `batch`
    pub async fn record(&self, batch: &[Mention]) -> Result<()> {
        self.record_ids(batch.iter().map(|m| m.id).collect()).await
    }

    pub async fn record_ids(&self, ids: Vec<u64>) -> Result<()> {
        let json = serde_json::to_string(&ids)?;
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}
