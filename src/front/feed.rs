use crate::front::mention::Mention;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;
use tracing::info;

/// Where mentions come from and replies go to
#[async_trait]
pub trait MentionFeed: Send + Sync {
    async fn mentions(&self) -> Result<Vec<Mention>>;

    async fn reply(&self, in_reply_to: u64, status: &str) -> Result<()>;
}

/// A posted reply as written to the outbox
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboxEntry {
    pub in_reply_to: u64,
    pub status: String,
    pub sent_at: DateTime<Utc>,
}

/// Mentions from a JSON array file, replies appended to a JSON-lines outbox
pub struct JsonFileFeed {
    mentions_path: PathBuf,
    outbox_path: PathBuf,
}

impl JsonFileFeed {
    pub fn new(mentions_path: impl Into<PathBuf>, outbox_path: impl Into<PathBuf>) -> Self {
        Self {
            mentions_path: mentions_path.into(),
            outbox_path: outbox_path.into(),
        }
    }
}

#[async_trait]
impl MentionFeed for JsonFileFeed {
    async fn mentions(&self) -> Result<Vec<Mention>> {
        let raw = tokio::fs::read_to_string(&self.mentions_path)
            .await
            .with_context(|| format!("Failed to read {}", self.mentions_path.display()))?;
        let mentions: Vec<Mention> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to decode {}", self.mentions_path.display()))?;
        info!("Loaded {} mentions", mentions.len());
        Ok(mentions)
    }

    async fn reply(&self, in_reply_to: u64, status: &str) -> Result<()> {
        let entry = OutboxEntry {
            in_reply_to,
            status: status.to_string(),
            sent_at: Utc::now(),
        };
        let mut line = serde_json::to_string(&entry)?;
        line.push('\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.outbox_path)
            .await
            .with_context(|| format!("Failed to open {}", self.outbox_path.display()))?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}
