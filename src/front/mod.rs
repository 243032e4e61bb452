//! Reply bot around the review analysis: reads mentions, answers each one
//! once, and remembers what it answered.

pub mod feed;
pub mod mention;
pub mod reply;
pub mod seen;

pub use feed::{JsonFileFeed, MentionFeed};
pub use mention::{HttpLinkResolver, LinkResolver, Mention};
pub use seen::SeenStore;

use crate::error::AnalysisError;
use crate::models::Summary;
use crate::pipeline::ReviewAnalyzer;
use crate::scrapers::PageSource;
use mention::{canonical_review_url, find_keyword, find_link};
use reply::{compose_status, error_status};
use std::collections::HashSet;
use thiserror::Error;
use tracing::{info, warn};

/// Why a mention could not be answered with a summary
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("mention has no link")]
    MissingLink,

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

/// Counts from one pass over the mention feed
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RespondStats {
    pub total: usize,
    pub answered: usize,
    pub failed: usize,
}

/// Answer every unseen mention in the feed once, then mark the batch seen
pub async fn respond_once<F, S, L>(
    feed: &F,
    seen: &SeenStore,
    analyzer: &ReviewAnalyzer<S>,
    resolver: &L,
) -> anyhow::Result<RespondStats>
where
    F: MentionFeed,
    S: PageSource,
    L: LinkResolver,
{
    let batch = feed.mentions().await?;
    let unread = seen.unread(&batch).await?;
    info!("{} of {} mentions need a reply", unread.len(), batch.len());

    let mut stats = RespondStats {
        total: unread.len(),
        ..Default::default()
    };

    let mut pending: HashSet<u64> = unread.iter().map(|m| m.id).collect();

    for mention in unread {
        let handle = mention.handle();
        let status = match answer(mention, analyzer, resolver).await {
            Ok((keyword, summary)) => {
                stats.answered += 1;
                compose_status(&summary, &handle, keyword)
            }
            Err(err) => {
                match &err {
                    RequestError::Analysis(e) if e.is_expected() => {
                        info!("Mention {}: {}", mention.id, e)
                    }
                    _ => warn!("Mention {} failed: {}", mention.id, err),
                }
                stats.failed += 1;
                error_status(&handle, &err)
            }
        };
        if let Err(err) = feed.reply(mention.id, &status).await {
            // Mentions replied to before the failure must not be answered again
            let done = batch
                .iter()
                .map(|m| m.id)
                .filter(|id| !pending.contains(id))
                .collect();
            seen.record_ids(done).await?;
            return Err(err);
        }
        pending.remove(&mention.id);
    }

    seen.record(&batch).await?;
    Ok(stats)
}

async fn answer<'a, S, L>(
    mention: &Mention,
    analyzer: &'a ReviewAnalyzer<S>,
    resolver: &L,
) -> Result<(&'a str, Summary), RequestError>
where
    S: PageSource,
    L: LinkResolver,
{
    let link = find_link(&mention.text).ok_or(RequestError::MissingLink)?;
    let resolved = resolver.resolve(link).await?;
    let base_url = canonical_review_url(&resolved)?;
    let keyword = find_keyword(&mention.text, analyzer.lexicon())
        .ok_or_else(|| AnalysisError::UnknownKeyword(mention.text.clone()))?;

    let summary = analyzer.analyze(&base_url, keyword).await?;
    Ok((keyword, summary))
}
