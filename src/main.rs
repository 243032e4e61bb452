mod analysis;
mod error;
mod front;
mod models;
mod pipeline;
mod scrapers;

use analysis::AmenityLexicon;
use clap::{Parser, Subcommand};
use error::AnalysisError;
use front::{HttpLinkResolver, JsonFileFeed, SeenStore};
use models::Summary;
use pipeline::ReviewAnalyzer;
use scrapers::{HostelworldSource, ScrapeParams};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "hostel-scout", about = "What hostel reviews say about one amenity")]
struct Cli {
    /// Override the page cap (default 25, or HOSTEL_MAX_PAGES)
    #[arg(long, global = true)]
    max_pages: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarise one hostel's reviews for one amenity
    Analyze {
        /// Base URL of the hostel's review pages, ending in /reviews/
        #[arg(long)]
        url: String,
        /// wifi, breakfast, bathroom, shower or noise
        #[arg(short, long)]
        keyword: String,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Answer unseen mentions from a mentions file
    Respond {
        /// JSON array of mentions
        #[arg(long)]
        mentions: PathBuf,
        /// File of already answered mention ids
        #[arg(long, default_value = "seen_mentions.json")]
        seen: PathBuf,
        /// JSON-lines file replies are appended to
        #[arg(long, default_value = "outbox.jsonl")]
        outbox: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up HOSTEL_* settings from .env if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Defaults, then environment, then flags
    let cli = Cli::parse();
    let mut params = ScrapeParams::from_env();
    if let Some(max_pages) = cli.max_pages {
        params = params.with_max_pages(max_pages);
    }

    // One HTTP client shared by page fetches and link resolution
    let source = HostelworldSource::new(&params)?;
    let client = source.client().clone();
    let analyzer = ReviewAnalyzer::new(source, params, AmenityLexicon::default())?;

    match cli.command {
        Commands::Analyze { url, keyword, json } => {
            match analyzer.analyze(&url, &keyword).await {
                Ok(summary) if json => println!("{}", serde_json::to_string_pretty(&summary)?),
                Ok(summary) => print_summary(&keyword, &summary),
                Err(AnalysisError::NoMatch { keyword }) => {
                    println!("No reviews mention {}.", keyword);
                }
                Err(e) => return Err(e.into()),
            }
        }
        Commands::Respond {
            mentions,
            seen,
            outbox,
        } => {
            let feed = JsonFileFeed::new(mentions, outbox);
            let seen = SeenStore::new(seen);
            let resolver = HttpLinkResolver::new(client);
            let stats = front::respond_once(&feed, &seen, &analyzer, &resolver).await?;
            info!(
                "Replied to {} mentions ({} answered, {} could not be answered)",
                stats.total, stats.answered, stats.failed
            );
        }
    }

    Ok(())
}

fn print_summary(keyword: &str, summary: &Summary) {
    let matched = summary.positive + summary.negative + summary.zero;
    println!("{} reviews, average rating {:.1}/100", summary.num, summary.hotel_avg);
    println!(
        "{} reviews mention {}, average rating {:.1}/100",
        matched, keyword, summary.key_avg
    );
    println!(
        "   Sentiment: mean {:.3} ({} positive, {} negative, {} neutral)",
        summary.mean, summary.positive, summary.negative, summary.zero
    );
    println!("   Best:  {:+.2} \"{}\"", summary.max_val.num, summary.max_val.phrase);
    println!("   Worst: {:+.2} \"{}\"", summary.min_val.num, summary.min_val.phrase);
    let words: Vec<String> = summary
        .phrase_words
        .iter()
        .map(|(word, count)| format!("{} ({})", word, count))
        .collect();
    println!("   Common words: {}", words.join(", "));
    println!(
        "   Most typical: \"{}\" ({} hits)",
        summary.common_phrase.phrase, summary.common_phrase.num
    );
}
