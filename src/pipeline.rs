use crate::analysis::{
    annotate, summarize, Amenity, AmenityLexicon, SentimentScorer, Stopwords, WordFrequency,
};
use crate::error::{AnalysisError, Result};
use crate::models::{Review, Summary};
use crate::scrapers::{parse_page, PageSource, PaginationResolver, ReviewExtractor, ScrapeParams};
use tracing::{debug, info};
use url::Url;

const PHRASE_WORDS: usize = 3;

/// Scrapes a hostel's reviews and summarises what they say about one amenity
pub struct ReviewAnalyzer<S> {
    source: S,
    params: ScrapeParams,
    lexicon: AmenityLexicon,
    stopwords: Stopwords,
    scorer: SentimentScorer,
    pagination: PaginationResolver,
    extractor: ReviewExtractor,
}

impl<S: PageSource> ReviewAnalyzer<S> {
    pub fn new(source: S, params: ScrapeParams, lexicon: AmenityLexicon) -> Result<Self> {
        Ok(Self {
            pagination: PaginationResolver::new(&params)?,
            extractor: ReviewExtractor::new()?,
            source,
            params,
            lexicon,
            stopwords: Stopwords::english(),
            scorer: SentimentScorer::new(),
        })
    }

    pub fn lexicon(&self) -> &AmenityLexicon {
        &self.lexicon
    }

    /// Full analysis for the hostel whose review pages live under `base_url`
    pub async fn analyze(&self, base_url: &str, keyword: &str) -> Result<Summary> {
        let amenity = self.lexicon.resolve(keyword)?;
        validate_base_url(base_url)?;

        info!("Analysing {} for {} via {}", base_url, keyword, self.source.source_name());
        let reviews = self.scrape(base_url).await?;
        let summary = self.summarize(&reviews, amenity)?;

        info!(
            "Summary for {}: {} reviews, {} mention it ({} positive, {} negative)",
            keyword,
            summary.num,
            summary.positive + summary.negative + summary.zero,
            summary.positive,
            summary.negative
        );
        Ok(summary)
    }

    /// Every review on the hostel's listing pages, in page order
    pub async fn scrape(&self, base_url: &str) -> Result<Vec<Review>> {
        // First page tells us how many pages there are
        let first_url = self.params.page_url(base_url, 1);
        let body = self.source.fetch(&first_url).await?;

        let (pages, mut reviews) = {
            let doc = parse_page(&first_url, &body)?;
            let pages = self.pagination.page_count(&doc)?;
            let reviews = if pages == 0 {
                Vec::new()
            } else {
                self.extractor.reviews(&doc, 1).collect::<Result<Vec<_>>>()?
            };
            (pages, reviews)
        };
        info!("Scraping {} page(s) of reviews", pages);
        debug!("Page 1: {} reviews", reviews.len());

        // Remaining pages, one at a time
        for page in 2..=pages {
            let url = self.params.page_url(base_url, page);
            let body = self.source.fetch(&url).await?;
            let doc = parse_page(&url, &body)?;
            let before = reviews.len();
            for review in self.extractor.reviews(&doc, page) {
                reviews.push(review?);
            }
            debug!("Page {}: {} reviews", page, reviews.len() - before);
        }

        info!("Extracted {} reviews", reviews.len());
        Ok(reviews)
    }

    /// Aggregate already scraped reviews for one amenity
    pub fn summarize(&self, reviews: &[Review], amenity: &Amenity) -> Result<Summary> {
        // Keep only reviews that mention the amenity, then score them
        let mut matched = annotate(reviews, amenity);
        for review in matched.iter_mut() {
            review.sentiment = Some(self.scorer.score(&review.excerpt));
        }
        debug!("{} of {} reviews mention {}", matched.len(), reviews.len(), amenity.name);

        let freq = WordFrequency::count(
            matched.iter().map(|r| r.excerpt.as_str()),
            &self.stopwords,
            amenity,
        );
        summarize(reviews, &matched, &amenity.name, freq.most_common(PHRASE_WORDS))
    }
}

fn validate_base_url(base_url: &str) -> Result<()> {
    let invalid = |reason: &str| AnalysisError::InvalidUrl {
        url: base_url.to_string(),
        reason: reason.to_string(),
    };
    let url = Url::parse(base_url).map_err(|e| invalid(&e.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid("not an http(s) url"));
    }
    if !base_url.ends_with('/') {
        return Err(invalid("review pages are numbered below a path ending in '/'"));
    }
    Ok(())
}
