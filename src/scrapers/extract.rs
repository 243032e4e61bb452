use crate::error::{AnalysisError, Result};
use crate::models::Review;
use crate::scrapers::types::ScrapeParams;
use scraper::{ElementRef, Html, Selector};

const RESULTS_SELECTOR: &str = r#"div > div[class="results"]"#;
const REVIEW_SELECTOR: &str = r#"div[class="microreviews rounded"]"#;

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| AnalysisError::layout(format!("bad selector {}: {:?}", css, e)))
}

/// Text nodes that are direct children of `element`, in document order
fn own_text<'a>(element: ElementRef<'a>) -> impl Iterator<Item = &'a str> + 'a {
    element
        .children()
        .filter_map(|node| node.value().as_text())
        .map(|text| &**text)
}

/// Works out how many listing pages to scrape from the first page
pub struct PaginationResolver {
    results: Selector,
    reviews_per_page: u32,
    max_pages: u32,
}

impl PaginationResolver {
    pub fn new(params: &ScrapeParams) -> Result<Self> {
        Ok(Self {
            results: selector(RESULTS_SELECTOR)?,
            reviews_per_page: params.reviews_per_page.max(1),
            max_pages: params.max_pages,
        })
    }

    /// Total review count shown in the results indicator, e.g. `Reviews(1234)`
    pub fn total_reviews(&self, doc: &Html) -> Result<u32> {
        let results = doc
            .select(&self.results)
            .next()
            .ok_or_else(|| AnalysisError::layout("results count indicator not found"))?;
        let text = own_text(results)
            .next()
            .ok_or_else(|| AnalysisError::layout("results count indicator has no text"))?;

        parse_total(text).ok_or_else(|| {
            AnalysisError::layout(format!("unreadable review count {:?}", text.trim()))
        })
    }

    pub fn page_count(&self, doc: &Html) -> Result<u32> {
        Ok(self.pages_for(self.total_reviews(doc)?))
    }

    pub fn pages_for(&self, total: u32) -> u32 {
        total.div_ceil(self.reviews_per_page).min(self.max_pages)
    }
}

fn parse_total(text: &str) -> Option<u32> {
    let first = text.split_whitespace().next()?;
    let (_, count) = first.split_once('(')?;
    count.trim_end_matches(')').replace(',', "").parse().ok()
}

/// Pulls review records out of a parsed listing page
pub struct ReviewExtractor {
    block: Selector,
    div: Selector,
    paragraph: Selector,
}

impl ReviewExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            block: selector(REVIEW_SELECTOR)?,
            div: selector("div")?,
            paragraph: selector("div > p")?,
        })
    }

    /// Reviews of one page in document order. A malformed block yields an
    /// error item rather than being skipped.
    pub fn reviews<'a>(
        &'a self,
        doc: &'a Html,
        page: u32,
    ) -> impl Iterator<Item = Result<Review>> + 'a {
        doc.select(&self.block)
            .enumerate()
            .map(move |(idx, block)| self.review(block, page, idx))
    }

    fn review(&self, block: ElementRef<'_>, page: u32, idx: usize) -> Result<Review> {
        let rating_text = block
            .select(&self.div)
            .nth(1)
            .and_then(|div| own_text(div).map(str::trim).find(|t| !t.is_empty()))
            .ok_or_else(|| {
                AnalysisError::layout(format!("review {} on page {} has no rating", idx, page))
            })?;
        let rating = parse_rating(rating_text).ok_or_else(|| {
            AnalysisError::layout(format!(
                "review {} on page {} has unreadable rating {:?}",
                idx, page, rating_text
            ))
        })?;

        let mut paragraphs = block.select(&self.paragraph).peekable();
        if paragraphs.peek().is_none() {
            return Err(AnalysisError::layout(format!(
                "review {} on page {} has no text",
                idx, page
            )));
        }
        let text: String = paragraphs.flat_map(own_text).collect();

        Ok(Review {
            rating,
            text: text.trim().to_string(),
            page,
        })
    }
}

/// "80%" -> 80
pub fn parse_rating(raw: &str) -> Option<u8> {
    raw.replace('%', "")
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|rating| *rating <= 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::scrapers::fixtures::listing_page;

    fn resolver() -> PaginationResolver {
        PaginationResolver::new(&ScrapeParams::default()).unwrap()
    }

    #[test]
    fn reads_total_from_results_indicator() {
        let doc = Html::parse_document(&listing_page(57, &[]));
        assert_eq!(resolver().total_reviews(&doc).unwrap(), 57);
        assert_eq!(resolver().page_count(&doc).unwrap(), 3);
    }

    #[test]
    fn page_count_is_capped() {
        let r = resolver();
        assert_eq!(r.pages_for(10_000), 25);
        assert_eq!(r.pages_for(500), 25);
        assert_eq!(r.pages_for(40), 2);
        assert_eq!(r.pages_for(41), 3);
        assert_eq!(r.pages_for(0), 0);
    }

    #[test]
    fn parses_indicator_variants() {
        assert_eq!(parse_total("(1234 Reviews)"), Some(1234));
        assert_eq!(parse_total("Reviews(1,234)"), Some(1234));
        assert_eq!(parse_total("Reviews 1234"), None);
        assert_eq!(parse_total(""), None);
    }

    #[test]
    fn missing_indicator_is_a_layout_error() {
        let doc = Html::parse_document("<html><body><div><p>moved</p></div></body></html>");
        assert_eq!(resolver().page_count(&doc).unwrap_err().kind(), ErrorKind::Layout);

        let doc = Html::parse_document(
            r#"<html><body><div><div class="results">Reviews</div></div></body></html>"#,
        );
        assert_eq!(resolver().page_count(&doc).unwrap_err().kind(), ErrorKind::Layout);
    }

    #[test]
    fn extracts_rating_text_and_page() {
        let html = listing_page(2, &[(80, "Great wifi! Bad breakfast."), (35, "Too loud.")]);
        let doc = Html::parse_document(&html);
        let extractor = ReviewExtractor::new().unwrap();
        let reviews: Vec<Review> = extractor.reviews(&doc, 4).collect::<Result<_>>().unwrap();

        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].rating, 80);
        assert_eq!(reviews[0].text, "Great wifi! Bad breakfast.");
        assert_eq!(reviews[0].page, 4);
        assert_eq!(reviews[1].rating, 35);
    }

    #[test]
    fn joins_paragraphs_without_separator() {
        let html = r#"<html><body>
            <div class="microreviews rounded">
              <div class="user">Ana</div>
              <div class="rating">90%</div>
              <div class="body"><p> Lovely staff.</p><p>Fast wifi. </p></div>
            </div>
        </body></html>"#;
        let doc = Html::parse_document(html);
        let extractor = ReviewExtractor::new().unwrap();
        let review = extractor.reviews(&doc, 1).next().unwrap().unwrap();
        assert_eq!(review.text, "Lovely staff.Fast wifi.");
        assert_eq!(review.rating, 90);
    }

    #[test]
    fn review_without_rating_fails_loudly() {
        let html = r#"<html><body>
            <div class="microreviews rounded">
              <div class="body"><p>No score here.</p></div>
            </div>
        </body></html>"#;
        let doc = Html::parse_document(html);
        let extractor = ReviewExtractor::new().unwrap();
        let err = extractor.reviews(&doc, 1).next().unwrap().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Layout);
    }

    #[test]
    fn review_without_paragraphs_fails_loudly() {
        let html = r#"<html><body>
            <div class="microreviews rounded">
              <div class="user">Ana</div>
              <div class="rating">70%</div>
            </div>
        </body></html>"#;
        let doc = Html::parse_document(html);
        let extractor = ReviewExtractor::new().unwrap();
        let err = extractor.reviews(&doc, 1).next().unwrap().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Layout);
    }

    #[test]
    fn rating_parse() {
        assert_eq!(parse_rating("80%"), Some(80));
        assert_eq!(parse_rating(" 100 % "), Some(100));
        assert_eq!(parse_rating("101%"), None);
        assert_eq!(parse_rating("great"), None);
    }
}
