pub mod extract;
pub mod hostelworld;
pub mod traits;
pub mod types;

#[cfg(test)]
pub mod fixtures;

pub use extract::{PaginationResolver, ReviewExtractor};
pub use hostelworld::{parse_page, HostelworldSource};
pub use traits::PageSource;
pub use types::ScrapeParams;
