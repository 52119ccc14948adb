mod aggregator;
mod category;
mod date;
mod media;
mod models;
mod source;

pub use aggregator::{ContentAggregator, LoadState};
pub use category::{CategoryCount, CategoryFilter, ALL_CATEGORY};
pub use date::{byline, format_ordinal_date, format_short_date, ordinal_suffix, DATE_PLACEHOLDER};
pub use media::MediaResolver;
pub use models::{ContentEnvelope, ContentItem, MediaRef};
pub use source::{ContentSource, HttpContentSource};
