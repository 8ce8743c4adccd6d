//! External collaborators consumed by the host layer.

pub mod quote;

pub use quote::{CachedQuoteService, MisQuoteFetcher, QuoteError, QuoteFetcher};
