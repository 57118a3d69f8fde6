/*! Filtering utilities

Filters operate on sentence windows (triplet candidates) or on scored sentences (language filtering).

Filters implement [filter::Filter]: they are pure and hold their thresholds only,
so that one instance can be shared between threads.
!*/
mod filter;
pub mod language;
pub mod sentence;

pub use filter::Filter;
pub use language::{ContextFilter, DocumentSize, FilteredDocument, ScoredSentence, Threshold};
pub use sentence::{MeanLength, Uniformity};
