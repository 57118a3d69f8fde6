//! Corpus reading and writing.
pub mod reader;
pub mod writer;

pub use reader::{input_paths, read_documents, Format, RawDocument};
pub use writer::{JsonLinesWriter, Sink};
