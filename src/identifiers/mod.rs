/*! Language identification models

Holds a [Predict] trait for implementing other ones.

The current identifier used is [fasttext](https://fasttext.cc) !*/
pub(crate) mod family;
pub(crate) mod identification;
pub(crate) mod model;

pub use family::{FamilyScore, LanguageFamily};
pub use identification::{parse_label, Identification};
pub use model::{FastText, FastTextBuilder, Predict};
