/*! Text transformers.

Normalize noisy text: markup leftovers, emoticons, missing spaces after dots and whitespace.
Transformers are chained with a [Normalizer].
!*/

mod boundaries;
mod emoticons;
mod markup;
mod normalizer;
mod transform;
mod whitespace;

pub use boundaries::SentenceBoundaries;
pub use emoticons::Emoticons;
pub use markup::{MarkupArtifacts, RuleSpec};
pub use normalizer::Normalizer;
pub use transform::Transform;
pub use whitespace::{Newlines, Whitespace};
