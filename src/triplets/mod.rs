/*! Triplet mining and example generation.

A document is a sequence of [SentenceSlot]s, some of them being gaps left by upstream filtering.

- [TripletFinder] finds the earliest triplet of a sequence: 3 consecutive, gap-free sentences
  of similar length, whose mean length is within bounds.
- [TripletCollector] iterates over all non-overlapping triplets of a document.
- [Sop] and [Nsp] turn triplets into labeled [ExampleGroup]s, for Sentence Order Prediction
  and Next Sentence Prediction.
!*/
mod collector;
mod example;
mod finder;
mod generator;
mod input;
mod nsp;
mod sop;
pub mod types;

pub use collector::{find_all_triplets, TripletCollector};
pub use example::{Example, ExampleGroup};
pub use finder::TripletFinder;
pub use generator::{Generate, Task};
pub use input::TextInput;
pub use nsp::{shuffle_nsp, take_substitute, Nsp};
pub use sop::{shuffle_sop, Sop};
pub use types::{Sentence, SentenceSlot, Triplet};

#[cfg(test)]
pub(crate) mod testing {
    use super::SentenceSlot;

    /// sentences of provided lengths, [None] being a gap.
    ///
    /// Each sentence repeats a letter depending on its index, so that sentences are distinct.
    pub fn slots(lengths: &[Option<usize>]) -> Vec<SentenceSlot> {
        lengths
            .iter()
            .enumerate()
            .map(|(idx, length)| match length {
                Some(l) => {
                    let c = char::from(b'a' + (idx % 26) as u8);
                    SentenceSlot::from(std::iter::repeat(c).take(*l).collect::<String>())
                }
                None => SentenceSlot::Gap,
            })
            .collect()
    }
}
