/*! Next Sentence Prediction examples.

For each triplet, a substitute sentence of similar length is searched in the rest of the document.
If one is found, it is put in place of each sentence of the triplet in turn:

```text
a b c  (true)
x b c
a x c
a b x
```

The substitute is then removed from the document (replaced by a gap), so that it can't be used again,
and so that it breaks the windows it belonged to.
Triplets without any substitute give no examples.
!*/
use log::trace;

use crate::error::Error;
use crate::filtering::Uniformity;

use super::example::{Example, ExampleGroup};
use super::finder::TripletFinder;
use super::generator::Generate;
use super::types::{Sentence, SentenceSlot, Triplet};

/// Get the triplet with each of its sentences replaced by `sentence`.
///
/// # Errors
/// Returns [Error::InvalidTripletSize] if `triplet` does not hold exactly 3 sentences.
pub fn shuffle_nsp<S: AsRef<str>>(triplet: &[S], sentence: &str) -> Result<ExampleGroup, Error> {
    if triplet.len() != 3 {
        return Err(Error::InvalidTripletSize(triplet.len()));
    }

    let original: Vec<&str> = triplet.iter().map(AsRef::as_ref).collect();
    let mut examples = Vec::with_capacity(4);
    examples.push(Example::new(&original, true));

    for position in 0..original.len() {
        let mut substituted = original.clone();
        substituted[position] = sentence;
        examples.push(Example::new(&substituted, false));
    }

    Ok(ExampleGroup::new(examples))
}

/// Take the first present sentence of `tail` whose length is within `uniformity` of `mean`.
///
/// The slot it occupied becomes a [SentenceSlot::Gap].
pub fn take_substitute(
    tail: &mut [SentenceSlot],
    mean: f64,
    uniformity: &Uniformity,
) -> Option<Sentence> {
    tail.iter_mut()
        .find(|slot| match slot.sentence() {
            Some(s) => uniformity.accepts(s.length(), mean),
            None => false,
        })
        .and_then(SentenceSlot::take)
}

/// NSP generator.
///
/// Triplets are searched from left to right. After each triplet, the substitute search runs on
/// (and mutates) the remainder, and the next triplet search starts on that mutated remainder.
/// The document slots are the only state, hence this loop is sequential.
#[derive(Debug, Clone, Default)]
pub struct Nsp {
    finder: TripletFinder,
}

impl Nsp {
    pub fn new(finder: TripletFinder) -> Self {
        Self { finder }
    }
}

impl Generate for Nsp {
    fn generate(&self, mut slots: Vec<SentenceSlot>) -> Result<Vec<ExampleGroup>, Error> {
        let mut groups = Vec::new();
        let mut pos = 0;

        while let Some(start) = self.finder.find_start(&slots[pos..]) {
            let start = pos + start;
            let end = start + 3;

            // head holds the triplet, tail is the remainder we search (and consume) substitutes in.
            let (head, tail) = slots.split_at_mut(end);
            let triplet = match TripletFinder::window(&head[start..end]) {
                Some(window) => Triplet::new(window, start),
                None => {
                    return Err(Error::Custom(format!(
                        "window at {start} holds a gap after being accepted"
                    )))
                }
            };

            match take_substitute(tail, triplet.mean_length(), self.finder.uniformity()) {
                Some(substitute) => {
                    trace!(
                        "nsp triplet at {:?}, substitute of length {}",
                        triplet.span(),
                        substitute.length()
                    );
                    groups.push(shuffle_nsp(&triplet.texts(), substitute.text())?);
                }
                None => trace!("nsp triplet at {:?} has no substitute", triplet.span()),
            }

            pos = end;
        }

        Ok(groups)
    }
}
