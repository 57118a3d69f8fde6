/*! Sentence Order Prediction examples.

Each triplet gives the 6 orderings of its sentences, the original one being the only positive.

Orderings are produced by alternately swapping positions (2, 3) and (1, 2) of the current ordering,
which visits every permutation of 3 elements once:

```text
a b c  (true)
a c b
c a b
c b a
b c a
b a c
```
!*/
use log::trace;

use crate::error::Error;

use super::example::{Example, ExampleGroup};
use super::finder::TripletFinder;
use super::generator::Generate;
use super::types::SentenceSlot;

/// Number of permutations of 3 elements.
const NB_ORDERINGS: usize = 6;

/// Get every ordering of a triplet.
///
/// # Errors
/// Returns [Error::InvalidTripletSize] if `triplet` does not hold exactly 3 sentences.
pub fn shuffle_sop<S: AsRef<str>>(triplet: &[S]) -> Result<ExampleGroup, Error> {
    let mut order: [&str; 3] = match triplet {
        [a, b, c] => [a.as_ref(), b.as_ref(), c.as_ref()],
        _ => return Err(Error::InvalidTripletSize(triplet.len())),
    };

    let mut examples = Vec::with_capacity(NB_ORDERINGS);
    examples.push(Example::new(&order, true));

    for step in 1..NB_ORDERINGS {
        if step % 2 == 1 {
            order.swap(1, 2);
        } else {
            order.swap(0, 1);
        }
        examples.push(Example::new(&order, false));
    }

    Ok(ExampleGroup::new(examples))
}

/// SOP generator: every triplet of a document gives an [ExampleGroup] of 6 examples.
#[derive(Debug, Clone, Default)]
pub struct Sop {
    finder: TripletFinder,
}

impl Sop {
    pub fn new(finder: TripletFinder) -> Self {
        Self { finder }
    }
}

impl Generate for Sop {
    fn generate(&self, slots: Vec<SentenceSlot>) -> Result<Vec<ExampleGroup>, Error> {
        self.finder
            .triplets(&slots)
            .map(|triplet| {
                trace!("sop triplet at {:?}", triplet.span());
                shuffle_sop(&triplet.texts())
            })
            .collect()
    }
}
