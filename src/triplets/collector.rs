//! Collects every triplet of a document.
use super::finder::TripletFinder;
use super::types::{SentenceSlot, Triplet};

/// Iterator over the non-overlapping triplets of a slot sequence.
///
/// Each step runs the [TripletFinder] on the remainder left by the previous step,
/// so the scan never goes back. Triplet starts are absolute indices in the
/// original sequence.
pub struct TripletCollector<'f, 'a> {
    finder: &'f TripletFinder,
    rest: &'a [SentenceSlot],
    offset: usize,
}

impl<'f, 'a> TripletCollector<'f, 'a> {
    pub fn new(finder: &'f TripletFinder, slots: &'a [SentenceSlot]) -> Self {
        Self {
            finder,
            rest: slots,
            offset: 0,
        }
    }
}

impl<'f, 'a> Iterator for TripletCollector<'f, 'a> {
    type Item = Triplet<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (triplet, rest) = self.finder.find(self.rest)?;
        let triplet = triplet.offset(self.offset);

        self.offset = triplet.span().end;
        self.rest = rest;
        Some(triplet)
    }
}

impl TripletFinder {
    /// Iterate over all triplets of `slots`.
    pub fn triplets<'f, 'a>(&'f self, slots: &'a [SentenceSlot]) -> TripletCollector<'f, 'a> {
        TripletCollector::new(self, slots)
    }
}

/// Get all triplets of `slots`, in order.
pub fn find_all_triplets<'a>(finder: &TripletFinder, slots: &'a [SentenceSlot]) -> Vec<Triplet<'a>> {
    finder.triplets(slots).collect()
}
