/*! Triplet discovery.

A triplet is a window of 3 consecutive present slots whose mean length is within bounds
and whose sentence lengths are close to that mean.

Windows are tried one index at a time (not in steps of 3), so that every candidate window is checked
before the scan moves past it.
!*/
use crate::config::TripletConfig;
use crate::filtering::{Filter, MeanLength, Uniformity};

use super::types::{Sentence, SentenceSlot, Triplet};

/// Finds the earliest valid triplet of a slot sequence.
#[derive(Debug, Clone, Default)]
pub struct TripletFinder {
    mean_length: MeanLength,
    uniformity: Uniformity,
}

impl TripletFinder {
    pub fn new(config: &TripletConfig) -> Self {
        Self {
            mean_length: MeanLength::new(config.min_l_sent, config.max_l_sent),
            uniformity: Uniformity::new(config.k),
        }
    }

    pub fn uniformity(&self) -> &Uniformity {
        &self.uniformity
    }

    /// Returns the earliest triplet and the remainder of the sequence, that is everything
    /// strictly after the triplet.
    ///
    /// The triplet start is relative to `slots`.
    /// Returns [None] when no window is valid: the sequence is exhausted.
    pub fn find<'a>(
        &self,
        slots: &'a [SentenceSlot],
    ) -> Option<(Triplet<'a>, &'a [SentenceSlot])> {
        let start = self.find_start(slots)?;
        let triplet = Self::window(&slots[start..start + 3]).map(|w| Triplet::new(w, start))?;
        Some((triplet, &slots[start + 3..]))
    }

    /// Index of the first slot of the earliest valid window.
    pub(crate) fn find_start(&self, slots: &[SentenceSlot]) -> Option<usize> {
        slots
            .windows(3)
            .position(|window| match Self::window(window) {
                Some(sentences) => self.accepts(&sentences),
                None => false,
            })
    }

    /// Get the 3 sentences of a window, or [None] if the window holds a gap.
    pub(crate) fn window(window: &[SentenceSlot]) -> Option<[&Sentence; 3]> {
        match window {
            [SentenceSlot::Present(a), SentenceSlot::Present(b), SentenceSlot::Present(c)] => {
                Some([a, b, c])
            }
            _ => None,
        }
    }

    fn accepts(&self, sentences: &[&Sentence; 3]) -> bool {
        let lengths = sentences.map(|s| s.length());
        self.mean_length.detect(&lengths[..]) && self.uniformity.detect(&lengths[..])
    }
}
