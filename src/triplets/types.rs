//! Sentences, slots and triplets.
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Immutable sentence, with its length in unicode codepoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Sentence {
    text: String,
    length: usize,
}

impl Sentence {
    pub fn new(text: String) -> Self {
        let length = text.chars().count();
        Self { text, length }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters (not bytes).
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn into_inner(self) -> String {
        self.text
    }
}

impl From<String> for Sentence {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for Sentence {
    fn from(text: &str) -> Self {
        Self::new(text.to_string())
    }
}

impl From<Sentence> for String {
    fn from(s: Sentence) -> Self {
        s.text
    }
}

/// A position in a document.
///
/// Gaps are sentences that have been removed upstream. They block contiguity:
/// two sentences separated by a gap are never consecutive.
///
/// Serialized as a string or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<Sentence>", into = "Option<Sentence>")]
pub enum SentenceSlot {
    Present(Sentence),
    Gap,
}

impl SentenceSlot {
    pub fn sentence(&self) -> Option<&Sentence> {
        match self {
            SentenceSlot::Present(s) => Some(s),
            SentenceSlot::Gap => None,
        }
    }

    pub fn is_gap(&self) -> bool {
        matches!(self, SentenceSlot::Gap)
    }

    /// Takes the sentence out, leaving a [SentenceSlot::Gap] in its place.
    pub fn take(&mut self) -> Option<Sentence> {
        match std::mem::replace(self, SentenceSlot::Gap) {
            SentenceSlot::Present(s) => Some(s),
            SentenceSlot::Gap => None,
        }
    }
}

impl From<Option<Sentence>> for SentenceSlot {
    fn from(s: Option<Sentence>) -> Self {
        match s {
            Some(s) => SentenceSlot::Present(s),
            None => SentenceSlot::Gap,
        }
    }
}

impl From<SentenceSlot> for Option<Sentence> {
    fn from(s: SentenceSlot) -> Self {
        match s {
            SentenceSlot::Present(s) => Some(s),
            SentenceSlot::Gap => None,
        }
    }
}

impl From<&str> for SentenceSlot {
    fn from(s: &str) -> Self {
        SentenceSlot::Present(Sentence::from(s))
    }
}

impl From<String> for SentenceSlot {
    fn from(s: String) -> Self {
        SentenceSlot::Present(Sentence::from(s))
    }
}

/// Mean length of the provided lengths.
///
/// Returns [None] on empty input.
pub fn mean_length(lengths: &[usize]) -> Option<f64> {
    if lengths.is_empty() {
        None
    } else {
        Some(lengths.iter().sum::<usize>() as f64 / lengths.len() as f64)
    }
}

/// `|1 - length/mean|`.
///
/// A null mean has no meaningful deviation, [f64::INFINITY] is returned so that
/// no threshold ever accepts it.
pub fn relative_deviation(length: usize, mean: f64) -> f64 {
    if mean <= 0.0 {
        return f64::INFINITY;
    }
    (1.0 - length as f64 / mean).abs()
}

/// Three contiguous sentences, borrowed from a slot sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triplet<'a> {
    sentences: [&'a Sentence; 3],
    start: usize,
}

impl<'a> Triplet<'a> {
    pub(crate) fn new(sentences: [&'a Sentence; 3], start: usize) -> Self {
        Self { sentences, start }
    }

    /// index of the first sentence in the scanned sequence.
    pub fn start(&self) -> usize {
        self.start
    }

    /// indices covered by the triplet in the scanned sequence.
    pub fn span(&self) -> Range<usize> {
        self.start..self.start + 3
    }

    pub fn sentences(&self) -> &[&'a Sentence; 3] {
        &self.sentences
    }

    pub fn texts(&self) -> [&'a str; 3] {
        let [a, b, c] = self.sentences;
        [a.text(), b.text(), c.text()]
    }

    pub fn lengths(&self) -> [usize; 3] {
        let [a, b, c] = self.sentences;
        [a.length(), b.length(), c.length()]
    }

    pub fn mean_length(&self) -> f64 {
        // a triplet is never empty
        mean_length(&self.lengths()).unwrap_or_default()
    }

    /// shift start by `offset` positions.
    pub(crate) fn offset(mut self, offset: usize) -> Self {
        self.start += offset;
        self
    }
}
