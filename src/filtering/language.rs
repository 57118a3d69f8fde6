/*! Language family filtering with context rescue.

Sentences whose family probability is above a threshold are kept.
A sentence under the threshold is kept anyway when both of its neighbours are above it
(short or ambiguous sentences inside a text in the right language).

Other sentences are replaced by a gap. Consecutive removals give a single gap,
and gaps at the start/end of the document are stripped.

```text
kk  0.9   ->  kk
kk  0.1   ->  kk   (rescued)
kk  0.8   ->  kk
ru  0.0   ->  gap
ru  0.1
kk  0.7   ->  kk
en  0.0        (stripped)
```

Sentences at the start or end of the document have a single neighbour and are never rescued.
!*/
use super::Filter;
use crate::config::LanguageFilterConfig;
use crate::identifiers::FamilyScore;
use crate::triplets::types::{Sentence, SentenceSlot};

/// Sentence with its language family score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence {
    pub text: String,
    pub score: FamilyScore,
}

impl ScoredSentence {
    pub fn new(text: String, score: FamilyScore) -> Self {
        Self { text, score }
    }
}

/// Family probability threshold. Detects probabilities strictly above `p_valid`.
#[derive(Debug, Clone)]
pub struct Threshold {
    p_valid: f32,
}

impl Threshold {
    pub fn new(p_valid: f32) -> Self {
        Self { p_valid }
    }
}

impl Filter<f32> for Threshold {
    fn detect(&self, prob: f32) -> bool {
        prob > self.p_valid
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::new(LanguageFilterConfig::default().p_valid)
    }
}

/// Result of filtering a document.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredDocument {
    pub slots: Vec<SentenceSlot>,
    /// `true` if at least one sentence has been removed
    pub processed: bool,
}

impl FilteredDocument {
    pub fn nb_present(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_gap()).count()
    }
}

/// Document size filter.
///
/// Detects documents holding at least one sentence and, if `drop_small` is set,
/// at least `min_slots` slots (gaps included).
#[derive(Debug, Clone)]
pub struct DocumentSize {
    drop_small: bool,
    min_slots: usize,
}

impl DocumentSize {
    pub fn new(drop_small: bool, min_slots: usize) -> Self {
        Self {
            drop_small,
            min_slots,
        }
    }
}

impl Filter<&FilteredDocument> for DocumentSize {
    fn detect(&self, doc: &FilteredDocument) -> bool {
        if doc.nb_present() == 0 {
            return false;
        }
        !(self.drop_small && doc.slots.len() < self.min_slots)
    }
}

impl Default for DocumentSize {
    fn default() -> Self {
        let c = LanguageFilterConfig::default();
        Self::new(c.drop_small, c.small_text_range)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContextFilter {
    threshold: Threshold,
    size: DocumentSize,
}

impl ContextFilter {
    pub fn new(config: &LanguageFilterConfig) -> Self {
        Self {
            threshold: Threshold::new(config.p_valid),
            size: DocumentSize::new(config.drop_small, config.small_text_range),
        }
    }

    /// Filter sentences, replacing removed runs by a single gap.
    pub fn filter(&self, sentences: Vec<ScoredSentence>) -> FilteredDocument {
        let valid: Vec<bool> = sentences
            .iter()
            .map(|s| self.threshold.detect(s.score.family))
            .collect();

        let mut slots: Vec<SentenceSlot> = Vec::with_capacity(sentences.len());
        let mut processed = false;

        for (idx, sentence) in sentences.into_iter().enumerate() {
            if valid[idx] || Self::rescued(&valid, idx) {
                slots.push(SentenceSlot::Present(Sentence::new(sentence.text)));
            } else {
                processed = true;
                // no leading gap, no consecutive gaps
                if matches!(slots.last(), Some(SentenceSlot::Present(_))) {
                    slots.push(SentenceSlot::Gap);
                }
            }
        }

        // strip trailing gap
        if matches!(slots.last(), Some(SentenceSlot::Gap)) {
            slots.pop();
        }

        FilteredDocument { slots, processed }
    }

    /// both neighbours exist and are valid.
    fn rescued(valid: &[bool], idx: usize) -> bool {
        if idx == 0 || idx + 1 >= valid.len() {
            return false;
        }
        valid[idx - 1] && valid[idx + 1]
    }

    /// Should the document be kept?
    pub fn keep(&self, doc: &FilteredDocument) -> bool {
        self.size.detect(doc)
    }
}
