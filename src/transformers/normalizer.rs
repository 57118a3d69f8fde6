//! Normalizer chains transforms, applying them in order in one step.
use super::{
    Emoticons, MarkupArtifacts, Newlines, SentenceBoundaries, Transform, Whitespace,
};

pub struct Normalizer(Vec<Box<dyn Transform + Sync>>);

impl Normalizer {
    pub fn add(&mut self, transform: Box<dyn Transform + Sync>) -> &mut Normalizer {
        self.0.push(transform);
        self
    }

    /// Document-level normalization, done before segmentation:
    /// lines are joined, missing spaces after dots are added and whitespace is collapsed.
    pub fn document() -> Self {
        let mut n = Self::default();
        n.add(Box::new(Newlines))
            .add(Box::new(SentenceBoundaries))
            .add(Box::new(Whitespace));
        n
    }

    /// Sentence-level normalization, done after segmentation.
    pub fn sentence(markup: MarkupArtifacts) -> Self {
        let mut n = Self::default();
        n.add(Box::new(markup))
            .add(Box::new(Emoticons))
            .add(Box::new(SentenceBoundaries))
            .add(Box::new(Whitespace));
        n
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Transform for Normalizer {
    fn transform_own(&self, text: String) -> String {
        let text = self
            .0
            .iter()
            .fold(text, |text, transform| transform.transform_own(text));

        let trimmed = text.trim();
        if trimmed.len() == text.len() {
            text
        } else {
            trimmed.to_string()
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self(vec![])
    }
}
