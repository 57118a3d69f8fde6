//! Sentence segmentation.
use unicode_segmentation::UnicodeSegmentation;

/// Splits text into an ordered sequence of sentences.
pub trait Segment: Sync {
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Segmenter following Unicode sentence boundaries (UAX #29).
///
/// Sentences are trimmed, and sentences without any alphanumeric character are discarded.
#[derive(Debug, Clone, Default)]
pub struct UnicodeSentences;

impl Segment for UnicodeSentences {
    fn segment(&self, text: &str) -> Vec<String> {
        text.unicode_sentences()
            .map(|s| s.trim().to_string())
            .filter(|s| s.chars().any(char::is_alphanumeric))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_basic_unicode() {
        let txt = "Hello world.  Сәлем әлем!  Бұл үшінші сөйлем.";
        let s = UnicodeSentences.segment(txt);
        assert_eq!(
            s,
            vec!["Hello world.", "Сәлем әлем!", "Бұл үшінші сөйлем."]
        );
    }

    #[test]
    fn empty() {
        assert!(UnicodeSentences.segment("").is_empty());
        assert!(UnicodeSentences.segment("  ... ").is_empty());
    }
}
