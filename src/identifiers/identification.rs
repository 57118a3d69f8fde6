/*! Identification

A language tag and its probability.
!*/
use fasttext::Prediction;
use oxilangtag::{LanguageTag, LanguageTagParseError};

#[derive(Debug, Clone, PartialEq)]
pub struct Identification {
    label: LanguageTag<String>,
    prob: f32,
}

impl Identification {
    pub fn new(label: LanguageTag<String>, prob: f32) -> Self {
        Self { label, prob }
    }

    /// Get a reference to the identification's label.
    pub fn label(&self) -> &LanguageTag<String> {
        &self.label
    }

    /// Get a reference to the identification's prob.
    pub fn prob(&self) -> &f32 {
        &self.prob
    }
}

/// Parse a fasttext-style label (`__label__kk`, `kaz_Cyrl`, `kk`) into a BCP47 tag.
pub fn parse_label(label: &str) -> Result<LanguageTag<String>, LanguageTagParseError> {
    let label = label.strip_prefix("__label__").unwrap_or(label);

    //convert to valid bcp47
    let label = label.replace('_', "-");
    LanguageTag::parse_and_normalize(&label)
}

/// for fasttext predictions
impl TryFrom<Prediction> for Identification {
    type Error = LanguageTagParseError;
    fn try_from(prediction: Prediction) -> Result<Self, LanguageTagParseError> {
        Ok(Self::new(parse_label(&prediction.label)?, prediction.prob))
    }
}
