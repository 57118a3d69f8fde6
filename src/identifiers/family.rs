/*! Language family

A set of target languages. Sentences are scored by the total probability mass the identifier
puts on the family.
!*/
use std::collections::HashSet;

use oxilangtag::LanguageTag;

use crate::error::Error;

use super::identification::{parse_label, Identification};

/// Probability mass on the family and outside of it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FamilyScore {
    pub family: f32,
    pub other: f32,
}

#[derive(Debug, Clone)]
pub struct LanguageFamily {
    members: HashSet<String>,
}

impl LanguageFamily {
    /// Build a family from language labels (`kk`, `__label__kk`, `kaz`...).
    ///
    /// Members are matched on their primary language subtag.
    pub fn new<S: AsRef<str>>(labels: &[S]) -> Result<Self, Error> {
        let members = labels
            .iter()
            .map(|l| parse_label(l.as_ref()).map(|tag| tag.primary_language().to_string()))
            .collect::<Result<HashSet<_>, _>>()?;
        Ok(Self { members })
    }

    pub fn contains(&self, tag: &LanguageTag<String>) -> bool {
        self.members.contains(tag.primary_language())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Sum identification probabilities, splitting them between family and other languages.
    pub fn score(&self, identifications: &[Identification]) -> FamilyScore {
        identifications
            .iter()
            .fold(FamilyScore::default(), |mut score, id| {
                if self.contains(id.label()) {
                    score.family += id.prob();
                } else {
                    score.other += id.prob();
                }
                score
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(label: &str, prob: f32) -> Identification {
        Identification::new(parse_label(label).unwrap(), prob)
    }

    #[test]
    fn build() {
        let f = LanguageFamily::new(&["kk", "__label__ky", "tat_Cyrl"]).unwrap();
        assert_eq!(f.len(), 3);
        assert!(f.contains(&parse_label("kk").unwrap()));
        assert!(f.contains(&parse_label("tat").unwrap()));
        assert!(!f.contains(&parse_label("ru").unwrap()));
    }

    #[test]
    fn invalid_label() {
        assert!(LanguageFamily::new(&["not a tag"]).is_err());
    }

    #[test]
    fn score() {
        let f = LanguageFamily::new(&["kk", "ky", "tt"]).unwrap();
        let ids = vec![id("kk", 0.5), id("ru", 0.3), id("ky", 0.1), id("en", 0.05)];
        let score = f.score(&ids);

        assert!((score.family - 0.6).abs() < 1e-6);
        assert!((score.other - 0.35).abs() < 1e-6);
        assert_eq!(f.score(&[]), FamilyScore::default());
    }
}
