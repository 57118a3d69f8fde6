/*! Removes markup artifacts (HTML leftovers, URLs, citation markers...)

Artifacts are described by an ordered set of rules.
Each rule has several patterns sharing the same replacement.

Rules can be loaded from a JSON file:

```json
[
    {"patterns": ["<[^>]+>"], "replacement": ""},
    {"patterns": ["&nbsp;", "&#160;"], "replacement": " "}
]
```
!*/
use std::{fs::File, io::BufReader, path::Path};

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::transform::{replace_all, Transform};
use crate::error::Error;

/// Serializable rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub patterns: Vec<String>,
    #[serde(default)]
    pub replacement: String,
}

impl RuleSpec {
    fn new(patterns: &[&str], replacement: &str) -> Self {
        Self {
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            replacement: replacement.to_string(),
        }
    }

    /// Default artifact rules.
    pub fn defaults() -> Vec<RuleSpec> {
        vec![
            // html tags
            RuleSpec::new(&[r"</?[a-zA-Z][^<>]{0,200}>"], ""),
            // html entities
            RuleSpec::new(&[r"&[a-zA-Z]{2,8};", r"&#x?[0-9a-fA-F]{1,6};"], " "),
            // links
            RuleSpec::new(&[r"https?://\S+", r"www\.\S+"], ""),
            // citation markers and wiki templates
            RuleSpec::new(&[r"\[\d{1,3}\]", r"\{\{[^{}]*\}\}"], ""),
        ]
    }
}

/// Compiled rule.
#[derive(Debug, Clone)]
struct Rule {
    patterns: Vec<Regex>,
    replacement: String,
}

impl TryFrom<RuleSpec> for Rule {
    type Error = Error;

    fn try_from(spec: RuleSpec) -> Result<Self, Self::Error> {
        let patterns = spec
            .patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            patterns,
            replacement: spec.replacement,
        })
    }
}

#[derive(Debug, Clone)]
pub struct MarkupArtifacts {
    rules: Vec<Rule>,
}

impl MarkupArtifacts {
    pub fn new(specs: Vec<RuleSpec>) -> Result<Self, Error> {
        let rules = specs
            .into_iter()
            .map(Rule::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Load rules from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let f = File::open(path)?;
        let specs: Vec<RuleSpec> = serde_json::from_reader(BufReader::new(f))?;
        Self::new(specs)
    }
}

impl Default for MarkupArtifacts {
    fn default() -> Self {
        // default patterns are known to be valid
        let rules = RuleSpec::defaults()
            .into_iter()
            .filter_map(|spec| Rule::try_from(spec).ok())
            .collect();
        Self { rules }
    }
}

impl Transform for MarkupArtifacts {
    fn transform_own(&self, text: String) -> String {
        self.rules.iter().fold(text, |text, rule| {
            rule.patterns
                .iter()
                .fold(text, |text, re| replace_all(re, text, &rule.replacement))
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_compile() {
        assert_eq!(
            MarkupArtifacts::default().rules.len(),
            RuleSpec::defaults().len()
        );
    }

    #[test]
    fn remove_html() {
        let m = MarkupArtifacts::default();
        let text = "<p>Бүгін&nbsp;ауа райы <b>жақсы</b>.</p>".to_string();
        assert_eq!(m.transform_own(text), "Бүгін ауа райы жақсы.");
    }

    #[test]
    fn remove_links_and_refs() {
        let m = MarkupArtifacts::default();
        let text = "See https://example.com/page?id=2 for more[12].{{cite web}}".to_string();
        assert_eq!(m.transform_own(text), "See  for more.");
    }

    #[test]
    fn untouched() {
        let m = MarkupArtifacts::default();
        let text = "Nothing to see here, 3 < 4 and 5 > 2.".to_string();
        assert_eq!(m.transform_own(text.clone()), text);
    }

    #[test]
    fn from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, r#"[{{"patterns": ["foo", "ba+r"], "replacement": "X"}}]"#).unwrap();

        let m = MarkupArtifacts::from_path(f.path()).unwrap();
        assert_eq!(m.transform_own("foo baaar baz".to_string()), "X X baz");
    }

    #[test]
    fn invalid_pattern() {
        let spec = RuleSpec::new(&["(unclosed"], "");
        assert!(matches!(
            MarkupArtifacts::new(vec![spec]),
            Err(Error::Regex(_))
        ));
    }
}
