//! Labeled training examples.
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Whitespace-joined sentences and whether they are in their original order/context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub text: String,
    pub label: bool,
}

impl Example {
    /// Join `sentences` with single spaces.
    pub fn new<S: AsRef<str>>(sentences: &[S], label: bool) -> Self {
        Self {
            text: sentences.iter().map(AsRef::as_ref).join(" "),
            label,
        }
    }
}

/// Examples derived from a single triplet.
///
/// The only positive example is the first one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExampleGroup(Vec<Example>);

impl ExampleGroup {
    pub(crate) fn new(examples: Vec<Example>) -> Self {
        Self(examples)
    }

    pub fn examples(&self) -> &[Example] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The canonical, positive example.
    pub fn positive(&self) -> Option<&Example> {
        self.0.first().filter(|e| e.label)
    }
}

impl IntoIterator for ExampleGroup {
    type Item = Example;
    type IntoIter = std::vec::IntoIter<Example>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join() {
        let e = Example::new(&["foo.", "bar.", "baz."], true);
        assert_eq!(e.text, "foo. bar. baz.");
    }

    #[test]
    fn serialize_group() {
        let g = ExampleGroup::new(vec![
            Example::new(&["a", "b"], true),
            Example::new(&["b", "a"], false),
        ]);
        assert_eq!(
            serde_json::to_string(&g).unwrap(),
            r#"[{"text":"a b","label":true},{"text":"b a","label":false}]"#
        );
        assert_eq!(g.positive().map(|e| e.text.as_str()), Some("a b"));
    }
}
