//! Whitespace normalization.
use lazy_static::lazy_static;
use regex::Regex;

use super::transform::{replace_all, Transform};

lazy_static! {
    static ref DUP_SPACES: Regex = Regex::new(r"[ _\t]+").unwrap();
    static ref NEWLINES: Regex = Regex::new(r"[\r\n]+").unwrap();
}

/// Collapses runs of spaces, tabs and underscores into a single space.
#[derive(Debug, Clone, Default)]
pub struct Whitespace;

impl Transform for Whitespace {
    fn transform_own(&self, text: String) -> String {
        replace_all(&DUP_SPACES, text, " ")
    }
}

/// Replaces line breaks by a space, joining lines into a single paragraph.
#[derive(Debug, Clone, Default)]
pub struct Newlines;

impl Transform for Newlines {
    fn transform_own(&self, text: String) -> String {
        replace_all(&NEWLINES, text, " ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse() {
        let text = "foo  \t bar___baz _ quux".to_string();
        assert_eq!(Whitespace.transform_own(text), "foo bar baz quux");
    }

    #[test]
    fn join_lines() {
        let text = "first line\r\nsecond line\n\nthird".to_string();
        assert_eq!(
            Newlines.transform_own(text),
            "first line second line third"
        );
    }
}
