//! Fixes missing spaces after sentence-ending dots.
//!
//! `сөз.Келесі` becomes `сөз. Келесі`: a lowercase letter, a dot,
//! then an uppercase letter, a digit or a `#`.
use lazy_static::lazy_static;
use regex::Regex;

use super::transform::{replace_all, Transform};

lazy_static! {
    static ref MISSING_SPACE: Regex = Regex::new(r"(\p{Ll})\.([\p{Lu}\p{Nd}#])").unwrap();
}

#[derive(Debug, Clone, Default)]
pub struct SentenceBoundaries;

impl Transform for SentenceBoundaries {
    fn transform_own(&self, text: String) -> String {
        replace_all(&MISSING_SPACE, text, "$1. $2")
    }
}
