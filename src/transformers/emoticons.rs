//! Removes emoticons, pictographs and flags.
use lazy_static::lazy_static;
use regex::Regex;

use super::transform::{replace_all, Transform};

lazy_static! {
    static ref EMOTICONS: Regex = Regex::new(concat!(
        "[",
        "\u{1F600}-\u{1F64F}", // emoticons
        "\u{1F300}-\u{1F5FF}", // symbols & pictographs
        "\u{1F680}-\u{1F6FF}", // transport & map symbols
        "\u{1F1E0}-\u{1F1FF}", // flags
        "]+"
    ))
    .unwrap();
}

#[derive(Debug, Clone, Default)]
pub struct Emoticons;

impl Transform for Emoticons {
    fn transform_own(&self, text: String) -> String {
        replace_all(&EMOTICONS, text, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove() {
        let text = "Сәлем 😀😀 досым 🚀! 🇰🇿".to_string();
        assert_eq!(Emoticons.transform_own(text), "Сәлем  досым ! ");
    }

    #[test]
    fn keep_other_symbols() {
        let text = "Prices: 5€, 10% ♥".to_string();
        assert_eq!(Emoticons.transform_own(text.clone()), text);
    }
}
