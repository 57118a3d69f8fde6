//! Transform trait.
use log::{log_enabled, trace, Level};
use regex::Regex;

pub trait Transform {
    /// Takes ownership of the text and returns it.
    fn transform_own(&self, text: String) -> String;
}

/// Replace every match of `re`, logging removed fragments at trace level.
///
/// Does not allocate when nothing matches.
pub(crate) fn replace_all(re: &Regex, text: String, replacement: &str) -> String {
    if !re.is_match(&text) {
        return text;
    }
    if log_enabled!(Level::Trace) {
        let found: Vec<&str> = re.find_iter(&text).map(|m| m.as_str()).collect();
        trace!("replacing {:?} by {:?}", found, replacement);
    }
    re.replace_all(&text, replacement).into_owned()
}
