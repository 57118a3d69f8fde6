//! Error enum
use std::fmt;

use oxilangtag::LanguageTagParseError;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Csv(csv::Error),
    Glob(glob::GlobError),
    GlobPattern(glob::PatternError),
    Regex(regex::Error),
    LanguageTag(LanguageTagParseError),
    FastText(String),
    /// Input that is neither raw text nor a segmented sentence sequence.
    InvalidInputType(String),
    /// Example generation was given something else than 3 sentences.
    InvalidTripletSize(usize),
    InvalidConfig(String),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::Serde(e) => write!(f, "json error: {e}"),
            Error::Csv(e) => write!(f, "csv error: {e}"),
            Error::Glob(e) => write!(f, "glob error: {e}"),
            Error::GlobPattern(e) => write!(f, "invalid glob pattern: {e}"),
            Error::Regex(e) => write!(f, "invalid regex: {e}"),
            Error::LanguageTag(e) => write!(f, "invalid language tag: {e:?}"),
            Error::FastText(e) => write!(f, "fasttext error: {e}"),
            Error::InvalidInputType(t) => write!(
                f,
                "expected raw text or a list of sentences, got {t}"
            ),
            Error::InvalidTripletSize(n) => {
                write!(f, "a triplet holds exactly 3 sentences, got {n}")
            }
            Error::InvalidConfig(e) => write!(f, "invalid configuration: {e}"),
            Error::Custom(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// The underlying reader failed (truncated or corrupt file), as opposed to a malformed record.
    pub fn is_read_error(&self) -> bool {
        match self {
            Error::Io(_) => true,
            Error::Csv(e) => e.is_io_error(),
            _ => false,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<glob::GlobError> for Error {
    fn from(e: glob::GlobError) -> Error {
        Error::Glob(e)
    }
}

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Error {
        Error::GlobPattern(e)
    }
}

impl From<regex::Error> for Error {
    fn from(e: regex::Error) -> Error {
        Error::Regex(e)
    }
}

impl From<LanguageTagParseError> for Error {
    fn from(e: LanguageTagParseError) -> Error {
        Error::LanguageTag(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
