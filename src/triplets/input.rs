//! Raw or already segmented document text.
use serde_json::Value;

use crate::error::Error;
use crate::segmenter::Segment;

use super::types::{Sentence, SentenceSlot};

/// Document text, either raw or already split into sentences (with possible gaps).
#[derive(Debug, Clone, PartialEq)]
pub enum TextInput {
    Raw(String),
    Segmented(Vec<SentenceSlot>),
}

impl TextInput {
    /// Get the slots, segmenting raw text with `segmenter`.
    pub fn into_slots<S: Segment + ?Sized>(self, segmenter: &S) -> Vec<SentenceSlot> {
        match self {
            TextInput::Raw(text) => segmenter
                .segment(&text)
                .into_iter()
                .map(SentenceSlot::from)
                .collect(),
            TextInput::Segmented(slots) => slots,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            TextInput::Raw(text) => text.trim().is_empty(),
            TextInput::Segmented(slots) => slots.iter().all(SentenceSlot::is_gap),
        }
    }
}

/// name of the JSON type, for error messages
fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl TryFrom<Value> for TextInput {
    type Error = Error;

    /// strings are raw text, arrays of strings and nulls are segmented text.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(TextInput::Raw(text)),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(SentenceSlot::Present(Sentence::new(s))),
                    Value::Null => Ok(SentenceSlot::Gap),
                    other => Err(Error::InvalidInputType(format!(
                        "{} in a sentence list",
                        json_type(&other)
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(TextInput::Segmented),
            other => Err(Error::InvalidInputType(json_type(&other).to_string())),
        }
    }
}

impl From<String> for TextInput {
    fn from(text: String) -> Self {
        TextInput::Raw(text)
    }
}

impl From<Vec<SentenceSlot>> for TextInput {
    fn from(slots: Vec<SentenceSlot>) -> Self {
        TextInput::Segmented(slots)
    }
}
