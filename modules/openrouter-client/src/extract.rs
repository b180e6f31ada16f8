//! Completion-text extraction over the backend's possible response shapes.
//!
//! Each strategy is a pure function from the raw response to an optional
//! extracted value; strategies are tried in priority order and the first
//! success wins.

use serde_json::Value;

type Strategy = fn(&Value) -> Option<String>;

const STRATEGIES: &[Strategy] = &[
    choices_message_content,
    response_field,
    text_field,
    content_field,
];

pub fn completion_text(raw: &Value) -> Option<String> {
    STRATEGIES.iter().find_map(|extract| extract(raw))
}

fn choices_message_content(raw: &Value) -> Option<String> {
    raw.get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
        .map(str::to_owned)
}

fn response_field(raw: &Value) -> Option<String> {
    raw.get("response")?.as_str().map(str::to_owned)
}

fn text_field(raw: &Value) -> Option<String> {
    raw.get("text")?.as_str().map(str::to_owned)
}

fn content_field(raw: &Value) -> Option<String> {
    raw.get("content")?.as_str().map(str::to_owned)
}
