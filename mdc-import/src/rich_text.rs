//! Portable-text rich text
//!
//! Rich text fields hold a single `normal` paragraph block with one span.
//! Markup sources are flattened to plain text first: tags are removed,
//! whitespace runs collapse to one space. Lists, links and emphasis are not
//! preserved.

use mdc_common::keys;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));
static WHITESPACE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Rich text value: a list of blocks
pub type RichText = Vec<Block>;

/// Paragraph block
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    #[serde(rename = "_type")]
    pub block_type: &'static str,
    #[serde(rename = "_key")]
    pub key: String,
    pub style: &'static str,
    pub children: Vec<Span>,
    pub mark_defs: Vec<serde_json::Value>,
}

/// Text run inside a block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Span {
    #[serde(rename = "_type")]
    pub span_type: &'static str,
    #[serde(rename = "_key")]
    pub key: String,
    pub text: String,
    pub marks: Vec<String>,
}

/// Wrap plain text in a single paragraph; `None` for blank text
pub fn from_text(text: &str) -> Option<RichText> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    Some(vec![Block {
        block_type: "block",
        key: keys::generate(),
        style: "normal",
        children: vec![Span {
            span_type: "span",
            key: keys::generate(),
            text: text.to_string(),
            marks: Vec::new(),
        }],
        mark_defs: Vec::new(),
    }])
}

/// Flatten markup to text, then wrap it like [`from_text`]
pub fn from_markup(markup: &str) -> Option<RichText> {
    from_text(&strip_markup(markup))
}

/// Remove tags and collapse whitespace
pub fn strip_markup(markup: &str) -> String {
    let without_tags = TAG_PATTERN.replace_all(markup, "");
    WHITESPACE_PATTERN
        .replace_all(&without_tags, " ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_is_absent() {
        assert!(from_text("").is_none());
        assert!(from_text(" \n\t ").is_none());
    }

    #[test]
    fn test_text_block_shape() {
        let rich = from_text("  To serve the residents.  ").unwrap();
        assert_eq!(rich.len(), 1);
        assert_eq!(rich[0].style, "normal");
        assert_eq!(rich[0].children.len(), 1);
        assert_eq!(rich[0].children[0].text, "To serve the residents.");

        let json = serde_json::to_value(&rich).unwrap();
        assert_eq!(json[0]["_type"], "block");
        assert_eq!(json[0]["markDefs"], serde_json::json!([]));
        assert_eq!(json[0]["children"][0]["_type"], "span");
        assert_eq!(json[0]["children"][0]["marks"], serde_json::json!([]));
        assert!(json[0]["_key"].is_string());
    }

    #[test]
    fn test_markup_is_flattened() {
        let rich = from_markup("<p>Pay <b>online</b>.</p>").unwrap();
        assert_eq!(rich[0].children[0].text, "Pay online.");
    }

    #[test]
    fn test_markup_whitespace_collapses() {
        assert_eq!(
            strip_markup("<ul>\n  <li>One</li>\n  <li>Two</li>\n</ul>"),
            "One Two"
        );
    }

    #[test]
    fn test_tags_only_markup_is_absent() {
        assert!(from_markup("<p> </p><br/>").is_none());
    }
}
