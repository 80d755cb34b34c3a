//! Field extraction
//!
//! [`extract`] is the single primitive every transformer builds on: the first
//! occurrence of a field, trimmed, or the caller's default when the field is
//! absent, blank, or not text. Missing data never produces an error.

use super::tree::{Element, Field, Node};

/// Value of a field, or `default` when absent/blank/non-text
pub fn extract(field: Field<'_>, default: &str) -> String {
    let text = match field {
        Field::Absent | Field::Attributed(_) => None,
        Field::Scalar(text) => Some(text),
        Field::List(nodes) => match nodes.first() {
            Some(Node::Scalar(text)) => Some(text.as_str()),
            Some(Node::Element(_)) | None => None,
        },
    };

    match text.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
        _ => default.to_string(),
    }
}

/// Split a comma-separated value, trimming pieces and dropping empty ones
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// `Some(value)` for non-empty strings
pub fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

impl Element {
    /// Trimmed field value, empty string when absent
    pub fn value(&self, name: &str) -> String {
        extract(self.field(name), "")
    }

    /// Trimmed field value with a default
    pub fn value_or(&self, name: &str, default: &str) -> String {
        extract(self.field(name), default)
    }

    /// Trimmed field value, `None` when absent or blank
    pub fn optional(&self, name: &str) -> Option<String> {
        non_empty(self.value(name))
    }

    /// Boolean flag: only the literal `true` counts
    pub fn flag(&self, name: &str) -> bool {
        self.value(name) == "true"
    }

    /// Flag emitted only when set
    pub fn optional_flag(&self, name: &str) -> Option<bool> {
        self.flag(name).then_some(true)
    }

    /// Comma-separated list field
    pub fn list(&self, name: &str) -> Vec<String> {
        split_list(&self.value(name))
    }

    /// First occurrence of a child, if it carries attributes or children
    pub fn first_element(&self, name: &str) -> Option<&Element> {
        match self.nodes(name).first() {
            Some(Node::Element(element)) => Some(element),
            Some(Node::Scalar(_)) | None => None,
        }
    }

    /// Every occurrence of a child that carries attributes or children
    pub fn elements<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Element> + 'a {
        self.nodes(name).iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Scalar(_) => None,
        })
    }

    /// Trimmed attribute of the first occurrence of a child
    pub fn child_attribute(&self, name: &str, attribute: &str) -> String {
        self.first_element(name)
            .and_then(|element| element.attribute(attribute))
            .map(|value| value.trim().to_string())
            .unwrap_or_default()
    }

    /// Trimmed own text content
    pub fn own_text(&self) -> String {
        self.text
            .as_deref()
            .map(|text| text.trim().to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::tree::parse_document;

    fn element(xml: &str) -> Element {
        match parse_document(xml).unwrap().root {
            Node::Element(element) => element,
            Node::Scalar(_) => panic!("expected element"),
        }
    }

    #[test]
    fn test_extract_defaults() {
        assert_eq!(extract(Field::Absent, "FL"), "FL");
        assert_eq!(extract(Field::Scalar("   "), "FL"), "FL");
        assert_eq!(extract(Field::Scalar(" GA "), "FL"), "GA");
        assert_eq!(extract(Field::List(&[]), "x"), "x");
    }

    #[test]
    fn test_extract_takes_first_occurrence() {
        let root = element("<r><name> first </name><name>second</name></r>");
        assert_eq!(root.value("name"), "first");
    }

    #[test]
    fn test_non_text_nodes_are_absent() {
        let root = element(r#"<r><name lang="en">Library</name><state><code>FL</code></state></r>"#);
        assert_eq!(root.value("name"), "");
        assert_eq!(root.value_or("state", "GA"), "GA");
    }

    #[test]
    fn test_flag_is_literal_true() {
        let root = element(
            "<r><a>true</a><b>True</b><c>1</c><d>yes</d><e/><f> true </f></r>",
        );
        assert!(root.flag("a"));
        assert!(!root.flag("b"));
        assert!(!root.flag("c"));
        assert!(!root.flag("d"));
        assert!(!root.flag("e"));
        assert!(!root.flag("missing"));
        assert!(root.flag("f"));
        assert_eq!(root.optional_flag("b"), None);
        assert_eq!(root.optional_flag("a"), Some(true));
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("a, b,,c "), vec!["a", "b", "c"]);
        assert!(split_list("").is_empty());
        assert!(split_list(" , ,").is_empty());
    }

    #[test]
    fn test_list_field() {
        let root = element("<r><audience>Residents, Businesses ,</audience></r>");
        assert_eq!(root.list("audience"), vec!["Residents", "Businesses"]);
        assert!(root.list("selfService").is_empty());
    }

    #[test]
    fn test_optional() {
        let root = element("<r><betaUrl> </betaUrl><aboutUrl>https://a</aboutUrl></r>");
        assert_eq!(root.optional("betaUrl"), None);
        assert_eq!(root.optional("aboutUrl").as_deref(), Some("https://a"));
        assert_eq!(root.optional("missing"), None);
    }

    #[test]
    fn test_elements_skip_scalar_occurrences() {
        let root = element(
            "<r><locations><location>1</location></locations><locations/>\
             <locations><location>2</location></locations></r>",
        );
        let values: Vec<_> = root.elements("locations").map(|e| e.value("location")).collect();
        assert_eq!(values, vec!["1", "2"]);
    }

    #[test]
    fn test_child_attribute_and_text() {
        let root = element(
            r#"<r><monday open=" 8:00 AM " close="5:00 PM">open</monday><tuesday/></r>"#,
        );
        assert_eq!(root.child_attribute("monday", "open"), "8:00 AM");
        assert_eq!(root.child_attribute("monday", "close"), "5:00 PM");
        assert_eq!(root.child_attribute("tuesday", "open"), "");
        assert_eq!(root.first_element("monday").unwrap().own_text(), "open");
    }
}
