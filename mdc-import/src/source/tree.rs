//! Typed source tree
//!
//! Source files are parsed into a small tree where every element is either a
//! text-only leaf ([`Node::Scalar`]) or an [`Element`] carrying attributes
//! and/or child elements. Repeated child elements keep document order.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::BTreeMap;
use thiserror::Error;

/// Source markup parse errors
#[derive(Debug, Error, PartialEq)]
pub enum TreeError {
    /// Malformed markup
    #[error("XML syntax error at byte {position}: {message}")]
    Syntax { position: u64, message: String },

    /// Document ended while elements were still open
    #[error("Unexpected end of document: <{0}> is not closed")]
    Unclosed(String),

    /// Document contains no element at all
    #[error("Document has no root element")]
    NoRoot,

    /// More than one top-level element
    #[error("Multiple root elements: <{first}> and <{second}>")]
    MultipleRoots { first: String, second: String },

    /// Character data outside the root element
    #[error("Text outside the root element: {0:?}")]
    StrayText(String),
}

/// One parsed element occurrence
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Element with text only (no attributes, no child elements)
    Scalar(String),
    /// Element with attributes and/or child elements
    Element(Element),
}

/// Element with attributes, child elements and optional text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    /// Attribute map (`name="value"`)
    pub attributes: BTreeMap<String, String>,
    /// Character data, kept only when it is not pure whitespace
    pub text: Option<String>,
    /// Child elements by name, each list in document order
    pub children: BTreeMap<String, Vec<Node>>,
}

/// Result of looking up a child field on an [`Element`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field<'a> {
    /// No child with that name
    Absent,
    /// Exactly one text-only child
    Scalar(&'a str),
    /// Exactly one child carrying attributes or children
    Attributed(&'a Element),
    /// Several occurrences of the child
    List(&'a [Node]),
}

/// Parsed source document
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDocument {
    /// Name of the top-level element
    pub root_name: String,
    /// The top-level element itself
    pub root: Node,
}

impl Element {
    /// Look up a child field by name
    pub fn field(&self, name: &str) -> Field<'_> {
        match self.children.get(name).map(Vec::as_slice) {
            None | Some([]) => Field::Absent,
            Some([Node::Scalar(text)]) => Field::Scalar(text),
            Some([Node::Element(element)]) => Field::Attributed(element),
            Some(nodes) => Field::List(nodes),
        }
    }

    /// All occurrences of a child, in document order
    pub fn nodes(&self, name: &str) -> &[Node] {
        self.children.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Attribute value, if present
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.children.is_empty()
    }
}

/// Frame for an element that has been opened but not closed yet
struct OpenElement {
    name: String,
    element: Element,
    text: String,
}

impl OpenElement {
    fn close(self) -> (String, Node) {
        let OpenElement {
            name,
            mut element,
            text,
        } = self;

        if element.is_empty() {
            return (name, Node::Scalar(text));
        }

        if !text.trim().is_empty() {
            element.text = Some(text);
        }
        (name, Node::Element(element))
    }
}

/// Parse source markup into a [`SourceDocument`]
pub fn parse_document(xml: &str) -> Result<SourceDocument, TreeError> {
    let xml = xml.trim_start_matches('\u{feff}');
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut stack: Vec<OpenElement> = Vec::new();
    let mut root: Option<(String, Node)> = None;

    loop {
        let event = reader.read_event().map_err(|e| TreeError::Syntax {
            position: reader.buffer_position() as u64,
            message: e.to_string(),
        })?;

        match event {
            Event::Start(start) => {
                let open = open_element(&start, reader.buffer_position() as u64)?;
                stack.push(open);
            }
            Event::Empty(start) => {
                let open = open_element(&start, reader.buffer_position() as u64)?;
                attach(&mut stack, &mut root, open.close())?;
            }
            Event::End(_) => {
                // quick-xml verifies end names match their start tags
                if let Some(open) = stack.pop() {
                    attach(&mut stack, &mut root, open.close())?;
                }
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(|e| TreeError::Syntax {
                    position: reader.buffer_position() as u64,
                    message: e.to_string(),
                })?;
                push_text(&mut stack, &text)?;
            }
            Event::CData(cdata) => {
                let raw = cdata.into_inner();
                push_text(&mut stack, &String::from_utf8_lossy(&raw))?;
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctype
            _ => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(TreeError::Unclosed(open.name));
    }

    let (root_name, root) = root.ok_or(TreeError::NoRoot)?;
    Ok(SourceDocument { root_name, root })
}

fn open_element(start: &BytesStart<'_>, position: u64) -> Result<OpenElement, TreeError> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = Element::default();

    for attr in start.attributes() {
        let attr = attr.map_err(|e| TreeError::Syntax {
            position,
            message: e.to_string(),
        })?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value().map_err(|e| TreeError::Syntax {
            position,
            message: e.to_string(),
        })?;
        element.attributes.insert(key, value.into_owned());
    }

    Ok(OpenElement {
        name,
        element,
        text: String::new(),
    })
}

fn attach(
    stack: &mut [OpenElement],
    root: &mut Option<(String, Node)>,
    (name, node): (String, Node),
) -> Result<(), TreeError> {
    if let Some(parent) = stack.last_mut() {
        parent.element.children.entry(name).or_default().push(node);
        return Ok(());
    }

    if let Some((first, _)) = root {
        return Err(TreeError::MultipleRoots {
            first: first.clone(),
            second: name,
        });
    }

    *root = Some((name, node));
    Ok(())
}

fn push_text(stack: &mut [OpenElement], text: &str) -> Result<(), TreeError> {
    match stack.last_mut() {
        Some(open) => {
            open.text.push_str(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(TreeError::StrayText(text.trim().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root_element(xml: &str) -> Element {
        match parse_document(xml).unwrap().root {
            Node::Element(element) => element,
            Node::Scalar(text) => panic!("expected element root, got scalar {:?}", text),
        }
    }

    #[test]
    fn test_leaf_elements_are_scalars() {
        let root = root_element("<location><name> Main Library </name><zip/></location>");
        assert_eq!(root.field("name"), Field::Scalar(" Main Library "));
        assert_eq!(root.field("zip"), Field::Scalar(""));
        assert_eq!(root.field("city"), Field::Absent);
    }

    #[test]
    fn test_attributes_make_element_nodes() {
        let root = root_element(
            r#"<organization><socialMedia><socialChannel url="https://x.com/mdc">twitter</socialChannel></socialMedia></organization>"#,
        );
        let Field::Attributed(social) = root.field("socialMedia") else {
            panic!("expected attributed socialMedia");
        };
        let Field::Attributed(channel) = social.field("socialChannel") else {
            panic!("expected attributed socialChannel");
        };
        assert_eq!(channel.attribute("url"), Some("https://x.com/mdc"));
        assert_eq!(channel.text.as_deref(), Some("twitter"));
    }

    #[test]
    fn test_repeated_children_keep_order() {
        let root = root_element(
            "<service><category><mainCategory>a</mainCategory></category>\
             <category><mainCategory>b</mainCategory></category>\
             <category><mainCategory>c</mainCategory></category></service>",
        );
        let Field::List(nodes) = root.field("category") else {
            panic!("expected list");
        };
        let mains: Vec<_> = nodes
            .iter()
            .map(|n| match n {
                Node::Element(e) => e.field("mainCategory"),
                Node::Scalar(_) => Field::Absent,
            })
            .collect();
        assert_eq!(
            mains,
            vec![Field::Scalar("a"), Field::Scalar("b"), Field::Scalar("c")]
        );
    }

    #[test]
    fn test_whitespace_text_dropped_on_elements() {
        let root = root_element("<taxonomy>\n  <listName>Colors</listName>\n</taxonomy>");
        assert!(root.text.is_none());
    }

    #[test]
    fn test_entities_and_cdata() {
        let root = root_element(
            "<service><name>Fish &amp; Game</name><longDescription><![CDATA[<p>Hi</p>]]></longDescription></service>",
        );
        assert_eq!(root.field("name"), Field::Scalar("Fish & Game"));
        assert_eq!(root.field("longDescription"), Field::Scalar("<p>Hi</p>"));
    }

    #[test]
    fn test_empty_root_is_scalar() {
        let doc = parse_document("<?xml version=\"1.0\"?>\n<organization/>").unwrap();
        assert_eq!(doc.root_name, "organization");
        assert_eq!(doc.root, Node::Scalar(String::new()));
    }

    #[test]
    fn test_mismatched_tags_are_syntax_errors() {
        let err = parse_document("<location><name>x</city></location>").unwrap_err();
        assert!(matches!(err, TreeError::Syntax { .. }));
    }

    #[test]
    fn test_unclosed_document() {
        let err = parse_document("<location><name>x</name>").unwrap_err();
        assert!(matches!(
            err,
            TreeError::Unclosed(_) | TreeError::Syntax { .. }
        ));
    }

    #[test]
    fn test_no_root() {
        assert_eq!(parse_document("  ").unwrap_err(), TreeError::NoRoot);
    }

    #[test]
    fn test_multiple_roots() {
        let err = parse_document("<a/><b/>").unwrap_err();
        assert_eq!(
            err,
            TreeError::MultipleRoots {
                first: "a".to_string(),
                second: "b".to_string()
            }
        );
    }

    #[test]
    fn test_stray_text() {
        let err = parse_document("hello <a/>").unwrap_err();
        assert_eq!(err, TreeError::StrayText("hello".to_string()));
    }
}
