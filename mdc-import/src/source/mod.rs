//! Source markup: typed tree and field extraction

pub mod fields;
pub mod tree;

pub use fields::{extract, non_empty, split_list};
pub use tree::{parse_document, Element, Field, Node, SourceDocument, TreeError};
