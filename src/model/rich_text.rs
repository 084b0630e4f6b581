// src/model/rich_text.rs
//! Prismic structured text: an ordered sequence of typed text nodes.
//!
//! The site needs exactly one capability from this format: extraction to
//! plain text, used for word counting and body display. The node and span
//! structure is kept as a typed vocabulary rather than raw JSON so that
//! templates can render paragraph-by-paragraph.

use serde::{Deserialize, Serialize};

/// The kind of a structured-text node.
///
/// Each variant mirrors a node `type` tag on the wire. Unknown tags map
/// to `Other` instead of failing the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Paragraph,
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Heading5,
    Heading6,
    Preformatted,
    ListItem,
    OListItem,
    Image,
    Embed,
    #[serde(other)]
    Other,
}

/// The kind of an inline span annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    Strong,
    Em,
    Hyperlink,
    Label,
    #[serde(other)]
    Other,
}

/// An inline annotation over a character range of the owning node's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanRange {
    pub start: usize,
    pub end: usize,
    #[serde(rename = "type")]
    pub kind: SpanKind,
}

/// A single structured-text node. Non-textual nodes (images, embeds)
/// carry no `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextNode {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub spans: Vec<SpanRange>,
}

impl TextNode {
    /// Create a paragraph node, the most common structured-text node.
    pub fn paragraph(text: &str) -> Self {
        Self {
            kind: NodeKind::Paragraph,
            text: Some(text.to_string()),
            spans: Vec::new(),
        }
    }
}

/// Opaque structured-text value with an extraction operation to plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RichText(Vec<TextNode>);

impl RichText {
    pub fn new(nodes: Vec<TextNode>) -> Self {
        Self(nodes)
    }

    /// Create a rich text value holding a single paragraph.
    pub fn from_plain(text: &str) -> Self {
        Self(vec![TextNode::paragraph(text)])
    }

    pub fn nodes(&self) -> &[TextNode] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Extract the plain text of every textual node, joined with a single
    /// space, the same rendering `RichText.asText` gives in prismic-dom.
    pub fn as_plain_text(&self) -> String {
        self.0
            .iter()
            .filter_map(|node| node.text.as_deref())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The plain text of each textual node, one entry per node, in order.
    pub fn paragraphs(&self) -> Vec<String> {
        self.0
            .iter()
            .filter_map(|node| node.text.clone())
            .collect()
    }

    /// Whitespace-delimited word count across all textual nodes.
    pub fn word_count(&self) -> usize {
        self.as_plain_text().split_whitespace().count()
    }
}
