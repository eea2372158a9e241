use std::borrow::Cow;
use std::fmt;

use ego_tree::NodeRef;
use encoding_rs::{UTF_8, WINDOWS_1252};
use scraper::{Html, Node};

use crate::dom::{DocumentNode, NodeKind};

/// A parsed HTML document. Owns the tree every [`HtmlNode`] borrows from.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    #[must_use]
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    #[must_use]
    pub fn parse_fragment(source: &str) -> Self {
        Self {
            html: Html::parse_fragment(source),
        }
    }

    /// Parses raw bytes, taking UTF-8 when it decodes cleanly and windows-1252 otherwise.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::parse(&decode_markup(bytes))
    }

    #[must_use]
    pub fn root(&self) -> HtmlNode<'_> {
        HtmlNode {
            node: self.html.tree.root(),
        }
    }
}

impl fmt::Debug for HtmlDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HtmlDocument")
            .field("nodes", &self.html.tree.nodes().count())
            .finish()
    }
}

pub(crate) fn decode_markup(bytes: &[u8]) -> Cow<'_, str> {
    let (text, _, had_errors) = UTF_8.decode(bytes);
    if !had_errors {
        return text;
    }

    tracing::debug!("input is not valid UTF-8; decoding as windows-1252");
    let (text, _, _) = WINDOWS_1252.decode(bytes);
    text
}

#[derive(Clone, Copy)]
pub struct HtmlNode<'a> {
    node: NodeRef<'a, Node>,
}

impl PartialEq for HtmlNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.node.id() == other.node.id()
    }
}

impl fmt::Debug for HtmlNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node.value() {
            Node::Element(element) => write!(f, "<{}>", element.name()),
            Node::Text(text) => write!(f, "{:?}", &**text),
            other => write!(f, "{other:?}"),
        }
    }
}

impl<'a> HtmlNode<'a> {
    fn wrap(node: Option<NodeRef<'a, Node>>) -> Option<Self> {
        node.map(|node| Self { node })
    }
}

impl DocumentNode for HtmlNode<'_> {
    fn kind(&self) -> NodeKind {
        match self.node.value() {
            Node::Document | Node::Fragment => NodeKind::Document,
            Node::Element(_) => NodeKind::Element,
            Node::Text(_) => NodeKind::Text,
            _ => NodeKind::Other,
        }
    }

    fn tag_name(&self) -> Option<&str> {
        match self.node.value() {
            Node::Element(element) => Some(element.name()),
            _ => None,
        }
    }

    fn attr(&self, name: &str) -> Option<&str> {
        match self.node.value() {
            Node::Element(element) => element.attr(name),
            _ => None,
        }
    }

    fn own_text(&self) -> Option<&str> {
        match self.node.value() {
            Node::Text(text) => Some(&**text),
            _ => None,
        }
    }

    fn parent(&self) -> Option<Self> {
        Self::wrap(self.node.parent())
    }

    fn first_child(&self) -> Option<Self> {
        Self::wrap(self.node.first_child())
    }

    fn next_sibling(&self) -> Option<Self> {
        Self::wrap(self.node.next_sibling())
    }

    fn prev_sibling(&self) -> Option<Self> {
        Self::wrap(self.node.prev_sibling())
    }
}
