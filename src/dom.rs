//! Read-only view over a parsed markup tree.
//!
//! Extraction code is written against [`DocumentNode`] so it never sees the parser's own node
//! type. An adapter supplies the eight primitives; everything else (traversal, text collection,
//! searching) is provided here on top of them.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Element,
    Text,
    Other,
}

pub trait DocumentNode: Clone + PartialEq {
    fn kind(&self) -> NodeKind;

    /// Element name; `None` for anything that is not an element.
    fn tag_name(&self) -> Option<&str>;

    fn attr(&self, name: &str) -> Option<&str>;

    /// Character data of a text node; `None` for every other kind.
    fn own_text(&self) -> Option<&str>;

    fn parent(&self) -> Option<Self>;

    fn first_child(&self) -> Option<Self>;

    fn next_sibling(&self) -> Option<Self>;

    fn prev_sibling(&self) -> Option<Self>;

    fn is_element(&self, tag: &str) -> bool {
        self.tag_name()
            .is_some_and(|name| name.eq_ignore_ascii_case(tag))
    }

    fn children(&self) -> Children<Self> {
        Children {
            next: self.first_child(),
        }
    }

    /// Pre-order walk of the subtree below this node, the node itself excluded.
    fn descendants(&self) -> Descendants<Self> {
        Descendants {
            root: self.clone(),
            next: self.first_child(),
        }
    }

    /// Every node after this one in document order, its own descendants included.
    fn following(&self) -> Following<Self> {
        Following {
            next: next_in_order(self, None),
        }
    }

    /// Concatenated character data of this node and everything below it.
    fn text(&self) -> String {
        if let Some(text) = self.own_text() {
            return text.to_string();
        }

        let mut out = String::new();
        for node in self.descendants() {
            if let Some(text) = node.own_text() {
                out.push_str(text);
            }
        }
        out
    }

    fn trimmed_text(&self) -> String {
        self.text().trim().to_string()
    }

    fn find_all(&self, tag: &str) -> Vec<Self> {
        self.descendants()
            .filter(|node| node.is_element(tag))
            .collect()
    }

    /// Text nodes at or below this node whose character data satisfies `predicate`.
    fn find_all_text<P>(&self, mut predicate: P) -> Vec<Self>
    where
        P: FnMut(&str) -> bool,
    {
        std::iter::once(self.clone())
            .chain(self.descendants())
            .filter(|node| node.own_text().is_some_and(&mut predicate))
            .collect()
    }

    /// First element named `tag` after this node in document order.
    fn find_next(&self, tag: &str) -> Option<Self> {
        self.following().find(|node| node.is_element(tag))
    }

    /// Serializes the subtree with every attribute dropped.
    fn bare_markup(&self) -> String {
        let mut out = String::new();
        write_bare(self, &mut out);
        out
    }
}

pub struct Children<N> {
    next: Option<N>,
}

impl<N: DocumentNode> Iterator for Children<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let current = self.next.take()?;
        self.next = current.next_sibling();
        Some(current)
    }
}

pub struct Descendants<N> {
    root: N,
    next: Option<N>,
}

impl<N: DocumentNode> Iterator for Descendants<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let current = self.next.take()?;
        self.next = next_in_order(&current, Some(&self.root));
        Some(current)
    }
}

pub struct Following<N> {
    next: Option<N>,
}

impl<N: DocumentNode> Iterator for Following<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let current = self.next.take()?;
        self.next = next_in_order(&current, None);
        Some(current)
    }
}

/// Pre-order successor of `node`, never climbing out of `stop` when one is given.
fn next_in_order<N: DocumentNode>(node: &N, stop: Option<&N>) -> Option<N> {
    if let Some(child) = node.first_child() {
        return Some(child);
    }

    let mut current = node.clone();
    loop {
        if stop.is_some_and(|stop| *stop == current) {
            return None;
        }
        if let Some(sibling) = current.next_sibling() {
            return Some(sibling);
        }
        current = current.parent()?;
    }
}

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

fn write_bare<N: DocumentNode>(node: &N, out: &mut String) {
    match node.kind() {
        NodeKind::Text => {
            if let Some(text) = node.own_text() {
                push_escaped(text, out);
            }
        }
        NodeKind::Element => {
            let name = node.tag_name().unwrap_or_default().to_ascii_lowercase();
            out.push('<');
            out.push_str(&name);
            out.push('>');
            if VOID_ELEMENTS.contains(&name.as_str()) {
                return;
            }
            for child in node.children() {
                write_bare(&child, out);
            }
            out.push_str("</");
            out.push_str(&name);
            out.push('>');
        }
        NodeKind::Document => {
            for child in node.children() {
                write_bare(&child, out);
            }
        }
        NodeKind::Other => {}
    }
}

fn push_escaped(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}
