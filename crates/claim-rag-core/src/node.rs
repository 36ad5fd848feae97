//! Display Node Tree
//!
//! A framework-neutral element tree. The Leptos frontend maps it one node to
//! one element; the server serializes it to HTML.

use serde::Serialize;

use crate::banner::{Card, RenderedBanner, TextRun};

/// Element tags used by the banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Div,
    H1,
    P,
    Span,
}

impl Tag {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::H1 => "h1",
            Self::P => "p",
            Self::Span => "span",
        }
    }
}

/// A node in the rendered tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Element {
        tag: Tag,
        #[serde(skip_serializing_if = "Option::is_none")]
        class: Option<&'static str>,
        children: Vec<Node>,
    },
    Text {
        text: &'static str,
    },
}

impl Node {
    pub const fn element(tag: Tag, class: Option<&'static str>, children: Vec<Self>) -> Self {
        Self::Element {
            tag,
            class,
            children,
        }
    }

    pub const fn text(text: &'static str) -> Self {
        Self::Text { text }
    }

    /// Wrap a text run in an element carrying the run's class
    fn run(tag: Tag, run: TextRun) -> Self {
        Self::element(tag, run.class, vec![Self::text(run.text)])
    }

    pub const fn tag(&self) -> Option<Tag> {
        match self {
            Self::Element { tag, .. } => Some(*tag),
            Self::Text { .. } => None,
        }
    }

    pub const fn class(&self) -> Option<&'static str> {
        match self {
            Self::Element { class, .. } => *class,
            Self::Text { .. } => None,
        }
    }

    pub fn children(&self) -> &[Self] {
        match self {
            Self::Element { children, .. } => children,
            Self::Text { .. } => &[],
        }
    }

    /// Concatenated text of this node and all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text { text } => out.push_str(text),
            Self::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Elements with `tag` in this subtree, in document order
    pub fn find_all(&self, tag: Tag) -> Vec<&Self> {
        let mut found = Vec::new();
        self.collect_tag(tag, &mut found);
        found
    }

    fn collect_tag<'a>(&'a self, tag: Tag, found: &mut Vec<&'a Self>) {
        if self.tag() == Some(tag) {
            found.push(self);
        }
        for child in self.children() {
            child.collect_tag(tag, found);
        }
    }

    /// Number of elements with `tag` in this subtree
    pub fn count(&self, tag: Tag) -> usize {
        let own = usize::from(self.tag() == Some(tag));
        own + self.children().iter().map(|c| c.count(tag)).sum::<usize>()
    }

    /// Serialize to HTML markup
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Text { text } => escape_into(text, out),
            Self::Element {
                tag,
                class,
                children,
            } => {
                out.push('<');
                out.push_str(tag.as_str());
                if let Some(class) = class {
                    out.push_str(" class=\"");
                    escape_into(class, out);
                    out.push('"');
                }
                out.push('>');
                for child in children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(tag.as_str());
                out.push('>');
            }
        }
    }
}

/// Escape text for use in HTML content or a quoted attribute value
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    escape_into(raw, &mut out);
    out
}

fn escape_into(raw: &str, out: &mut String) {
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

impl From<&Card> for Node {
    fn from(card: &Card) -> Self {
        Self::element(
            Tag::Div,
            Some(card.class),
            vec![Self::run(Tag::H1, card.title), Self::run(Tag::P, card.body)],
        )
    }
}

impl From<&RenderedBanner> for Node {
    fn from(banner: &RenderedBanner) -> Self {
        let heading = &banner.heading;
        let features = &banner.features;

        let heading = Self::element(
            Tag::H1,
            Some(heading.class),
            vec![
                Self::run(Tag::Span, heading.highlight),
                Self::text(heading.continuation.text),
            ],
        );

        let cards = features.cards.iter().map(Self::from).collect();
        let inner = Self::element(
            Tag::Div,
            Some(features.inner_class),
            vec![
                Self::run(Tag::Span, features.label),
                Self::element(Tag::Div, Some(features.row_class), cards),
            ],
        );

        Self::element(
            Tag::Div,
            Some(banner.class),
            vec![
                heading,
                Self::run(Tag::P, banner.description),
                Self::element(Tag::Div, Some(features.outer_class), vec![inner]),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{render, style};

    #[test]
    fn test_tree_cardinality() {
        let tree = render().to_node();
        // Page heading plus one title per card
        assert_eq!(tree.count(Tag::H1), 3);
        // Description plus one body per card
        assert_eq!(tree.count(Tag::P), 3);
        // Highlight run and label
        assert_eq!(tree.count(Tag::Span), 2);

        let cards: Vec<_> = tree
            .find_all(Tag::Div)
            .into_iter()
            .filter(|n| n.class() == Some(style::CARD))
            .collect();
        assert_eq!(cards.len(), 2);
    }

    #[test]
    fn test_heading_node() {
        let tree = render().to_node();
        let heading = tree.children()[0].clone();
        assert_eq!(heading.tag(), Some(Tag::H1));
        assert_eq!(heading.class(), Some(style::HEADING));
        assert_eq!(
            heading.text_content(),
            "RAG powered chat interface for insurance"
        );
        assert_eq!(heading.children()[0].class(), Some(style::HIGHLIGHT));
        assert_eq!(heading.children()[1], Node::text(" powered chat interface for insurance"));
    }

    #[test]
    fn test_html_fragment() {
        let html = render().to_node().to_html();
        assert!(html.starts_with(&format!("<div class=\"{}\"><h1", style::CONTAINER)));
        assert!(html.contains(&format!(
            "<span class=\"{}\">RAG</span> powered chat interface for insurance</h1>",
            style::HIGHLIGHT
        )));
        assert!(html.contains("<h1 class=\"mb-2 text-xl font-semibold leading-none tracking-tight\">Retrieval Tool</h1>"));
        assert!(html.ends_with("</div></div></div></div>"));
        assert!(html.find("Retrieval Tool") < html.find("User Feedback Tool"));
    }

    #[test]
    fn test_html_escaping() {
        let node = Node::element(
            Tag::P,
            Some("a\"b"),
            vec![Node::text("<b>Tom & Jerry's</b>")],
        );
        assert_eq!(
            node.to_html(),
            "<p class=\"a&quot;b\">&lt;b&gt;Tom &amp; Jerry&#39;s&lt;/b&gt;</p>"
        );
    }

    #[test]
    fn test_escape_plain_text_untouched() {
        assert_eq!(escape_html("Claim-Micro-RAG"), "Claim-Micro-RAG");
        assert_eq!(escape_html("a<b"), "a&lt;b");
    }

    #[test]
    fn test_unclassed_element_has_no_attribute() {
        let node = Node::element(Tag::Span, None, vec![]);
        assert_eq!(node.to_html(), "<span></span>");
    }

    #[test]
    fn test_serialized_tree_shape() {
        let json = serde_json::to_value(render().to_node()).unwrap();
        assert_eq!(json["type"], "element");
        assert_eq!(json["tag"], "div");
        assert_eq!(json["children"][0]["children"][1]["type"], "text");
    }
}
