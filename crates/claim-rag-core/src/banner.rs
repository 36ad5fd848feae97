//! Banner Template
//!
//! The landing banner as a fixed data structure. Every field is a literal
//! fixed at compile time, so [`render`] cannot fail and cannot drift.

use serde::Serialize;

use crate::{content, node::Node, style};

/// A run of display text with optional styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextRun {
    pub text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<&'static str>,
}

impl TextRun {
    /// Text rendered with the given class tokens
    pub const fn styled(text: &'static str, class: &'static str) -> Self {
        Self {
            text,
            class: Some(class),
        }
    }

    /// Text inherited from its parent's styling
    pub const fn plain(text: &'static str) -> Self {
        Self { text, class: None }
    }
}

/// Two-tone heading: a highlighted label followed immediately by plain text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub class: &'static str,
    pub highlight: TextRun,
    pub continuation: TextRun,
}

/// Informational card with a title and a body paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Card {
    pub class: &'static str,
    pub title: TextRun,
    pub body: TextRun,
}

/// Sub-section listing the tools behind the askgraph endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureSection {
    pub outer_class: &'static str,
    pub inner_class: &'static str,
    pub label: TextRun,
    pub row_class: &'static str,
    /// Side-by-side cards, in display order
    pub cards: [Card; 2],
}

/// The complete banner tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderedBanner {
    /// Outer centered container
    pub class: &'static str,
    pub heading: Heading,
    pub description: TextRun,
    pub features: FeatureSection,
}

impl RenderedBanner {
    /// Cards in display order
    pub const fn cards(&self) -> &[Card; 2] {
        &self.features.cards
    }

    /// Heading runs joined as they appear on screen
    pub fn heading_text(&self) -> String {
        let mut text = String::with_capacity(
            self.heading.highlight.text.len() + self.heading.continuation.text.len(),
        );
        text.push_str(self.heading.highlight.text);
        text.push_str(self.heading.continuation.text);
        text
    }

    /// Generic display-node tree, tags as in the page markup
    pub fn to_node(&self) -> Node {
        Node::from(self)
    }
}

/// Build the banner.
///
/// Takes no input and has no side effects; every call yields an equal value.
pub const fn render() -> RenderedBanner {
    RenderedBanner {
        class: style::CONTAINER,
        heading: Heading {
            class: style::HEADING,
            highlight: TextRun::styled(content::HEADING_HIGHLIGHT, style::HIGHLIGHT),
            continuation: TextRun::plain(content::HEADING_CONTINUATION),
        },
        description: TextRun::styled(content::DESCRIPTION, style::DESCRIPTION),
        features: FeatureSection {
            outer_class: style::FEATURES_OUTER,
            inner_class: style::FEATURES_INNER,
            label: TextRun::styled(content::FEATURES_LABEL, style::FEATURES_LABEL),
            row_class: style::CARD_ROW,
            cards: [
                card(content::RETRIEVAL_TITLE, content::RETRIEVAL_BODY),
                card(content::FEEDBACK_TITLE, content::FEEDBACK_BODY),
            ],
        },
    }
}

const fn card(title: &'static str, body: &'static str) -> Card {
    Card {
        class: style::CARD,
        title: TextRun::styled(title, style::CARD_TITLE),
        body: TextRun::styled(body, style::CARD_BODY),
    }
}
