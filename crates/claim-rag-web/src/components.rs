//! UI Components

use claim_rag_core::{render, Card, Node, Tag};
use leptos::{html, prelude::*};

/// Landing banner: two-tone heading, product copy and the tool cards.
///
/// Stateless; every render builds the same view from the core node tree, so
/// the browser and the server emit one structure.
#[component]
pub fn Banner() -> impl IntoView {
    node_view(&render().to_node())
}

/// Informational card
#[component]
pub fn FeatureCard(card: Card) -> impl IntoView {
    node_view(&Node::from(&card))
}

/// One element per node, classes passed through unchanged
fn node_view(node: &Node) -> AnyView {
    match node {
        Node::Text { text } => (*text).into_any(),
        Node::Element {
            tag,
            class,
            children,
        } => {
            let class = (*class).unwrap_or_default();
            let children: Vec<AnyView> = children.iter().map(node_view).collect();
            match tag {
                Tag::Div => html::div().class(class).child(children).into_any(),
                Tag::H1 => html::h1().class(class).child(children).into_any(),
                Tag::P => html::p().class(class).child(children).into_any(),
                Tag::Span => html::span().class(class).child(children).into_any(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim_rag_core::style;
    use leptos::tachys::view::RenderHtml;

    fn banner_html() -> String {
        Owner::new().with(|| view! { <Banner /> }.to_html())
    }

    /// Opening tags with their class attribute, in document order
    fn open_tags(html: &str) -> Vec<(String, Option<String>)> {
        html.split('<')
            .skip(1)
            .filter(|chunk| chunk.starts_with(|c: char| c.is_ascii_alphabetic()))
            .map(|chunk| {
                let head = &chunk[..chunk.find('>').unwrap_or(chunk.len())];
                let name = head.split_whitespace().next().unwrap_or_default().to_string();
                let class = head
                    .split_once("class=\"")
                    .and_then(|(_, rest)| rest.split_once('"'))
                    .map(|(class, _)| class.to_string());
                (name, class)
            })
            .collect()
    }

    /// Text between tags, hydration markers dropped
    fn visible_text(html: &str) -> String {
        html.split('<')
            .map(|chunk| chunk.split_once('>').map_or(chunk, |(_, text)| text))
            .collect()
    }

    #[test]
    fn test_banner_matches_core_tree() {
        let html = banner_html();
        let expected = render().to_node().to_html();

        assert_eq!(open_tags(&html), open_tags(&expected));
        assert_eq!(visible_text(&html), visible_text(&expected));
    }

    #[test]
    fn test_banner_carries_every_class_token() {
        let html = banner_html();
        for class in style::ALL {
            assert!(html.contains(&format!("class=\"{class}\"")), "missing {class:?}");
        }
    }

    #[test]
    fn test_card_titles_in_order() {
        let html = banner_html();
        let card_titles = open_tags(&html)
            .into_iter()
            .filter(|(tag, class)| tag == "h1" && class.as_deref() == Some(style::CARD_TITLE))
            .count();
        assert_eq!(card_titles, 2);

        let retrieval = html.find(">Retrieval Tool</h1>").unwrap();
        let feedback = html.find(">User Feedback Tool</h1>").unwrap();
        assert!(retrieval < feedback);
    }

    #[test]
    fn test_feature_card_renders_title_and_body() {
        let card = render().cards()[1];
        let html = Owner::new().with(|| view! { <FeatureCard card=card /> }.to_html());
        assert!(html.starts_with(&format!("<div class=\"{}\">", style::CARD)));
        assert!(html.contains(&format!(
            "<h1 class=\"{}\">User Feedback Tool</h1>",
            style::CARD_TITLE
        )));
        assert!(html.contains("fetch more information"));
    }
}
