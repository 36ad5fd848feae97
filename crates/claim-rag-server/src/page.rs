//! HTML Document
//!
//! Wraps the banner fragment in a full page.

use claim_rag_core::escape_html;

use crate::config::ServerConfig;

pub fn render_document(config: &ServerConfig, body: &str) -> String {
    let mut head = format!(
        "<meta charset=\"utf-8\" />\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\
         <title>{}</title>",
        escape_html(&config.page_title)
    );
    if let Some(url) = &config.style_script_url {
        head.push_str(&format!("<script src=\"{}\"></script>", escape_html(url)));
    }
    if let Some(url) = &config.stylesheet_url {
        head.push_str(&format!("<link rel=\"stylesheet\" href=\"{}\" />", escape_html(url)));
    }

    format!("<!DOCTYPE html><html lang=\"en\"><head>{head}</head><body>{body}</body></html>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_shell() {
        let html = render_document(&ServerConfig::default(), "<div></div>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Claim-Micro-RAG</title>"));
        assert!(html.contains("<script src=\"https://cdn.tailwindcss.com\"></script>"));
        assert!(html.contains("<body><div></div></body>"));
        assert!(!html.contains("rel=\"stylesheet\""));
    }

    #[test]
    fn test_title_is_escaped() {
        let config = ServerConfig {
            page_title: "Claims <beta>".into(),
            style_script_url: None,
            ..Default::default()
        };
        let html = render_document(&config, "");
        assert!(html.contains("<title>Claims &lt;beta&gt;</title>"));
        assert!(!html.contains("<script"));
    }
}
