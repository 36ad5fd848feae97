//! Application State

use std::sync::Arc;

use claim_rag_core::render;

use crate::{config::ServerConfig, error::Result, page::render_document};

/// Shared application state.
///
/// The banner never varies, so everything is rendered once at startup and
/// handlers only hand out the cached bodies.
#[derive(Clone)]
pub struct AppState {
    /// Full HTML document served at `/`
    pub page: Arc<str>,

    /// Bare banner markup
    pub fragment: Arc<str>,

    /// Banner template as JSON
    pub banner_json: Arc<str>,

    /// Display-node tree as JSON
    pub tree_json: Arc<str>,
}

impl AppState {
    pub fn prerender(config: &ServerConfig) -> Result<Self> {
        let banner = render();
        let tree = banner.to_node();
        let fragment = tree.to_html();

        Ok(Self {
            page: render_document(config, &fragment).into(),
            banner_json: serde_json::to_string(&banner)?.into(),
            tree_json: serde_json::to_string(&tree)?.into(),
            fragment: fragment.into(),
        })
    }
}
