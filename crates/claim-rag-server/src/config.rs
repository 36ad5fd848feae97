//! Server Configuration
//!
//! Read from the environment (after `.env` is loaded):
//!
//! | Variable | Default |
//! |----------|---------|
//! | `BIND_ADDR` | `0.0.0.0:3000` |
//! | `STATIC_DIR` | `static` |
//! | `PAGE_TITLE` | `Claim-Micro-RAG` |
//! | `STYLE_SCRIPT_URL` | Tailwind CDN; empty disables |
//! | `STYLESHEET_URL` | unset |
//! | `RUST_LOG` | `info,tower_http=debug` |

use std::{
    net::{Ipv4Addr, SocketAddr, SocketAddrV4},
    path::PathBuf,
};

use crate::error::{Result, ServerError};

pub const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 3000));
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";
pub const DEFAULT_TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Directory holding the built WASM frontend
    pub static_dir: PathBuf,
    pub page_title: String,
    /// Script that compiles the class tokens in the browser
    pub style_script_url: Option<String>,
    pub stylesheet_url: Option<String>,
    /// `tracing_subscriber::EnvFilter` directives
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            static_dir: PathBuf::from("static"),
            page_title: "Claim-Micro-RAG".into(),
            style_script_url: Some(DEFAULT_TAILWIND_CDN.into()),
            stylesheet_url: None,
            log_filter: DEFAULT_LOG_FILTER.into(),
        }
    }
}

impl ServerConfig {
    /// Load from process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw.trim().parse().map_err(|e| {
                ServerError::Config(format!("BIND_ADDR '{raw}' is not a socket address: {e}"))
            })?,
            None => defaults.bind_addr,
        };

        let static_dir = lookup("STATIC_DIR").map_or(defaults.static_dir, PathBuf::from);
        let page_title = lookup("PAGE_TITLE").unwrap_or(defaults.page_title);

        // Present but empty turns the script off
        let style_script_url = match lookup("STYLE_SCRIPT_URL") {
            Some(url) => non_empty(url),
            None => defaults.style_script_url,
        };
        let stylesheet_url = lookup("STYLESHEET_URL").and_then(non_empty);
        let log_filter = lookup("RUST_LOG")
            .and_then(non_empty)
            .unwrap_or(defaults.log_filter);

        Ok(Self {
            bind_addr,
            static_dir,
            page_title,
            style_script_url,
            stylesheet_url,
            log_filter,
        })
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
