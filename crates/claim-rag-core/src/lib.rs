//! # claim-rag-core
//!
//! The Claim-Micro-RAG landing banner as a plain data template.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                    RenderedBanner                     │
//! │  ┌──────────┐  ┌─────────────┐  ┌─────────────────┐  │
//! │  │ Heading  │  │ Description │  │ FeatureSection  │  │
//! │  │ RAG + …  │  │             │  │ label + 2 cards │  │
//! │  └──────────┘  └─────────────┘  └─────────────────┘  │
//! └──────────────────────────────────────────────────────┘
//!             │ to_node()
//!             ▼
//!        Node tree ── to_html() ──▶ markup
//! ```
//!
//! [`render`] is pure: it takes no input, touches no shared state and
//! returns an identical tree on every call. Hosts (the Leptos frontend, the
//! axum server) consume the template and pass the [`style`] class tokens
//! through unchanged.

pub mod banner;
pub mod content;
pub mod node;
pub mod style;

pub use banner::{render, Card, FeatureSection, Heading, RenderedBanner, TextRun};
pub use node::{escape_html, Node, Tag};
