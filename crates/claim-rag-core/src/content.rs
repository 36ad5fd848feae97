//! Display Copy

pub const HEADING_HIGHLIGHT: &str = "RAG";

/// Follows the highlight with no separator of its own; the leading space is
/// part of the copy.
pub const HEADING_CONTINUATION: &str = " powered chat interface for insurance";

pub const DESCRIPTION: &str = "Claim-Micro-RAG.ai is powered by AI to delivers instant answers on the tedious insurance claim procedures.";

pub const FEATURES_LABEL: &str = "Claim-Micro-RAG features 2 tools accessible via the askgraph endpoint.";

pub const RETRIEVAL_TITLE: &str = "Retrieval Tool";

pub const RETRIEVAL_BODY: &str = "Our AI-powered assistant connects to the RAG vector store via Retrieval Tool to retrieve and present clear facts on insurance claim procedure.";

pub const FEEDBACK_TITLE: &str = "User Feedback Tool";

pub const FEEDBACK_BODY: &str = "A tool to fetch more information from the user.";
