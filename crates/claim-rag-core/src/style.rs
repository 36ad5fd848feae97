//! Style Contract
//!
//! Tailwind class tokens for every banner node. These strings are opaque to
//! this crate and must reach the stylesheet verbatim.

/// Outer centered container
pub const CONTAINER: &str = "py-8 px-4 mx-auto max-w-screen-xl text-center lg:py-16 lg:px-12";

pub const HEADING: &str = "mb-4 text-4xl font-extrabold tracking-tight leading-none text-gray-900 md:text-5xl lg:text-6xl dark:text-white";

/// Gradient text for the "RAG" run
pub const HIGHLIGHT: &str = "text-transparent bg-clip-text bg-gradient-to-r to-slate-600 from-rose-400";

pub const DESCRIPTION: &str = "mb-8 text-lg font-normal text-gray-500 lg:text-xl sm:px-16 xl:px-48 dark:text-gray-400";

pub const FEATURES_OUTER: &str = "pt-4 flex flex-col gap-2";

pub const FEATURES_INNER: &str = "pt-2 px-4 h-96 flex flex-col gap-4 text-center";

pub const FEATURES_LABEL: &str = "font-semibold text-gray-400 uppercase";

/// Row holding the two cards side by side
pub const CARD_ROW: &str = "flex flex-row gap-4 h-64 justify-center items-center mt-8 sm:justify-between";

pub const CARD: &str = "p-8 w-full h-full flex flex-col gap-4 justify-center items-center shadow-xl rounded-lg hover:bg-gray-100 hover:cursor-pointer";

pub const CARD_TITLE: &str = "mb-2 text-xl font-semibold leading-none tracking-tight";

pub const CARD_BODY: &str = "p-2 text-justify";

/// Every token string, in document order
pub const ALL: [&str; 11] = [
    CONTAINER,
    HEADING,
    HIGHLIGHT,
    DESCRIPTION,
    FEATURES_OUTER,
    FEATURES_INNER,
    FEATURES_LABEL,
    CARD_ROW,
    CARD,
    CARD_TITLE,
    CARD_BODY,
];
