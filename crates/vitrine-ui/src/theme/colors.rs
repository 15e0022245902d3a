//! Color constants for the Vitrine design tokens.
//!
//! Quiet editorial palette: dark ink on paper with a single accent.

#![allow(dead_code)]

// === SURFACES ===
pub const PAPER: &str = "#fbfaf8";
pub const PAPER_RAISED: &str = "#ffffff";
pub const BORDER: &str = "#d8d4cd";

// === INK (Text) ===
pub const INK: &str = "#1c1b18";
pub const INK_SOFT: &str = "rgba(28, 27, 24, 0.72)";
pub const INK_MUTED: &str = "rgba(28, 27, 24, 0.5)";

// === ACCENT ===
pub const ACCENT: &str = "#2f5d50";
pub const ACCENT_GLOW: &str = "rgba(47, 93, 80, 0.25)";

// === SEMANTIC ===
pub const LINK: &str = "#1f4f8f";
