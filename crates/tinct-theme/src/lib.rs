//! # tinct-theme — Theme Token Generator
//!
//! Turns a handful of design choices into a complete light/dark set of design
//! tokens and a stylesheet ready to paste into a project's global CSS.
//!
//! # Architecture
//!
//! ```text
//! ThemeSelection (base palette, primary L/C/H, radius, font, mode)
//!     │
//!     ├──► preset.rs:     exact match against accent presets (UI highlight only)
//!     │
//!     ▼
//! tokens.rs:     palette tokens + primary pair (tinct-color math)
//!                + destructive pair + radius + font  →  ThemeTokens
//!     │
//!     ▼
//! stylesheet.rs: alias header + `:root` block + `.dark` block  →  String
//! ```
//!
//! Every stage is a pure function of its input. Nothing is cached and there
//! is no shared state, so previews for many selections can render in
//! parallel. `state.rs` sits outside the pipeline and only converts
//! selections to and from query strings and JSON.
//!
//! # Failure model
//!
//! The pipeline cannot fail. Numbers are clamped or wrapped, unknown ids fall
//! back to the first catalog entry. Only the `state` adapter returns errors.

// Catalog ids and token names are intentionally parallel.
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod preset;
pub mod selection;
pub mod state;
pub mod stylesheet;
pub mod tokens;

pub use catalog::{BasePalette, Catalog, Font, Mode, Radius};
pub use preset::{PRESETS, Preset, match_preset};
pub use selection::{SelectionPatch, ThemeSelection};
pub use state::StateError;
pub use tokens::{ThemeTokens, Token, TokenMap, assemble};

/// Everything one pipeline run produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTheme {
    /// Light and dark token maps, for live preview.
    pub tokens: ThemeTokens,
    /// The full stylesheet text.
    pub stylesheet: String,
    /// Id of the preset matching the selected primary, if any.
    pub preset: Option<&'static str>,
}

/// Run the whole pipeline for `selection`.
///
/// The preset match is computed alongside the tokens, never before them:
/// it cannot influence any token value.
#[must_use]
pub fn generate(selection: &ThemeSelection) -> GeneratedTheme {
    let tokens = assemble(selection);
    let stylesheet = stylesheet::emit(&tokens);
    let preset = match_preset(selection.primary()).map(|p| p.id);
    GeneratedTheme { tokens, stylesheet, preset }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
