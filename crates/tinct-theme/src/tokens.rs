//! Token assembly — from a [`ThemeSelection`] to two ordered token maps.
//!
//! Each mode's map merges four sources:
//!
//! 1. the base palette's fixed surface tokens for that mode
//! 2. the primary / primary-foreground pair (light: the selection as chosen,
//!    dark: shifted by [`derive_dark_primary`])
//! 3. a fixed destructive pair per mode
//! 4. the font family, light mode only (typography does not change by mode)
//!
//! `--radius` appears in both maps with the same value, or in neither when
//! the selection keeps [`Radius::Default`].
//!
//! Keys always come out in [`Token`] declaration order, so identical input
//! produces byte-identical maps.

use serde::Serialize;
use serde::ser::SerializeMap;
use tinct_color::color::format_component;
use tinct_color::math::FOREGROUND_LIGHT;
use tinct_color::{Color, accessible_foreground, derive_dark_primary};
use tracing::trace;

use crate::catalog::{Catalog, Mode, Radius};
use crate::selection::ThemeSelection;

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// A design-token name.
///
/// Declaration order is emission order: background/foreground, surface
/// pairs, primary, secondary, muted, accent, destructive, then the
/// border/ring group, radius, and font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Token {
    Background,
    Foreground,
    Card,
    CardForeground,
    Popover,
    PopoverForeground,
    Primary,
    PrimaryForeground,
    Secondary,
    SecondaryForeground,
    Muted,
    MutedForeground,
    Accent,
    AccentForeground,
    Destructive,
    DestructiveForeground,
    Border,
    Input,
    Ring,
    Radius,
    FontSans,
}

impl Token {
    /// Every token, in emission order.
    pub const ALL: &'static [Self] = &[
        Self::Background,
        Self::Foreground,
        Self::Card,
        Self::CardForeground,
        Self::Popover,
        Self::PopoverForeground,
        Self::Primary,
        Self::PrimaryForeground,
        Self::Secondary,
        Self::SecondaryForeground,
        Self::Muted,
        Self::MutedForeground,
        Self::Accent,
        Self::AccentForeground,
        Self::Destructive,
        Self::DestructiveForeground,
        Self::Border,
        Self::Input,
        Self::Ring,
        Self::Radius,
        Self::FontSans,
    ];

    /// CSS custom property name, including the leading `--`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Background => "--background",
            Self::Foreground => "--foreground",
            Self::Card => "--card",
            Self::CardForeground => "--card-foreground",
            Self::Popover => "--popover",
            Self::PopoverForeground => "--popover-foreground",
            Self::Primary => "--primary",
            Self::PrimaryForeground => "--primary-foreground",
            Self::Secondary => "--secondary",
            Self::SecondaryForeground => "--secondary-foreground",
            Self::Muted => "--muted",
            Self::MutedForeground => "--muted-foreground",
            Self::Accent => "--accent",
            Self::AccentForeground => "--accent-foreground",
            Self::Destructive => "--destructive",
            Self::DestructiveForeground => "--destructive-foreground",
            Self::Border => "--border",
            Self::Input => "--input",
            Self::Ring => "--ring",
            Self::Radius => "--radius",
            Self::FontSans => "--font-sans",
        }
    }

    /// Whether the token's value is a color.
    #[must_use]
    pub const fn is_color(self) -> bool {
        !matches!(self, Self::Radius | Self::FontSans)
    }

    /// Reverse of [`Token::name`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }
}

// ---------------------------------------------------------------------------
// TokenMap
// ---------------------------------------------------------------------------

/// Token values for one mode, always kept in [`Token`] order.
///
/// Inserting an existing token replaces its value in place, so the order
/// never depends on insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenMap {
    entries: Vec<(Token, String)>,
}

impl TokenMap {
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Set `token` to `value`, returning the previous value if any.
    pub fn insert(&mut self, token: Token, value: impl Into<String>) -> Option<String> {
        let value = value.into();
        match self.entries.binary_search_by_key(&token, |(t, _)| *t) {
            Ok(idx) => Some(std::mem::replace(&mut self.entries[idx].1, value)),
            Err(idx) => {
                self.entries.insert(idx, (token, value));
                None
            }
        }
    }

    #[must_use]
    pub fn get(&self, token: Token) -> Option<&str> {
        self.entries
            .binary_search_by_key(&token, |(t, _)| *t)
            .ok()
            .map(|idx| self.entries[idx].1.as_str())
    }

    /// Look up by CSS name, e.g. `"--primary"`.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&str> {
        Token::from_name(name).and_then(|t| self.get(t))
    }

    #[must_use]
    pub fn contains(&self, token: Token) -> bool {
        self.get(token).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(name, value)` pairs in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries.iter().map(|(t, v)| (t.name(), v.as_str()))
    }

    /// Tokens present in this map, in emission order.
    pub fn tokens(&self) -> impl Iterator<Item = Token> + '_ {
        self.entries.iter().map(|(t, _)| *t)
    }

    /// Render as inline custom properties: `--a: x; --b: y;`.
    ///
    /// Meant for a live preview that sets `style` on a subtree instead of
    /// reloading a stylesheet.
    #[must_use]
    pub fn to_inline_style(&self) -> String {
        self.iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Serialize for TokenMap {
    /// Serializes as an object whose keys keep emission order.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// ThemeTokens
// ---------------------------------------------------------------------------

/// The light and dark token maps of one selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ThemeTokens {
    pub light: TokenMap,
    pub dark: TokenMap,
}

impl ThemeTokens {
    /// The map a preview in `mode` should apply.
    #[must_use]
    pub const fn for_mode(&self, mode: Mode) -> &TokenMap {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Fixed destructive pair for `mode`. Not user-configurable.
#[must_use]
pub const fn destructive_pair(mode: Mode) -> (Color, Color) {
    match mode {
        Mode::Light => (Color::oklch(0.577, 0.245, 27.325), FOREGROUND_LIGHT),
        Mode::Dark => (
            Color::oklch(0.396, 0.141, 25.723),
            Color::oklch(0.637, 0.237, 25.331),
        ),
    }
}

/// The primary color used in `mode` for a given selected primary.
#[must_use]
pub fn primary_for_mode(primary: Color, mode: Mode) -> Color {
    match mode {
        Mode::Light => primary.clamped(),
        Mode::Dark => derive_dark_primary(primary),
    }
}

/// Format a radius preset as its CSS value, or `None` for the default.
#[must_use]
pub fn radius_value(radius: Radius) -> Option<String> {
    radius.rem().map(|rem| format!("{}rem", format_component(rem)))
}

/// Build both token maps for `selection`.
///
/// Pure: the same selection always yields equal maps, and nothing is
/// cached between calls.
#[must_use]
pub fn assemble(selection: &ThemeSelection) -> ThemeTokens {
    let tokens = ThemeTokens {
        light: assemble_mode(selection, Mode::Light),
        dark: assemble_mode(selection, Mode::Dark),
    };
    trace!(
        base = selection.base().id(),
        radius = selection.radius().id(),
        font = selection.font().id(),
        light = tokens.light.len(),
        dark = tokens.dark.len(),
        "assembled tokens"
    );
    tokens
}

fn assemble_mode(selection: &ThemeSelection, mode: Mode) -> TokenMap {
    let mut map = TokenMap::new();

    for (token, color) in selection.base().tokens(mode) {
        map.insert(token, color.to_string());
    }

    let primary = primary_for_mode(selection.primary(), mode);
    map.insert(Token::Primary, primary.to_string());
    map.insert(Token::PrimaryForeground, accessible_foreground(primary).to_string());

    let (destructive, destructive_fg) = destructive_pair(mode);
    map.insert(Token::Destructive, destructive.to_string());
    map.insert(Token::DestructiveForeground, destructive_fg.to_string());

    if let Some(radius) = radius_value(selection.radius()) {
        map.insert(Token::Radius, radius);
    }

    if mode == Mode::Light {
        map.insert(Token::FontSans, selection.font().family());
    }

    map
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
