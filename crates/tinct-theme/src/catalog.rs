//! Static catalogs — base palettes, radius presets, fonts, and modes.
//!
//! Every catalog is a closed enum with an exhaustive `match` behind its data,
//! so adding an option is a compile-checked change. String ids from the
//! outside world go through [`Catalog::resolve`], which falls back to the
//! first entry instead of failing.
//!
//! | Catalog         | Ids                                              | Fallback  |
//! |-----------------|--------------------------------------------------|-----------|
//! | [`BasePalette`] | `zinc` `slate` `stone` `gray` `neutral`          | `zinc`    |
//! | [`Radius`]      | `default` `0` `0.3` `0.5` `0.75` `1.0`           | `default` |
//! | [`Font`]        | `inter` `geist` `manrope` `figtree` `ibm-plex-sans` `system` | `inter` |
//! | [`Mode`]        | `light` `dark`                                   | `light`   |

use serde::{Deserialize, Serialize};
use tinct_color::Color;
use tracing::debug;

use crate::tokens::Token;

// ---------------------------------------------------------------------------
// Catalog trait
// ---------------------------------------------------------------------------

/// A closed, ordered set of named options.
///
/// The first entry of [`Catalog::ALL`] is the documented default.
pub trait Catalog: Copy + Sized + 'static {
    /// Human-readable catalog name, used in log messages.
    const KIND: &'static str;

    /// Every entry, in display order. Never empty.
    const ALL: &'static [Self];

    /// Stable machine id (`"zinc"`, `"0.5"`, ...).
    fn id(self) -> &'static str;

    /// Display label for pickers.
    fn label(self) -> &'static str;

    /// The fallback entry: the first in catalog order.
    #[must_use]
    fn first() -> Self {
        Self::ALL[0]
    }

    /// Exact id lookup.
    #[must_use]
    fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|entry| entry.id() == id)
    }

    /// Id lookup that never fails: unknown ids resolve to [`Catalog::first`].
    #[must_use]
    fn resolve(id: &str) -> Self {
        Self::from_id(id).unwrap_or_else(|| {
            let fallback = Self::first();
            debug!(kind = Self::KIND, id, fallback = fallback.id(), "unknown id, using default");
            fallback
        })
    }
}

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Light or dark rendering context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Catalog for Mode {
    const KIND: &'static str = "mode";
    const ALL: &'static [Self] = &[Self::Light, Self::Dark];

    fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

// ---------------------------------------------------------------------------
// Base palettes
// ---------------------------------------------------------------------------

/// The neutral shades a base palette is built from, named by their
/// conventional 50–950 step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeutralScale {
    pub s50: Color,
    pub s100: Color,
    pub s200: Color,
    pub s400: Color,
    pub s500: Color,
    pub s800: Color,
    pub s900: Color,
    pub s950: Color,
}

const ZINC: NeutralScale = NeutralScale {
    s50: Color::oklch(0.985, 0.0, 0.0),
    s100: Color::oklch(0.967, 0.001, 286.375),
    s200: Color::oklch(0.92, 0.004, 286.32),
    s400: Color::oklch(0.705, 0.015, 286.067),
    s500: Color::oklch(0.552, 0.016, 285.938),
    s800: Color::oklch(0.274, 0.006, 286.033),
    s900: Color::oklch(0.21, 0.006, 285.885),
    s950: Color::oklch(0.141, 0.005, 285.823),
};

const SLATE: NeutralScale = NeutralScale {
    s50: Color::oklch(0.984, 0.003, 247.858),
    s100: Color::oklch(0.968, 0.007, 247.896),
    s200: Color::oklch(0.929, 0.013, 255.508),
    s400: Color::oklch(0.704, 0.04, 256.788),
    s500: Color::oklch(0.554, 0.046, 257.417),
    s800: Color::oklch(0.279, 0.041, 260.031),
    s900: Color::oklch(0.208, 0.042, 265.755),
    s950: Color::oklch(0.129, 0.042, 264.695),
};

const STONE: NeutralScale = NeutralScale {
    s50: Color::oklch(0.985, 0.001, 106.423),
    s100: Color::oklch(0.97, 0.001, 106.424),
    s200: Color::oklch(0.923, 0.003, 48.717),
    s400: Color::oklch(0.709, 0.01, 56.259),
    s500: Color::oklch(0.553, 0.013, 58.071),
    s800: Color::oklch(0.268, 0.007, 34.298),
    s900: Color::oklch(0.216, 0.006, 56.043),
    s950: Color::oklch(0.147, 0.004, 49.25),
};

const GRAY: NeutralScale = NeutralScale {
    s50: Color::oklch(0.985, 0.002, 247.839),
    s100: Color::oklch(0.967, 0.003, 264.542),
    s200: Color::oklch(0.928, 0.006, 264.531),
    s400: Color::oklch(0.707, 0.022, 261.325),
    s500: Color::oklch(0.551, 0.027, 264.364),
    s800: Color::oklch(0.278, 0.033, 256.848),
    s900: Color::oklch(0.21, 0.034, 264.665),
    s950: Color::oklch(0.13, 0.028, 261.692),
};

const NEUTRAL: NeutralScale = NeutralScale {
    s50: Color::oklch(0.985, 0.0, 0.0),
    s100: Color::oklch(0.97, 0.0, 0.0),
    s200: Color::oklch(0.922, 0.0, 0.0),
    s400: Color::oklch(0.708, 0.0, 0.0),
    s500: Color::oklch(0.556, 0.0, 0.0),
    s800: Color::oklch(0.269, 0.0, 0.0),
    s900: Color::oklch(0.205, 0.0, 0.0),
    s950: Color::oklch(0.145, 0.0, 0.0),
};

/// Dark-mode borders are translucent white so they sit on any surface.
const DARK_BORDER: Color = Color::oklcha(1.0, 0.0, 0.0, 0.1);
const DARK_INPUT: Color = Color::oklcha(1.0, 0.0, 0.0, 0.15);

/// A base neutral palette: the surface, text, and border colors of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BasePalette {
    #[default]
    Zinc,
    Slate,
    Stone,
    Gray,
    Neutral,
}

impl Catalog for BasePalette {
    const KIND: &'static str = "palette";
    const ALL: &'static [Self] = &[Self::Zinc, Self::Slate, Self::Stone, Self::Gray, Self::Neutral];

    fn id(self) -> &'static str {
        match self {
            Self::Zinc => "zinc",
            Self::Slate => "slate",
            Self::Stone => "stone",
            Self::Gray => "gray",
            Self::Neutral => "neutral",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Zinc => "Zinc",
            Self::Slate => "Slate",
            Self::Stone => "Stone",
            Self::Gray => "Gray",
            Self::Neutral => "Neutral",
        }
    }
}

impl BasePalette {
    /// The neutral shades behind this palette.
    #[must_use]
    pub const fn scale(self) -> &'static NeutralScale {
        match self {
            Self::Zinc => &ZINC,
            Self::Slate => &SLATE,
            Self::Stone => &STONE,
            Self::Gray => &GRAY,
            Self::Neutral => &NEUTRAL,
        }
    }

    /// The palette's own light-mode primary (its 900 shade).
    ///
    /// Used as the starting accent of a fresh selection.
    #[must_use]
    pub const fn native_primary(self) -> Color {
        self.scale().s900
    }

    /// The fixed surface tokens of this palette for `mode`.
    ///
    /// Primary, destructive, radius, and font tokens are not part of a
    /// palette; the assembler supplies them.
    #[must_use]
    pub const fn tokens(self, mode: Mode) -> [(Token, Color); 15] {
        let s = self.scale();
        match mode {
            Mode::Light => [
                (Token::Background, Color::WHITE),
                (Token::Foreground, s.s950),
                (Token::Card, Color::WHITE),
                (Token::CardForeground, s.s950),
                (Token::Popover, Color::WHITE),
                (Token::PopoverForeground, s.s950),
                (Token::Secondary, s.s100),
                (Token::SecondaryForeground, s.s900),
                (Token::Muted, s.s100),
                (Token::MutedForeground, s.s500),
                (Token::Accent, s.s100),
                (Token::AccentForeground, s.s900),
                (Token::Border, s.s200),
                (Token::Input, s.s200),
                (Token::Ring, s.s400),
            ],
            Mode::Dark => [
                (Token::Background, s.s950),
                (Token::Foreground, s.s50),
                (Token::Card, s.s900),
                (Token::CardForeground, s.s50),
                (Token::Popover, s.s900),
                (Token::PopoverForeground, s.s50),
                (Token::Secondary, s.s800),
                (Token::SecondaryForeground, s.s50),
                (Token::Muted, s.s800),
                (Token::MutedForeground, s.s400),
                (Token::Accent, s.s800),
                (Token::AccentForeground, s.s50),
                (Token::Border, DARK_BORDER),
                (Token::Input, DARK_INPUT),
                (Token::Ring, s.s500),
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Radius
// ---------------------------------------------------------------------------

/// Corner-radius preset.
///
/// [`Radius::Default`] means "emit nothing": the consuming project's own
/// `--radius` stays in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Radius {
    #[default]
    Default,
    Zero,
    Small,
    Medium,
    Large,
    Full,
}

impl Catalog for Radius {
    const KIND: &'static str = "radius";
    const ALL: &'static [Self] = &[
        Self::Default,
        Self::Zero,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::Full,
    ];

    fn id(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Zero => "0",
            Self::Small => "0.3",
            Self::Medium => "0.5",
            Self::Large => "0.75",
            Self::Full => "1.0",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Zero => "0",
            Self::Small => "0.3",
            Self::Medium => "0.5",
            Self::Large => "0.75",
            Self::Full => "1.0",
        }
    }
}

impl Radius {
    /// The explicit radius in `rem`, or `None` for [`Radius::Default`].
    #[must_use]
    pub const fn rem(self) -> Option<f64> {
        match self {
            Self::Default => None,
            Self::Zero => Some(0.0),
            Self::Small => Some(0.3),
            Self::Medium => Some(0.5),
            Self::Large => Some(0.75),
            Self::Full => Some(1.0),
        }
    }
}

// ---------------------------------------------------------------------------
// Fonts
// ---------------------------------------------------------------------------

/// Sans-serif typeface choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Font {
    #[default]
    Inter,
    Geist,
    Manrope,
    Figtree,
    IbmPlexSans,
    System,
}

impl Catalog for Font {
    const KIND: &'static str = "font";
    const ALL: &'static [Self] = &[
        Self::Inter,
        Self::Geist,
        Self::Manrope,
        Self::Figtree,
        Self::IbmPlexSans,
        Self::System,
    ];

    fn id(self) -> &'static str {
        match self {
            Self::Inter => "inter",
            Self::Geist => "geist",
            Self::Manrope => "manrope",
            Self::Figtree => "figtree",
            Self::IbmPlexSans => "ibm-plex-sans",
            Self::System => "system",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Inter => "Inter",
            Self::Geist => "Geist",
            Self::Manrope => "Manrope",
            Self::Figtree => "Figtree",
            Self::IbmPlexSans => "IBM Plex Sans",
            Self::System => "System UI",
        }
    }
}

impl Font {
    /// CSS `font-family` value, with a generic fallback.
    #[must_use]
    pub const fn family(self) -> &'static str {
        match self {
            Self::Inter => "\"Inter\", sans-serif",
            Self::Geist => "\"Geist\", sans-serif",
            Self::Manrope => "\"Manrope\", sans-serif",
            Self::Figtree => "\"Figtree\", sans-serif",
            Self::IbmPlexSans => "\"IBM Plex Sans\", sans-serif",
            Self::System => "ui-sans-serif, system-ui, sans-serif",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ids_unique<C: Catalog>() -> bool {
        let ids: HashSet<_> = C::ALL.iter().map(|e| e.id()).collect();
        ids.len() == C::ALL.len()
    }

    #[test]
    fn catalog_ids_are_unique() {
        assert!(ids_unique::<BasePalette>());
        assert!(ids_unique::<Radius>());
        assert!(ids_unique::<Font>());
        assert!(ids_unique::<Mode>());
    }

    #[test]
    fn every_id_round_trips() {
        for p in BasePalette::ALL {
            assert_eq!(BasePalette::from_id(p.id()), Some(*p));
        }
        for r in Radius::ALL {
            assert_eq!(Radius::from_id(r.id()), Some(*r));
        }
        for f in Font::ALL {
            assert_eq!(Font::from_id(f.id()), Some(*f));
        }
    }

    #[test]
    fn first_entry_matches_default() {
        assert_eq!(BasePalette::first(), BasePalette::default());
        assert_eq!(Radius::first(), Radius::default());
        assert_eq!(Font::first(), Font::default());
        assert_eq!(Mode::first(), Mode::default());
    }

    #[test]
    fn unknown_ids_fall_back_to_first() {
        assert_eq!(BasePalette::resolve("mauve"), BasePalette::Zinc);
        assert_eq!(Radius::resolve("2.5"), Radius::Default);
        assert_eq!(Font::resolve("comic-sans"), Font::Inter);
        assert_eq!(Mode::resolve("sepia"), Mode::Light);
        assert_eq!(Mode::resolve(""), Mode::Light);
    }

    #[test]
    fn ids_are_case_sensitive() {
        assert_eq!(BasePalette::from_id("Zinc"), None);
    }

    #[test]
    fn only_default_radius_has_no_value() {
        for r in Radius::ALL {
            assert_eq!(r.rem().is_none(), *r == Radius::Default, "{r:?}");
        }
    }

    #[test]
    fn palette_tokens_are_normalized() {
        for p in BasePalette::ALL {
            for mode in Mode::ALL {
                for (token, color) in p.tokens(*mode) {
                    assert!(color.is_normalized(), "{p:?} {mode:?} {token:?}: {color:?}");
                }
            }
        }
    }

    #[test]
    fn palette_tokens_exclude_computed_ones() {
        for mode in Mode::ALL {
            let tokens = BasePalette::Zinc.tokens(*mode);
            assert!(tokens.iter().all(|(t, _)| !matches!(
                t,
                Token::Primary
                    | Token::PrimaryForeground
                    | Token::Destructive
                    | Token::DestructiveForeground
                    | Token::Radius
                    | Token::FontSans
            )));
        }
    }

    #[test]
    fn dark_background_is_darker_than_light() {
        for p in BasePalette::ALL {
            let light = p.tokens(Mode::Light)[0].1;
            let dark = p.tokens(Mode::Dark)[0].1;
            assert!(dark.l < light.l, "{p:?}");
        }
    }

    #[test]
    fn zinc_native_primary() {
        assert_eq!(
            BasePalette::Zinc.native_primary().to_string(),
            "oklch(0.21 0.006 285.885)"
        );
    }

    #[test]
    fn mode_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&Mode::Dark).unwrap(), "\"dark\"");
    }
}
