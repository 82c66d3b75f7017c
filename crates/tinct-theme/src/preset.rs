//! Accent presets — curated one-click primary colors.
//!
//! Matching is exact on L, C, and H: it exists to highlight the swatch the
//! user picked, so any slider nudge away from a preset turns the highlight
//! off. The match result never feeds back into token values.

use tinct_color::Color;

/// A named primary color shortcut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub id: &'static str,
    pub label: &'static str,
    pub swatch: Color,
}

impl Preset {
    const fn new(id: &'static str, label: &'static str, l: f64, c: f64, h: f64) -> Self {
        Self { id, label, swatch: Color::oklch(l, c, h) }
    }

    /// Look up a preset in [`PRESETS`] by id.
    #[must_use]
    pub fn by_id(id: &str) -> Option<&'static Self> {
        PRESETS.iter().find(|p| p.id == id)
    }
}

/// The preset catalog, in display order.
pub const PRESETS: &[Preset] = &[
    Preset::new("zinc", "Zinc", 0.21, 0.006, 285.885),
    Preset::new("red", "Red", 0.637, 0.237, 25.331),
    Preset::new("rose", "Rose", 0.645, 0.246, 16.439),
    Preset::new("orange", "Orange", 0.646, 0.222, 41.116),
    Preset::new("amber", "Amber", 0.769, 0.188, 70.08),
    Preset::new("yellow", "Yellow", 0.852, 0.199, 91.936),
    Preset::new("green", "Green", 0.648, 0.2, 131.684),
    Preset::new("teal", "Teal", 0.6, 0.118, 184.704),
    Preset::new("sky", "Sky", 0.685, 0.169, 237.323),
    Preset::new("blue", "Blue", 0.546, 0.245, 262.881),
    Preset::new("violet", "Violet", 0.541, 0.281, 293.009),
];

/// The preset whose swatch equals `color` exactly, if any.
#[must_use]
pub fn match_preset(color: Color) -> Option<&'static Preset> {
    match_preset_in(PRESETS, color)
}

/// [`match_preset`] over an arbitrary catalog. With duplicate swatches the
/// first entry wins.
#[must_use]
pub fn match_preset_in(catalog: &[Preset], color: Color) -> Option<&Preset> {
    catalog.iter().find(|p| p.swatch.same_triple(color))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
