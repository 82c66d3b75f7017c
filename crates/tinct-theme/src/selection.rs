//! The user's theme choices, and partial updates to them.
//!
//! A [`ThemeSelection`] is a plain value owned by the caller. It is never
//! invalid: every setter clamps numbers or falls back on unknown ids, so the
//! pipeline can run on whatever the UI layer hands over.

use serde::{Deserialize, Serialize};
use tinct_color::Color;

use crate::catalog::{BasePalette, Catalog, Font, Mode, Radius};
use crate::preset::Preset;

// ---------------------------------------------------------------------------
// ThemeSelection
// ---------------------------------------------------------------------------

/// Base palette, primary color, radius, font, and mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeSelection {
    base: BasePalette,
    primary: Color,
    radius: Radius,
    font: Font,
    mode: Mode,
}

impl Default for ThemeSelection {
    /// First entry of every catalog, with the base palette's own primary.
    fn default() -> Self {
        let base = BasePalette::first();
        Self {
            base,
            primary: base.native_primary(),
            radius: Radius::first(),
            font: Font::first(),
            mode: Mode::first(),
        }
    }
}

impl ThemeSelection {
    // ── Getters ──────────────────────────────────────────────────────

    #[must_use]
    pub const fn base(&self) -> BasePalette {
        self.base
    }

    /// The chosen primary. Always normalized (L in 0–1, C >= 0, H in 0–360).
    #[must_use]
    pub const fn primary(&self) -> Color {
        self.primary
    }

    #[must_use]
    pub const fn radius(&self) -> Radius {
        self.radius
    }

    #[must_use]
    pub const fn font(&self) -> Font {
        self.font
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    // ── Setters ──────────────────────────────────────────────────────

    pub const fn set_base(&mut self, base: BasePalette) -> &mut Self {
        self.base = base;
        self
    }

    /// Set the base palette by id; unknown ids select the first palette.
    pub fn set_base_id(&mut self, id: &str) -> &mut Self {
        self.set_base(BasePalette::resolve(id))
    }

    /// Replace the whole primary triple.
    ///
    /// Components are clamped or wrapped; a non-finite component keeps its
    /// current value. Alpha is forced opaque.
    pub fn set_primary(&mut self, color: Color) -> &mut Self {
        self.set_lightness(color.l).set_chroma(color.c).set_hue(color.h)
    }

    pub fn set_lightness(&mut self, l: f64) -> &mut Self {
        self.primary = self.primary.set_lightness(l);
        self
    }

    pub fn set_chroma(&mut self, c: f64) -> &mut Self {
        self.primary = self.primary.set_chroma(c);
        self
    }

    pub fn set_hue(&mut self, h: f64) -> &mut Self {
        self.primary = self.primary.set_hue(h);
        self
    }

    pub const fn set_radius(&mut self, radius: Radius) -> &mut Self {
        self.radius = radius;
        self
    }

    pub fn set_radius_id(&mut self, id: &str) -> &mut Self {
        self.set_radius(Radius::resolve(id))
    }

    pub const fn set_font(&mut self, font: Font) -> &mut Self {
        self.font = font;
        self
    }

    pub fn set_font_id(&mut self, id: &str) -> &mut Self {
        self.set_font(Font::resolve(id))
    }

    pub const fn set_mode(&mut self, mode: Mode) -> &mut Self {
        self.mode = mode;
        self
    }

    pub fn set_mode_id(&mut self, id: &str) -> &mut Self {
        self.set_mode(Mode::resolve(id))
    }

    /// Adopt a preset's swatch as the primary color.
    pub fn apply_preset(&mut self, preset: &Preset) -> &mut Self {
        self.set_primary(preset.swatch)
    }

    /// Merge a partial update. Fields absent from `patch` keep their value.
    pub fn apply(&mut self, patch: &SelectionPatch) -> &mut Self {
        if let Some(id) = &patch.base {
            self.set_base_id(id);
        }
        if let Some(l) = patch.lightness {
            self.set_lightness(l);
        }
        if let Some(c) = patch.chroma {
            self.set_chroma(c);
        }
        if let Some(h) = patch.hue {
            self.set_hue(h);
        }
        if let Some(id) = &patch.radius {
            self.set_radius_id(id);
        }
        if let Some(id) = &patch.font {
            self.set_font_id(id);
        }
        if let Some(id) = &patch.mode {
            self.set_mode_id(id);
        }
        self
    }

    /// A copy with `patch` applied.
    #[must_use]
    pub fn with(mut self, patch: &SelectionPatch) -> Self {
        self.apply(patch);
        self
    }
}

// ---------------------------------------------------------------------------
// SelectionPatch
// ---------------------------------------------------------------------------

/// A partial [`ThemeSelection`], as it arrives from the outside: raw ids and
/// numbers, any of them missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lightness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chroma: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

impl SelectionPatch {
    /// A patch that sets every field to `selection`'s value.
    #[must_use]
    pub fn from_selection(selection: &ThemeSelection) -> Self {
        let primary = selection.primary();
        Self {
            base: Some(selection.base().id().to_string()),
            lightness: Some(primary.l),
            chroma: Some(primary.c),
            hue: Some(primary.h),
            radius: Some(selection.radius().id().to_string()),
            font: Some(selection.font().id().to_string()),
            mode: Some(selection.mode().id().to_string()),
        }
    }

    /// A patch that only sets the primary triple.
    #[must_use]
    pub const fn primary(color: Color) -> Self {
        Self {
            base: None,
            lightness: Some(color.l),
            chroma: Some(color.c),
            hue: Some(color.h),
            radius: None,
            font: None,
            mode: None,
        }
    }

    /// Layer `other` on top of `self`: fields set in `other` win.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            base: other.base.or(self.base),
            lightness: other.lightness.or(self.lightness),
            chroma: other.chroma.or(self.chroma),
            hue: other.hue.or(self.hue),
            radius: other.radius.or(self.radius),
            font: other.font.or(self.font),
            mode: other.mode.or(self.mode),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_is_zinc_light() {
        let s = ThemeSelection::default();
        assert_eq!(s.base(), BasePalette::Zinc);
        assert_eq!(s.primary(), Color::oklch(0.21, 0.006, 285.885));
        assert_eq!(s.radius(), Radius::Default);
        assert_eq!(s.font(), Font::Inter);
        assert_eq!(s.mode(), Mode::Light);
    }

    #[test]
    fn setters_clamp_and_wrap() {
        let mut s = ThemeSelection::default();
        s.set_lightness(1.7).set_chroma(-0.3).set_hue(-30.0);
        assert_eq!(s.primary(), Color::oklch(1.0, 0.0, 330.0));
    }

    #[test]
    fn non_finite_components_keep_previous_value() {
        let mut s = ThemeSelection::default();
        let before = s.primary();
        s.set_primary(Color::oklch(f64::NAN, 0.1, f64::INFINITY));
        assert_eq!(s.primary(), Color::oklch(before.l, 0.1, before.h));
    }

    #[test]
    fn set_primary_drops_alpha() {
        let mut s = ThemeSelection::default();
        s.set_primary(Color::oklcha(0.5, 0.1, 10.0, 0.2));
        assert!(s.primary().is_opaque());
    }

    #[test]
    fn unknown_ids_fall_back() {
        let mut s = ThemeSelection::default();
        s.set_base_id("slate").set_base_id("mauve");
        s.set_radius_id("0.5").set_radius_id("huge");
        s.set_font_id("nope");
        s.set_mode_id("dark");
        assert_eq!(s.base(), BasePalette::Zinc);
        assert_eq!(s.radius(), Radius::Default);
        assert_eq!(s.font(), Font::Inter);
        assert_eq!(s.mode(), Mode::Dark);
    }

    #[test]
    fn apply_only_touches_present_fields() {
        let mut s = ThemeSelection::default();
        s.set_radius(Radius::Large).set_font(Font::Figtree);
        let patch = SelectionPatch {
            hue: Some(120.0),
            mode: Some("dark".into()),
            ..SelectionPatch::default()
        };
        s.apply(&patch);
        assert_eq!(s.primary().h, 120.0);
        assert_eq!(s.primary().l, 0.21);
        assert_eq!(s.mode(), Mode::Dark);
        assert_eq!(s.radius(), Radius::Large);
        assert_eq!(s.font(), Font::Figtree);
    }

    #[test]
    fn full_patch_reproduces_selection() {
        let mut s = ThemeSelection::default();
        s.set_base(BasePalette::Gray)
            .set_primary(Color::oklch(0.6, 0.118, 184.704))
            .set_radius(Radius::Small)
            .set_font(Font::System)
            .set_mode(Mode::Dark);
        let patch = SelectionPatch::from_selection(&s);
        assert_eq!(ThemeSelection::default().with(&patch), s);
    }

    #[test]
    fn merge_prefers_later_layer() {
        let a = SelectionPatch {
            base: Some("slate".into()),
            hue: Some(10.0),
            ..SelectionPatch::default()
        };
        let b = SelectionPatch {
            hue: Some(20.0),
            font: Some("geist".into()),
            ..SelectionPatch::default()
        };
        let merged = a.merge(b);
        assert_eq!(merged.base.as_deref(), Some("slate"));
        assert_eq!(merged.hue, Some(20.0));
        assert_eq!(merged.font.as_deref(), Some("geist"));
    }

    #[test]
    fn empty_patch() {
        assert!(SelectionPatch::default().is_empty());
        assert!(!SelectionPatch::primary(Color::WHITE).is_empty());
    }

    #[test]
    fn apply_preset_sets_primary() {
        let preset = Preset::by_id("blue").unwrap();
        let mut s = ThemeSelection::default();
        s.apply_preset(preset);
        assert_eq!(s.primary(), preset.swatch);
    }
}
