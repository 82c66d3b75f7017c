// SPDX-License-Identifier: MIT
//
// OKLCH color values and their CSS text form.
//
// Single-character field names (l, c, h) are the standard convention in
// color science and match the CSS `oklch()` argument order.
#![allow(clippy::many_single_char_names)]
//
// Tokens are emitted as CSS Color 4 `oklch()` literals, so a `Color` never
// leaves OKLCH space here. Components are f64 so catalog values such as
// `285.885` survive to text exactly as written.

use std::fmt;

// ─── Color ───────────────────────────────────────────────────────────────────

/// A perceptual color stored in OKLCH space with alpha transparency.
///
/// OKLCH is the cylindrical form of Oklab: lightness, chroma, and hue. Equal
/// numeric steps produce roughly equal visual steps, which is why the dark
/// mode shift in [`crate::math`] can be a fixed lightness offset.
///
/// Equality is exact on every component. Preset matching depends on this:
/// a slider nudge of any size must stop matching.
///
/// # Examples
///
/// ```
/// use tinct_color::Color;
///
/// let zinc = Color::oklch(0.21, 0.006, 285.885);
/// assert_eq!(zinc.to_string(), "oklch(0.21 0.006 285.885)");
///
/// let border = Color::oklcha(1.0, 0.0, 0.0, 0.1);
/// assert_eq!(border.to_string(), "oklch(1 0 0 / 10%)");
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Color {
    /// Lightness: 0.0 (black) to 1.0 (white).
    pub l: f64,

    /// Chroma (colorfulness): 0.0 (gray) upward. sRGB tops out near 0.37.
    pub c: f64,

    /// Hue angle in degrees, in `[0, 360)`.
    pub h: f64,

    /// Alpha (opacity): 0.0 (fully transparent) to 1.0 (fully opaque).
    pub alpha: f64,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create an opaque color from OKLCH values, taken as-is.
    ///
    /// Use [`Color::clamped`] when the values come from user input.
    #[inline]
    #[must_use]
    pub const fn oklch(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h, alpha: 1.0 }
    }

    /// Create a color from OKLCH values with alpha.
    #[inline]
    #[must_use]
    pub const fn oklcha(l: f64, c: f64, h: f64, alpha: f64) -> Self {
        Self { l, c, h, alpha }
    }

    /// Pure black.
    pub const BLACK: Self = Self::oklch(0.0, 0.0, 0.0);

    /// Pure white.
    pub const WHITE: Self = Self::oklch(1.0, 0.0, 0.0);

    // ─── Queries ─────────────────────────────────────────────────────────

    /// Whether this color is fully opaque (alpha >= 1.0).
    #[inline]
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.alpha >= 1.0
    }

    /// Whether every component is already inside its valid range.
    #[must_use]
    pub fn is_normalized(self) -> bool {
        (0.0..=1.0).contains(&self.l)
            && self.c >= 0.0
            && (0.0..360.0).contains(&self.h)
            && (0.0..=1.0).contains(&self.alpha)
    }

    /// Whether the (L, C, H) components are bit-for-bit the same as `other`'s.
    ///
    /// Alpha is ignored. `0.0` and `-0.0` compare equal.
    #[inline]
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn same_triple(self, other: Self) -> bool {
        self.l == other.l && self.c == other.c && self.h == other.h
    }

    // ─── Sanitizing ──────────────────────────────────────────────────────

    /// Bring every component into range: L and alpha clamp to 0.0–1.0,
    /// C clamps to >= 0.0, H wraps into `[0, 360)`.
    ///
    /// Non-finite components become 0.0 (alpha becomes 1.0). Never fails.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            l: finite_or(self.l, 0.0).clamp(0.0, 1.0),
            c: finite_or(self.c, 0.0).max(0.0),
            h: normalize_hue(finite_or(self.h, 0.0)),
            alpha: finite_or(self.alpha, 1.0).clamp(0.0, 1.0),
        }
    }

    // ─── Perceptual Operations ───────────────────────────────────────────

    /// Increase lightness by `amount` (clamped to 0.0–1.0).
    #[inline]
    #[must_use]
    pub fn lighten(self, amount: f64) -> Self {
        Self {
            l: (self.l + amount).clamp(0.0, 1.0),
            ..self
        }
    }

    /// Decrease lightness by `amount` (clamped to 0.0–1.0).
    #[inline]
    #[must_use]
    pub fn darken(self, amount: f64) -> Self {
        Self {
            l: (self.l - amount).clamp(0.0, 1.0),
            ..self
        }
    }

    /// Set lightness to an absolute value (clamped to 0.0–1.0).
    #[inline]
    #[must_use]
    pub fn set_lightness(self, l: f64) -> Self {
        Self {
            l: finite_or(l, self.l).clamp(0.0, 1.0),
            ..self
        }
    }

    /// Set chroma to an absolute value (clamped to >= 0.0).
    #[inline]
    #[must_use]
    pub fn set_chroma(self, c: f64) -> Self {
        Self {
            c: finite_or(c, self.c).max(0.0),
            ..self
        }
    }

    /// Set hue to an absolute angle (normalized to 0°–360°).
    #[inline]
    #[must_use]
    pub fn set_hue(self, h: f64) -> Self {
        Self {
            h: normalize_hue(finite_or(h, self.h)),
            ..self
        }
    }

    /// Return a copy with the given alpha value.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "Color::oklch({}, {}, {})", self.l, self.c, self.h)
        } else {
            write!(
                f,
                "Color::oklcha({}, {}, {}, {})",
                self.l, self.c, self.h, self.alpha
            )
        }
    }
}

impl fmt::Display for Color {
    /// CSS Color 4 form: `oklch(L C H)`, or `oklch(L C H / A%)` when
    /// translucent.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "oklch({} {} {}",
            format_component(self.l),
            format_component(self.c),
            format_hue(self.h)
        )?;
        if !self.is_opaque() {
            write!(f, " / {}%", format_component(self.alpha * 100.0))?;
        }
        f.write_str(")")
    }
}

impl Default for Color {
    /// Default is fully opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Format one `oklch()` component: at most four decimals, trailing zeros
/// and a trailing point trimmed, never `-0`.
///
/// Four decimals absorb float noise from arithmetic (0.21 + 0.12 prints as
/// `0.33`) while keeping every catalog value exact.
#[must_use]
pub fn format_component(value: f64) -> String {
    let mut s = format!("{value:.4}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}

/// Format a hue like [`format_component`], wrapping after rounding so a hue
/// just under 360 prints as `0`, never `360`.
#[must_use]
pub fn format_hue(h: f64) -> String {
    format_component(normalize_hue((h * 10_000.0).round() / 10_000.0))
}

/// Wrap a hue angle into `[0, 360)`.
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

#[inline]
const fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Formatting ───────────────────────────────────────────────────────

    #[test]
    fn display_opaque() {
        let c = Color::oklch(0.21, 0.006, 285.885);
        assert_eq!(c.to_string(), "oklch(0.21 0.006 285.885)");
    }

    #[test]
    fn display_translucent_uses_percent() {
        assert_eq!(Color::oklcha(1.0, 0.0, 0.0, 0.15).to_string(), "oklch(1 0 0 / 15%)");
    }

    #[test]
    fn display_integers_have_no_point() {
        assert_eq!(Color::WHITE.to_string(), "oklch(1 0 0)");
        assert_eq!(Color::BLACK.to_string(), "oklch(0 0 0)");
    }

    #[test]
    fn format_absorbs_float_noise() {
        assert_eq!(format_component(0.21 + 0.12), "0.33");
        assert_eq!(format_component(0.1 + 0.2), "0.3");
    }

    #[test]
    fn format_never_negative_zero() {
        assert_eq!(format_component(-0.0), "0");
        assert_eq!(format_component(-0.000_01), "0");
    }

    #[test]
    fn format_keeps_small_chroma() {
        assert_eq!(format_component(0.0035), "0.0035");
        assert_eq!(format_component(0.245), "0.245");
    }

    // ── Sanitizing ───────────────────────────────────────────────────────

    #[test]
    fn clamped_limits_lightness_and_chroma() {
        let c = Color::oklch(1.4, -0.2, 30.0).clamped();
        assert_eq!(c.l, 1.0);
        assert_eq!(c.c, 0.0);
        assert_eq!(c.h, 30.0);
    }

    #[test]
    fn clamped_wraps_hue() {
        assert_eq!(Color::oklch(0.5, 0.1, 370.0).clamped().h, 10.0);
        assert_eq!(Color::oklch(0.5, 0.1, -90.0).clamped().h, 270.0);
        assert_eq!(Color::oklch(0.5, 0.1, 360.0).clamped().h, 0.0);
    }

    #[test]
    fn clamped_replaces_non_finite() {
        let c = Color::oklcha(f64::NAN, f64::INFINITY, f64::NEG_INFINITY, f64::NAN).clamped();
        assert!(c.is_normalized());
        assert_eq!(c, Color::BLACK);
    }

    #[test]
    fn normalize_hue_tiny_negative_stays_in_range() {
        let h = normalize_hue(-1e-20);
        assert!((0.0..360.0).contains(&h), "hue out of range: {h}");
    }

    #[test]
    fn hue_just_below_full_turn_prints_as_zero() {
        let c = Color::oklch(0.5, 0.1, 359.999_99).clamped();
        assert!(c.h < 360.0);
        assert_eq!(c.to_string(), "oklch(0.5 0.1 0)");
        assert_eq!(format_hue(359.999_94), "359.9999");
        assert_eq!(format_hue(285.885), "285.885");
    }

    // ── Operations ───────────────────────────────────────────────────────

    #[test]
    fn lighten_and_darken_clamp() {
        let c = Color::oklch(0.9, 0.0, 0.0);
        assert_eq!(c.lighten(0.5).l, 1.0);
        assert_eq!(c.darken(2.0).l, 0.0);
    }

    #[test]
    fn setters_ignore_non_finite() {
        let c = Color::oklch(0.5, 0.1, 200.0);
        assert_eq!(c.set_lightness(f64::NAN).l, 0.5);
        assert_eq!(c.set_chroma(f64::INFINITY).c, 0.1);
        assert_eq!(c.set_hue(f64::NAN).h, 200.0);
        assert_eq!(c.set_hue(725.0).h, 5.0);
    }

    #[test]
    fn equality_is_exact() {
        let a = Color::oklch(0.637, 0.237, 25.331);
        assert_eq!(a, Color::oklch(0.637, 0.237, 25.331));
        assert_ne!(a, Color::oklch(0.637, 0.237, 25.331 + 1e-9));
        assert!(a.same_triple(a.with_alpha(0.5)));
    }
}
