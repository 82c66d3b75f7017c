// SPDX-License-Identifier: MIT
//
// Perceptual derivations for the accent ("primary") color.
//
// Both functions are deliberately simple fixed rules rather than contrast
// solvers. Same input, same output, on every platform.

use crate::color::Color;

/// Lightness added to the primary color for dark mode.
pub const DARK_LIGHTNESS_SHIFT: f64 = 0.12;

/// Upper bound on the shifted dark-mode lightness.
pub const DARK_LIGHTNESS_CEILING: f64 = 0.95;

/// Backgrounds strictly lighter than this get [`FOREGROUND_DARK`].
pub const FOREGROUND_THRESHOLD: f64 = 0.7;

/// Near-black foreground, used on light backgrounds.
pub const FOREGROUND_DARK: Color = Color::oklch(0.205, 0.0, 0.0);

/// Near-white foreground, used on dark and mid-tone backgrounds.
pub const FOREGROUND_LIGHT: Color = Color::oklch(0.985, 0.0, 0.0);

/// Shift a primary color for use on dark surfaces.
///
/// Returns `(min(L + 0.12, 0.95), C, H)`. The input is sanitized first (see
/// [`Color::clamped`]), so any numeric input produces a usable color.
///
/// ```
/// use tinct_color::{Color, derive_dark_primary};
///
/// let dark = derive_dark_primary(Color::oklch(0.21, 0.006, 285.885));
/// assert_eq!(dark.to_string(), "oklch(0.33 0.006 285.885)");
/// ```
#[must_use]
pub fn derive_dark_primary(primary: Color) -> Color {
    let primary = primary.clamped();
    Color {
        l: (primary.l + DARK_LIGHTNESS_SHIFT).min(DARK_LIGHTNESS_CEILING),
        ..primary
    }
}

/// Pick the text color to place on top of `background`.
///
/// Always one of exactly two literals: [`FOREGROUND_DARK`] when the
/// background's OKLCH lightness is above [`FOREGROUND_THRESHOLD`],
/// [`FOREGROUND_LIGHT`] otherwise. Chroma and hue do not participate.
#[must_use]
pub fn accessible_foreground(background: Color) -> Color {
    if background.clamped().l > FOREGROUND_THRESHOLD {
        FOREGROUND_DARK
    } else {
        FOREGROUND_LIGHT
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
