// SPDX-License-Identifier: MIT
//
// tinct-color — OKLCH color values for design-token generation.
//
// Every user-facing color in tinct is an OKLCH triple. This crate owns that
// value type, its CSS text form, and the two perceptual derivations the
// token pipeline needs:
//
//   color.rs → Color (L, C, H, alpha), sanitizing, `oklch(...)` formatting
//   math.rs  → dark-mode primary shift, accessible foreground selection
//
// Nothing here allocates on the hot path except text formatting, and
// nothing can fail: out-of-range input is clamped or wrapped.

pub mod color;
pub mod math;

pub use color::Color;
pub use math::{accessible_foreground, derive_dark_primary};
