//! Boundary adapter — persisting a selection as a URL query or JSON.
//!
//! The pipeline never calls into this module. A host that keeps the
//! selection in a URL or on disk encodes it here and decodes it back into a
//! [`SelectionPatch`] to apply on top of its defaults.
//!
//! Query form: `base=zinc&l=0.21&c=0.006&h=285.885&radius=default&font=inter&mode=dark`.
//! Decoding a query is fail-soft: unknown keys and malformed numbers are
//! skipped with a warning. JSON decoding reports syntax errors.

use thiserror::Error;
use tracing::warn;
use url::form_urlencoded;

use crate::selection::{SelectionPatch, ThemeSelection};

/// Errors from decoding or encoding persisted selection state.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("invalid selection JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Encode every field of `selection` as a query string (no leading `?`).
///
/// Values are form-urlencoded, so the result can be appended to a URL as is.
#[must_use]
pub fn to_query(selection: &ThemeSelection) -> String {
    let patch = SelectionPatch::from_selection(selection);
    let mut query = form_urlencoded::Serializer::new(String::new());
    if let Some(v) = &patch.base {
        query.append_pair("base", v);
    }
    if let Some(v) = patch.lightness {
        query.append_pair("l", &v.to_string());
    }
    if let Some(v) = patch.chroma {
        query.append_pair("c", &v.to_string());
    }
    if let Some(v) = patch.hue {
        query.append_pair("h", &v.to_string());
    }
    if let Some(v) = &patch.radius {
        query.append_pair("radius", v);
    }
    if let Some(v) = &patch.font {
        query.append_pair("font", v);
    }
    if let Some(v) = &patch.mode {
        query.append_pair("mode", v);
    }
    query.finish()
}

/// Decode a query string into a patch. A leading `?` is accepted, and keys
/// and values are percent-decoded with `+` read as a space.
///
/// Never fails. Later duplicates of a key win.
#[must_use]
pub fn patch_from_query(query: &str) -> SelectionPatch {
    let mut patch = SelectionPatch::default();
    let query = query.trim().trim_start_matches('?');

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let key = key.as_ref();
        match key {
            "base" => patch.base = Some(value.into_owned()),
            "radius" => patch.radius = Some(value.into_owned()),
            "font" => patch.font = Some(value.into_owned()),
            "mode" => patch.mode = Some(value.into_owned()),
            "l" => patch.lightness = parse_number(key, &value).or(patch.lightness),
            "c" => patch.chroma = parse_number(key, &value).or(patch.chroma),
            "h" => patch.hue = parse_number(key, &value).or(patch.hue),
            _ => warn!(key, "ignoring unknown selection key"),
        }
    }

    patch
}

fn parse_number(key: &str, value: &str) -> Option<f64> {
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => Some(n),
        _ => {
            warn!(key, value, "ignoring malformed number");
            None
        }
    }
}

/// A selection decoded from a query, on top of the default selection.
#[must_use]
pub fn selection_from_query(query: &str) -> ThemeSelection {
    ThemeSelection::default().with(&patch_from_query(query))
}

/// Encode every field of `selection` as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`StateError::Json`] if serialization fails.
pub fn to_json(selection: &ThemeSelection) -> Result<String, StateError> {
    Ok(serde_json::to_string_pretty(&SelectionPatch::from_selection(selection))?)
}

/// Decode a JSON object into a patch. Missing fields stay unset.
///
/// # Errors
///
/// Returns [`StateError::Json`] on malformed JSON, wrong field types, or
/// unknown fields.
pub fn patch_from_json(json: &str) -> Result<SelectionPatch, StateError> {
    Ok(serde_json::from_str(json)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BasePalette, Font, Mode, Radius};
    use pretty_assertions::assert_eq;
    use tinct_color::Color;

    fn sample() -> ThemeSelection {
        let mut s = ThemeSelection::default();
        s.set_base(BasePalette::Slate)
            .set_primary(Color::oklch(0.546, 0.245, 262.881))
            .set_radius(Radius::Medium)
            .set_font(Font::Geist)
            .set_mode(Mode::Dark);
        s
    }

    #[test]
    fn query_encoding() {
        assert_eq!(
            to_query(&sample()),
            "base=slate&l=0.546&c=0.245&h=262.881&radius=0.5&font=geist&mode=dark"
        );
    }

    #[test]
    fn query_round_trip() {
        let s = sample();
        assert_eq!(selection_from_query(&to_query(&s)), s);
    }

    #[test]
    fn query_accepts_leading_question_mark() {
        let patch = patch_from_query("?mode=dark");
        assert_eq!(patch.mode.as_deref(), Some("dark"));
    }

    #[test]
    fn query_skips_bad_numbers_and_unknown_keys() {
        let patch = patch_from_query("l=abc&h=NaN&c=0.1&theme=x&&font");
        assert_eq!(patch.lightness, None);
        assert_eq!(patch.hue, None);
        assert_eq!(patch.chroma, Some(0.1));
        assert_eq!(patch.font.as_deref(), Some(""));
    }

    #[test]
    fn query_values_are_percent_decoded() {
        let s = selection_from_query("font=ibm%2Dplex%2Dsans&mode=dark");
        assert_eq!(s.font(), Font::IbmPlexSans);
        assert_eq!(s.mode(), Mode::Dark);

        let patch = patch_from_query("h=285%2E885&base=+zinc+");
        assert_eq!(patch.hue, Some(285.885));
        assert_eq!(patch.base.as_deref(), Some(" zinc "));
    }

    #[test]
    fn query_encoding_escapes_reserved_characters() {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair("font", "a&b c");
        let patch = patch_from_query(&query.finish());
        assert_eq!(patch.font.as_deref(), Some("a&b c"));
    }

    #[test]
    fn query_malformed_number_keeps_earlier_value() {
        let patch = patch_from_query("l=0.4&l=oops");
        assert_eq!(patch.lightness, Some(0.4));
    }

    #[test]
    fn empty_query_is_default_selection() {
        assert_eq!(selection_from_query(""), ThemeSelection::default());
    }

    #[test]
    fn query_unknown_ids_fall_back() {
        let s = selection_from_query("base=mauve&radius=9&font=papyrus");
        assert_eq!(s.base(), BasePalette::Zinc);
        assert_eq!(s.radius(), Radius::Default);
        assert_eq!(s.font(), Font::Inter);
    }

    #[test]
    fn json_round_trip() {
        let s = sample();
        let json = to_json(&s).unwrap();
        let patch = patch_from_json(&json).unwrap();
        assert_eq!(ThemeSelection::default().with(&patch), s);
    }

    #[test]
    fn json_partial() {
        let patch = patch_from_json(r#"{ "hue": 40.5 }"#).unwrap();
        assert_eq!(patch, SelectionPatch { hue: Some(40.5), ..SelectionPatch::default() });
    }

    #[test]
    fn json_errors() {
        assert!(matches!(patch_from_json("{"), Err(StateError::Json(_))));
        assert!(patch_from_json(r#"{ "hue": "red" }"#).is_err());
        assert!(patch_from_json(r#"{ "colour": 1 }"#).is_err());
    }
}
