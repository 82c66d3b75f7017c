//! Stylesheet emission — token maps to paste-ready CSS.
//!
//! Output layout:
//!
//! ```text
//! @theme inline {      fixed semantic aliases (radius scale, --color-*)
//! }
//!
//! :root {              light token map
//! }
//!
//! .dark {              dark token map
//! }
//! ```
//!
//! The text depends on nothing but the token maps: no timestamps, no
//! environment, no hash ordering.

use crate::tokens::{ThemeTokens, Token, TokenMap};

/// Selector for the light-mode block.
pub const LIGHT_SELECTOR: &str = ":root";

/// Selector for the dark-mode block.
pub const DARK_SELECTOR: &str = ".dark";

/// Radius scale derived from `--radius` by fixed offsets.
const RADIUS_ALIASES: &[(&str, &str)] = &[
    ("--radius-sm", "calc(var(--radius) - 4px)"),
    ("--radius-md", "calc(var(--radius) - 2px)"),
    ("--radius-lg", "var(--radius)"),
    ("--radius-xl", "calc(var(--radius) + 4px)"),
];

/// The fixed alias block that opens every stylesheet.
///
/// Independent of any selection: it only refers to tokens by name.
#[must_use]
pub fn alias_header() -> String {
    let mut out = String::from("@theme inline {\n");
    for (name, value) in RADIUS_ALIASES {
        out.push_str(&format!("  {name}: {value};\n"));
    }
    for token in Token::ALL.iter().copied().filter(|t| t.is_color()) {
        let name = token.name().trim_start_matches("--");
        out.push_str(&format!("  --color-{name}: var(--{name});\n"));
    }
    out.push_str("}\n");
    out
}

/// Render one selector block.
#[must_use]
pub fn emit_block(selector: &str, map: &TokenMap) -> String {
    let mut out = format!("{selector} {{\n");
    for (name, value) in map.iter() {
        out.push_str(&format!("  {name}: {value};\n"));
    }
    out.push_str("}\n");
    out
}

/// Render the full stylesheet: alias header, light block, dark block.
#[must_use]
pub fn emit(tokens: &ThemeTokens) -> String {
    let mut out = alias_header();
    out.push('\n');
    out.push_str(&emit_block(LIGHT_SELECTOR, &tokens.light));
    out.push('\n');
    out.push_str(&emit_block(DARK_SELECTOR, &tokens.dark));
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn small_tokens() -> ThemeTokens {
        let mut light = TokenMap::new();
        light.insert(Token::Foreground, "oklch(0.141 0.005 285.823)");
        light.insert(Token::Background, "oklch(1 0 0)");
        let mut dark = TokenMap::new();
        dark.insert(Token::Background, "oklch(0.141 0.005 285.823)");
        ThemeTokens { light, dark }
    }

    #[test]
    fn block_layout() {
        let tokens = small_tokens();
        assert_eq!(
            emit_block(LIGHT_SELECTOR, &tokens.light),
            concat!(
                ":root {\n",
                "  --background: oklch(1 0 0);\n",
                "  --foreground: oklch(0.141 0.005 285.823);\n",
                "}\n",
            )
        );
    }

    #[test]
    fn empty_block() {
        assert_eq!(emit_block(DARK_SELECTOR, &TokenMap::new()), ".dark {\n}\n");
    }

    #[test]
    fn header_derives_radius_scale() {
        let header = alias_header();
        assert!(header.starts_with("@theme inline {\n  --radius-sm: calc(var(--radius) - 4px);\n"));
        assert!(header.contains("  --radius-xl: calc(var(--radius) + 4px);\n"));
        assert!(header.ends_with("}\n"));
    }

    #[test]
    fn header_aliases_colors_only() {
        let header = alias_header();
        assert!(header.contains("  --color-primary-foreground: var(--primary-foreground);\n"));
        assert!(header.contains("  --color-ring: var(--ring);\n"));
        assert!(!header.contains("--color-radius"));
        assert!(!header.contains("--color-font-sans"));
    }

    #[test]
    fn document_order() {
        let css = emit(&small_tokens());
        let header = css.find("@theme inline").unwrap();
        let root = css.find(":root {").unwrap();
        let dark = css.find(".dark {").unwrap();
        assert!(header < root && root < dark);
        assert!(css.ends_with("}\n"));
    }

    #[test]
    fn emit_is_idempotent() {
        let tokens = small_tokens();
        assert_eq!(emit(&tokens), emit(&tokens));
    }
}
