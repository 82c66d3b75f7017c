// SPDX-License-Identifier: MIT
//
// tinct — generate accessible two-mode design tokens from a few choices.
//
// This is the command-line front end over the library crates:
//
//   tinct-color → OKLCH values, dark-mode shift, foreground selection
//   tinct-theme → catalogs, selection, presets, token maps, stylesheet
//
// A run builds one ThemeSelection from layered configuration, lowest
// precedence first:
//
//   defaults → --selection FILE (JSON) → --query STRING → --preset ID → flags
//
// then runs the pipeline once and prints the requested output to stdout.
// Logs go to stderr; `TINCT_LOG` overrides the `-v` verbosity.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use tinct_theme::catalog::{BasePalette, Catalog, Font, Mode, Radius};
use tinct_theme::preset::{PRESETS, Preset};
use tinct_theme::selection::{SelectionPatch, ThemeSelection};
use tinct_theme::{generate, state};

// ─── Command line ───────────────────────────────────────────────────────────

/// What to print.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Paste-ready stylesheet.
    Css,
    /// Light and dark token maps plus the matched preset, as JSON.
    Json,
    /// Inline custom properties for the selected mode.
    Inline,
    /// The resolved selection as a query string.
    Query,
    /// The resolved selection as JSON, loadable with `--selection`.
    Selection,
}

#[derive(Debug, Parser)]
#[command(
    name = "tinct",
    version,
    about = "Generate design tokens and a stylesheet from a few choices"
)]
struct Cli {
    /// JSON selection file to start from.
    #[arg(long, value_name = "FILE")]
    selection: Option<PathBuf>,

    /// Selection query string, e.g. `base=zinc&l=0.21&c=0.006&h=285.885`.
    #[arg(long, value_name = "QUERY")]
    query: Option<String>,

    /// Accent preset id; see `--list`.
    #[arg(long, value_name = "ID")]
    preset: Option<String>,

    /// Base palette id.
    #[arg(long, value_name = "ID")]
    base: Option<String>,

    /// Primary lightness, 0 to 1.
    #[arg(short = 'l', long, allow_negative_numbers = true)]
    lightness: Option<f64>,

    /// Primary chroma, 0 and up.
    #[arg(short = 'c', long, allow_negative_numbers = true)]
    chroma: Option<f64>,

    /// Primary hue in degrees.
    #[arg(short = 'H', long, allow_negative_numbers = true)]
    hue: Option<f64>,

    /// Radius preset id.
    #[arg(long, value_name = "ID")]
    radius: Option<String>,

    /// Font id.
    #[arg(long, value_name = "ID")]
    font: Option<String>,

    /// `light` or `dark`.
    #[arg(long, value_name = "MODE")]
    mode: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Css)]
    format: Format,

    /// Print the catalogs and presets instead of generating.
    #[arg(long)]
    list: bool,

    /// More logging (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// The individual field flags as one patch.
    fn flag_patch(&self) -> SelectionPatch {
        SelectionPatch {
            base: self.base.clone(),
            lightness: self.lightness,
            chroma: self.chroma,
            hue: self.hue,
            radius: self.radius.clone(),
            font: self.font.clone(),
            mode: self.mode.clone(),
        }
    }
}

// ─── Selection layering ─────────────────────────────────────────────────────

/// Resolve the selection from every configuration layer.
fn build_selection(cli: &Cli) -> Result<ThemeSelection> {
    let mut patch = SelectionPatch::default();

    if let Some(path) = &cli.selection {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading selection file {}", path.display()))?;
        let file_patch = state::patch_from_json(&text)
            .with_context(|| format!("decoding selection file {}", path.display()))?;
        patch = patch.merge(file_patch);
    }

    if let Some(query) = &cli.query {
        patch = patch.merge(state::patch_from_query(query));
    }

    if let Some(id) = &cli.preset {
        match Preset::by_id(id) {
            Some(preset) => patch = patch.merge(SelectionPatch::primary(preset.swatch)),
            None => warn!(preset = id.as_str(), "unknown preset, ignoring"),
        }
    }

    patch = patch.merge(cli.flag_patch());
    debug!(?patch, "resolved selection layers");

    Ok(ThemeSelection::default().with(&patch))
}

// ─── Output ─────────────────────────────────────────────────────────────────

fn render(cli: &Cli, selection: &ThemeSelection) -> Result<String> {
    let theme = generate(selection);
    Ok(match cli.format {
        Format::Css => theme.stylesheet,
        Format::Json => {
            let doc = serde_json::json!({
                "preset": theme.preset,
                "mode": selection.mode(),
                "light": theme.tokens.light,
                "dark": theme.tokens.dark,
            });
            let mut text = serde_json::to_string_pretty(&doc).context("encoding tokens")?;
            text.push('\n');
            text
        }
        Format::Inline => {
            let mut text = theme.tokens.for_mode(selection.mode()).to_inline_style();
            text.push('\n');
            text
        }
        Format::Query => {
            let mut text = state::to_query(selection);
            text.push('\n');
            text
        }
        Format::Selection => {
            let mut text = state::to_json(selection)?;
            text.push('\n');
            text
        }
    })
}

fn list_catalogs() -> String {
    fn section<C: Catalog>(out: &mut String, title: &str) {
        out.push_str(title);
        out.push('\n');
        for entry in C::ALL {
            out.push_str(&format!("  {:<16}{}\n", entry.id(), entry.label()));
        }
    }

    let mut out = String::new();
    section::<BasePalette>(&mut out, "Base palettes:");
    section::<Radius>(&mut out, "Radius:");
    section::<Font>(&mut out, "Fonts:");
    section::<Mode>(&mut out, "Modes:");
    out.push_str("Presets:\n");
    for preset in PRESETS {
        out.push_str(&format!("  {:<16}{}\n", preset.id, preset.swatch));
    }
    out
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let text = if cli.list {
        list_catalogs()
    } else {
        render(cli, &build_selection(cli)?)?
    };
    out.write_all(text.as_bytes()).context("writing output")?;
    Ok(())
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("TINCT_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli, &mut io::stdout().lock()) {
        eprintln!("tinct: {e:#}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
