// SPDX-License-Identifier: MIT
//
// truchet: render text as Truchet-tile letters.
//
// The binary wires the two crates together:
//
//   truchet-tiles → text → glyphs → composed CharGrid
//   truchet-svg   → CharGrid → SVG document
//
// Flow:
//
//   args / stdin → Options (config file, then flags) → WordRenderer
//     ├─ no --svg/--open → grid text on stdout
//     └─ --svg PATH       → GridRenderer → file, or stdout for "-"
//        --open           → write (fresh temp file if needed), hand to the viewer

mod config;

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use truchet_svg::{GridRenderer, TileStyle};
use truchet_tiles::grid::CharGrid;
use truchet_tiles::source::GlyphSet;
use truchet_tiles::word::{Layout, RenderMode, WordRenderer};

use crate::config::Config;

// ─── Command line ───────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "truchet", version, about = "Render text as Truchet-tile letters")]
struct Cli {
    /// Text to render. Read from stdin when omitted.
    text: Vec<String>,

    /// Cut the letters out of a framed solid block.
    #[arg(short, long)]
    inverted: bool,

    /// Stack letters top to bottom.
    #[arg(long)]
    vertical: bool,

    /// Write an SVG document to PATH ("-" for stdout).
    #[arg(long, value_name = "PATH")]
    svg: Option<PathBuf>,

    /// Tile style for SVG output.
    #[arg(long, value_parser = parse_style, value_name = "bowtie|circle|triangle")]
    style: Option<TileStyle>,

    /// Swap the checkerboard orientation of every cell.
    #[arg(long)]
    flipped: bool,

    /// Side of one SVG cell.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    cell_size: Option<u32>,

    /// Directory of <letter>.txt glyph files.
    #[arg(long, value_name = "DIR")]
    glyphs: Option<PathBuf>,

    /// Config file (default: ~/.config/truchet/config.toml).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Open the SVG document with the system viewer.
    #[arg(long)]
    open: bool,
}

fn parse_style(name: &str) -> Result<TileStyle, String> {
    TileStyle::from_name(name).ok_or_else(|| {
        let names: Vec<&str> = TileStyle::all().iter().map(|s| s.name()).collect();
        format!("unknown style {name:?} (expected one of {})", names.join(", "))
    })
}

// ─── Resolved options ───────────────────────────────────────────────────────

/// Everything a run needs, after the config file and flags are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Options {
    mode: RenderMode,
    layout: Layout,
    style: TileStyle,
    flipped: bool,
    cell_size: u32,
    glyph_dir: Option<PathBuf>,
    svg: Option<PathBuf>,
    open: bool,
}

impl Options {
    /// Flags win over the file. Boolean flags can only switch a setting on.
    fn resolve(cli: &Cli, config: &Config) -> Self {
        let mode = if cli.inverted || config.inverted {
            RenderMode::Inverted
        } else {
            RenderMode::Normal
        };
        let layout = if cli.vertical || config.vertical {
            Layout::Vertical
        } else {
            Layout::Horizontal
        };
        let cell_size = cli.cell_size.unwrap_or(config.cell_size);
        let cell_size = if cell_size == 0 {
            log::warn!("cell_size 0 in config, using {}", truchet_svg::DEFAULT_CELL_SIZE);
            truchet_svg::DEFAULT_CELL_SIZE
        } else {
            cell_size
        };
        Self {
            mode,
            layout,
            style: cli.style.unwrap_or_else(|| config.tile_style()),
            flipped: cli.flipped || config.flipped,
            cell_size,
            glyph_dir: cli.glyphs.clone().or_else(|| config.glyph_dir.clone()),
            svg: cli.svg.clone(),
            open: cli.open,
        }
    }

    fn renderer(&self) -> GridRenderer {
        GridRenderer::new(self.style)
            .flipped(self.flipped)
            .cell_size(self.cell_size)
    }
}

// ─── Running ────────────────────────────────────────────────────────────────

/// Input text: the arguments joined by spaces, or stdin with line breaks
/// read as spaces.
fn input_text(args: &[String]) -> Result<String> {
    if !args.is_empty() {
        return Ok(args.join(" "));
    }
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("failed to read stdin")?;
    Ok(join_lines(&text))
}

fn join_lines(text: &str) -> String {
    text.lines().collect::<Vec<_>>().join(" ")
}

fn load_glyphs(dir: Option<&Path>) -> Result<GlyphSet> {
    match dir {
        Some(dir) => GlyphSet::from_dir(dir)
            .with_context(|| format!("failed to load glyphs from {}", dir.display())),
        None => GlyphSet::builtin().context("built-in glyph data is invalid"),
    }
}

fn write_svg(path: &Path, svg: &str) -> Result<()> {
    fs::write(path, svg).with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("wrote {}", path.display());
    Ok(())
}

/// Write `svg` to a new uniquely named file in the temp dir. The file is
/// kept after exit for the viewer.
fn write_temp_svg(svg: &str) -> Result<PathBuf> {
    let mut file = tempfile::Builder::new()
        .prefix("truchet-")
        .suffix(".svg")
        .tempfile()
        .context("failed to create temporary file")?;
    file.write_all(svg.as_bytes())
        .with_context(|| format!("failed to write {}", file.path().display()))?;
    let (_, path) = file.keep().context("failed to keep temporary file")?;
    log::info!("wrote {}", path.display());
    Ok(path)
}

fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn emit(grid: &CharGrid, opts: &Options) -> Result<()> {
    let mut stdout = io::stdout().lock();

    if opts.svg.is_none() && !opts.open {
        if !grid.is_empty() {
            writeln!(stdout, "{grid}").context("failed to write to stdout")?;
        }
        return Ok(());
    }

    let svg = opts.renderer().render(grid);
    let mut written = None;
    if let Some(path) = &opts.svg {
        if is_stdout(path) {
            writeln!(stdout, "{svg}").context("failed to write to stdout")?;
        } else {
            write_svg(path, &svg)?;
            written = Some(path.clone());
        }
    }

    if opts.open {
        let path = match written {
            Some(path) => path,
            None => write_temp_svg(&svg)?,
        };
        open::that(&path).with_context(|| format!("failed to open {}", path.display()))?;
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let opts = Options::resolve(cli, &config);
    log::debug!("options: {opts:?}");

    let glyphs = load_glyphs(opts.glyph_dir.as_deref())?;
    let text = input_text(&cli.text)?;
    let grid = WordRenderer::new(&glyphs).render(&text, opts.mode, opts.layout);
    emit(&grid, &opts)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("truchet: {e:#}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
