//! Font dataset generator
//!
//! Renders the sample text list with one font and writes image/caption pairs:
//!   cargo run --release -- fonts/Inter-Regular.ttf \
//!       --trigger-word inter_font --inverted
//!
//! Output lands in `datasets/<font stem>/` unless `--out-root` or the config
//! file says otherwise. `--preview out.png` renders only the preview sentence.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use font_dataset::{
    config::DatasetConfig,
    dataset::{font_name, DatasetWriter},
    logging::init_logging,
    GlyphBackend, Rgb8, TextSource,
};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about = "Create a font fine-tuning dataset", long_about = None)]
struct Args {
    /// Path to the TrueType / OpenType font file.
    font_file: PathBuf,
    /// Trigger word placed at the start of every caption.
    #[arg(long, short = 't')]
    trigger_word: Option<String>,
    /// RON configuration file; missing sections use defaults.
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,
    /// Dataset root; the font gets its own subdirectory.
    #[arg(long, short = 'o')]
    out_root: Option<PathBuf>,
    /// Also write color-inverted variants (`..._<n>i.png`).
    #[arg(long)]
    inverted: bool,
    #[arg(long)]
    foreground: Option<Rgb8>,
    #[arg(long)]
    background: Option<Rgb8>,
    /// Render only the preview text to this PNG and exit.
    #[arg(long)]
    preview: Option<PathBuf>,
    /// -v info, -vv debug, -vvv trace.
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

fn load_config(args: &Args) -> Result<DatasetConfig> {
    let mut cfg = match &args.config {
        Some(path) => DatasetConfig::load_from_file(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => DatasetConfig::default(),
    };
    if let Some(t) = &args.trigger_word {
        cfg.caption.trigger_word = t.clone();
    }
    if let Some(root) = &args.out_root {
        cfg.output.root = root.clone();
    }
    if args.inverted {
        cfg.colors.inverted_variant = true;
    }
    if let Some(fg) = args.foreground {
        cfg.colors.foreground = fg;
    }
    if let Some(bg) = args.background {
        cfg.colors.background = bg;
    }
    Ok(cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let cfg = load_config(&args)?;
    for w in cfg.validate() {
        warn!(target: "config", "{w}");
    }
    cfg.ensure_usable()?;

    let backend = GlyphBackend::load(&args.font_file)?;
    let name = font_name(&args.font_file)?;
    info!(
        target: "font",
        "loaded {} family={:?} glyphs={}",
        args.font_file.display(),
        backend.info().family,
        backend.info().glyph_count
    );
    let writer = DatasetWriter::new(&backend, &cfg, name);

    if let Some(path) = &args.preview {
        let fitted = writer.write_preview(&cfg.preview_text, path)?;
        println!(
            "Preview: {} (size {}px, fits={})",
            path.display(),
            fitted.size,
            fitted.fits
        );
        return Ok(());
    }

    let source = TextSource::from_config(&cfg);
    let summary = writer.run(source.entries())?;
    println!(
        "Wrote {} images ({} samples, {} oversized) to {}",
        summary.images_written,
        summary.samples,
        summary.overflowed,
        writer.out_dir().display()
    );
    Ok(())
}
