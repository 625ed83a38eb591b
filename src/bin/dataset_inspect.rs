//! Inspect a generated font dataset directory.
//!
//! Example:
//!   cargo run --bin dataset_inspect -- --dir datasets/Inter-Regular
//!
//! Exits non-zero when an image lacks its caption (or vice versa), an image
//! has unexpected dimensions, or an image cannot be decoded.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use font_dataset::inspect::inspect_dataset;

#[derive(Parser, Debug)]
#[command(about = "Check image/caption pairing and image sizes of a dataset", version)]
struct Args {
    #[arg(long)] dir: PathBuf,
    #[arg(long, default_value_t = 1024)] width: u32,
    #[arg(long, default_value_t = 1024)] height: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let res = inspect_dataset(&args.dir, (args.width, args.height))?;
    println!("Dataset: {} pairs={} inverted={}", args.dir.display(), res.pairs, res.inverted_pairs);
    for p in &res.orphan_images { println!("  image without caption: {}", p.display()); }
    for p in &res.orphan_captions { println!("  caption without image: {}", p.display()); }
    for (p, (w, h)) in &res.wrong_size { println!("  wrong size {}x{}: {}", w, h, p.display()); }
    for (p, e) in &res.unreadable { println!("  unreadable image {}: {}", p.display(), e); }
    if !res.is_clean() {
        let problems = res.orphan_images.len()
            + res.orphan_captions.len()
            + res.wrong_size.len()
            + res.unreadable.len();
        anyhow::bail!("dataset has {problems} problem file(s)");
    }
    Ok(())
}
