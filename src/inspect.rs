//! Sanity checks for a generated dataset directory.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use crate::error::DatasetError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inspection {
    pub pairs: usize,
    pub inverted_pairs: usize,
    pub orphan_images: Vec<PathBuf>,
    pub orphan_captions: Vec<PathBuf>,
    pub wrong_size: Vec<(PathBuf, (u32, u32))>,
    /// Images whose header could not be decoded, with the decoder message.
    pub unreadable: Vec<(PathBuf, String)>,
}

impl Inspection {
    pub fn is_clean(&self) -> bool {
        self.orphan_images.is_empty()
            && self.orphan_captions.is_empty()
            && self.wrong_size.is_empty()
            && self.unreadable.is_empty()
    }
}

#[derive(Default)]
struct Pair {
    png: Option<PathBuf>,
    txt: Option<PathBuf>,
}

/// Pairs `*.png` with `*.txt` by file stem and checks image dimensions against
/// `expected`. Files with other extensions are ignored. Results are sorted by
/// stem.
pub fn inspect_dataset(dir: &Path, expected: (u32, u32)) -> Result<Inspection, DatasetError> {
    let read_err = |source: std::io::Error| {
        DatasetError::Config(format!("read dataset dir {}: {source}", dir.display()))
    };
    let mut by_stem: BTreeMap<String, Pair> = BTreeMap::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
            continue;
        };
        let slot = match path.extension().and_then(|e| e.to_str()) {
            Some("png") => &mut by_stem.entry(stem).or_default().png,
            Some("txt") => &mut by_stem.entry(stem).or_default().txt,
            _ => continue,
        };
        *slot = Some(path);
    }

    let mut out = Inspection::default();
    for (stem, pair) in by_stem {
        match (pair.png, pair.txt) {
            (Some(png), Some(_)) => {
                out.pairs += 1;
                if stem.ends_with('i') {
                    out.inverted_pairs += 1;
                }
                match image::image_dimensions(&png) {
                    Ok(dims) if dims != expected => out.wrong_size.push((png, dims)),
                    Ok(_) => {}
                    Err(e) => out.unreadable.push((png, e.to_string())),
                }
            }
            (Some(png), None) => out.orphan_images.push(png),
            (None, Some(txt)) => out.orphan_captions.push(txt),
            (None, None) => {}
        }
    }
    Ok(out)
}
