//! Dataset writer: fit, render, caption and persist every sample in order.
//!
//! Layout on disk:
//!   <root>/<font>/<font>_<index>.png   + .txt
//!   <root>/<font>/<font>_<index>i.png  + .txt   (inverted variant)
//!
//! Indices are positions in the text source, so reruns overwrite the same
//! files with identical bytes.

use std::{
    fs,
    io::Cursor,
    path::{Path, PathBuf},
};

use image::{ImageFormat, RgbImage};
use tracing::{debug, info, warn};

use crate::backend::TextBackend;
use crate::caption::format_caption;
use crate::color::ColorPair;
use crate::config::DatasetConfig;
use crate::error::DatasetError;
use crate::fit::{fit, FitParams, FitResult};
use crate::render::render;

/// File stem of the font path, used as dataset directory and file prefix.
pub fn font_name(path: &Path) -> Result<String, DatasetError> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| DatasetError::FontName { path: path.to_path_buf() })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleOutput {
    pub index: usize,
    pub inverted: bool,
    pub image_path: PathBuf,
    pub caption_path: PathBuf,
    pub size: u32,
    pub fits: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetSummary {
    pub samples: usize,
    pub images_written: usize,
    pub overflowed: usize,
}

pub struct DatasetWriter<'a, B: TextBackend + ?Sized> {
    backend: &'a B,
    config: &'a DatasetConfig,
    font_name: String,
    out_dir: PathBuf,
    params: FitParams,
    colors: ColorPair,
}

impl<'a, B: TextBackend + ?Sized> DatasetWriter<'a, B> {
    pub fn new(backend: &'a B, config: &'a DatasetConfig, font_name: impl Into<String>) -> Self {
        let font_name = font_name.into();
        let out_dir = config.output.root.join(&font_name);
        Self {
            backend,
            config,
            font_name,
            out_dir,
            params: config.fit_params(),
            colors: config.colors.pair(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// `(image, caption)` paths for one sample.
    pub fn sample_paths(&self, index: usize, inverted: bool) -> (PathBuf, PathBuf) {
        let suffix = if inverted { "i" } else { "" };
        let stem = format!("{}_{}{}", self.font_name, index, suffix);
        (
            self.out_dir.join(format!("{stem}.png")),
            self.out_dir.join(format!("{stem}.txt")),
        )
    }

    pub fn fit_sample(&self, text: &str) -> FitResult {
        fit(text, self.backend, &self.params)
    }

    pub fn render_sample(&self, fitted: &FitResult, inverted: bool) -> RgbImage {
        render(
            &fitted.text,
            fitted.size,
            &self.colors,
            inverted,
            &self.config.canvas,
            self.backend,
        )
    }

    /// Logs every character of `texts` the backend cannot draw, once per run,
    /// and returns them in first-seen order.
    pub fn check_glyphs<S: AsRef<str>>(&self, texts: &[S]) -> Vec<char> {
        let mut missing: Vec<char> = Vec::new();
        for c in texts.iter().flat_map(|t| self.backend.missing_glyphs(t.as_ref())) {
            if !missing.contains(&c) {
                missing.push(c);
            }
        }
        if !missing.is_empty() {
            let list: String = missing.iter().collect();
            warn!(
                target: "dataset",
                "font has no glyph for {list:?}; those samples render as notdef boxes"
            );
        }
        missing
    }

    /// Renders a single non-inverted image of `text` to `path`.
    pub fn write_preview(&self, text: &str, path: &Path) -> Result<FitResult, DatasetError> {
        self.check_glyphs(&[text]);
        let fitted = self.fit_sample(text);
        let img = self.render_sample(&fitted, false);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| DatasetError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        write_png(path, &img)?;
        Ok(fitted)
    }

    pub fn caption_for(&self, text: &str, inverted: bool) -> String {
        format_caption(&self.config.caption.trigger_word, text, &self.colors, inverted)
    }

    /// Writes the plain variant and, when configured, the inverted one.
    /// The fit is shared; inversion does not change geometry.
    pub fn write_sample(
        &self,
        index: usize,
        text: &str,
    ) -> Result<Vec<SampleOutput>, DatasetError> {
        let fitted = self.fit_sample(text);
        debug!(target: "dataset", index, size = fitted.size, fits = fitted.fits, "fitted {text:?}");
        if !fitted.fits {
            warn!(
                target: "dataset",
                "sample {index} {text:?} does not fit at floor size {}; writing oversized render",
                fitted.size
            );
        }
        let variants: &[bool] = if self.config.colors.inverted_variant {
            &[false, true]
        } else {
            &[false]
        };
        let mut out = Vec::with_capacity(variants.len());
        for &inverted in variants {
            let img = self.render_sample(&fitted, inverted);
            let caption = self.caption_for(text, inverted);
            let (image_path, caption_path) = self.sample_paths(index, inverted);
            write_png(&image_path, &img)?;
            fs::write(&caption_path, caption).map_err(|source| DatasetError::Write {
                path: caption_path.clone(),
                source,
            })?;
            out.push(SampleOutput {
                index,
                inverted,
                image_path,
                caption_path,
                size: fitted.size,
                fits: fitted.fits,
            });
        }
        Ok(out)
    }

    /// Processes every entry in order. The first failure aborts the run.
    pub fn run(&self, texts: &[String]) -> Result<DatasetSummary, DatasetError> {
        fs::create_dir_all(&self.out_dir).map_err(|source| DatasetError::Write {
            path: self.out_dir.clone(),
            source,
        })?;
        info!(target: "dataset", "writing {} samples to {}", texts.len(), self.out_dir.display());
        self.check_glyphs(texts);
        let mut summary = DatasetSummary::default();
        for (index, text) in texts.iter().enumerate() {
            let written = self.write_sample(index, text)?;
            summary.samples += 1;
            summary.images_written += written.len();
            if written.first().is_some_and(|s| !s.fits) {
                summary.overflowed += 1;
            }
        }
        info!(
            target: "dataset",
            "done: samples={} images={} overflowed={}",
            summary.samples, summary.images_written, summary.overflowed
        );
        Ok(summary)
    }
}

/// Encodes in memory first so I/O failures surface as [`DatasetError::Write`].
pub fn write_png(path: &Path, img: &RgbImage) -> Result<(), DatasetError> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|source| DatasetError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    fs::write(path, bytes).map_err(|source| DatasetError::Write {
        path: path.to_path_buf(),
        source,
    })
}
