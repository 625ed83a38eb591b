use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::color::{ColorPair, Rgb8};
use crate::error::DatasetError;
use crate::fit::FitParams;

pub const DEFAULT_TRIGGER_WORD: &str = "[trigger]";
pub const DEFAULT_PREVIEW_TEXT: &str =
    "Größe: 176cm, Gewicht: 78kg, Preis: $99.99 (Sonderangebot!)";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Margin kept free on every side; the fit box is the canvas minus twice this.
    pub padding: u32,
}
impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
            padding: 100,
        }
    }
}
impl CanvasConfig {
    pub fn center(&self) -> (f32, f32) {
        (self.width as f32 * 0.5, self.height as f32 * 0.5)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct FitConfig {
    pub start_size: u32,
    pub min_size: u32,
    pub step: u32,
    pub max_line_chars: usize,
}
impl Default for FitConfig {
    fn default() -> Self {
        Self {
            start_size: 576,
            min_size: 16,
            step: 16,
            max_line_chars: 22,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ColorConfig {
    pub foreground: Rgb8,
    pub background: Rgb8,
    /// Also write an `...i` variant of every sample with the roles swapped.
    pub inverted_variant: bool,
}
impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            foreground: Rgb8::BLACK,
            background: Rgb8::WHITE,
            inverted_variant: false,
        }
    }
}
impl ColorConfig {
    pub fn pair(&self) -> ColorPair {
        ColorPair::new(self.foreground, self.background)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct CaptionConfig {
    pub trigger_word: String,
}
impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            trigger_word: DEFAULT_TRIGGER_WORD.into(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub root: PathBuf,
}
impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("datasets"),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct DatasetConfig {
    pub canvas: CanvasConfig,
    pub fit: FitConfig,
    pub colors: ColorConfig,
    pub caption: CaptionConfig,
    pub output: OutputConfig,
    /// Replaces the built-in sample list when present and non-empty.
    pub texts: Option<Vec<String>>,
    pub preview_text: String,
}
impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            fit: FitConfig::default(),
            colors: ColorConfig::default(),
            caption: CaptionConfig::default(),
            output: OutputConfig::default(),
            texts: None,
            preview_text: DEFAULT_PREVIEW_TEXT.into(),
        }
    }
}

impl DatasetConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .map_err(|e| DatasetError::Config(format!("read {}: {e}", path.display())))?;
        Self::from_ron_str(&data).map_err(|e| match e {
            DatasetError::Config(msg) => DatasetError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    pub fn from_ron_str(data: &str) -> Result<Self, DatasetError> {
        ron::from_str(data).map_err(|e| DatasetError::Config(format!("parse RON: {e}")))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e.to_string())),
        }
    }

    pub fn fit_params(&self) -> FitParams {
        let pad = self.canvas.padding.saturating_mul(2);
        FitParams {
            max_width: self.canvas.width.saturating_sub(pad) as f32,
            max_height: self.canvas.height.saturating_sub(pad) as f32,
            start_size: self.fit.start_size,
            min_size: self.fit.min_size,
            step: self.fit.step,
            max_line_chars: self.fit.max_line_chars,
        }
    }

    /// Conditions under which no sensible image can be produced.
    pub fn ensure_usable(&self) -> Result<(), DatasetError> {
        let c = &self.canvas;
        if c.width == 0 || c.height == 0 {
            return Err(DatasetError::Config(format!(
                "canvas dimensions must be > 0 (got {}x{})",
                c.width, c.height
            )));
        }
        if c.padding.saturating_mul(2) >= c.width.min(c.height) {
            return Err(DatasetError::Config(format!(
                "canvas.padding*2 >= canvas size ({} * 2 >= {})",
                c.padding,
                c.width.min(c.height)
            )));
        }
        if self.fit.step == 0 {
            return Err(DatasetError::Config("fit.step must be > 0".into()));
        }
        if self.fit.min_size == 0 {
            return Err(DatasetError::Config("fit.min_size must be > 0".into()));
        }
        if self.fit.start_size < self.fit.min_size {
            return Err(DatasetError::Config(format!(
                "fit.start_size ({}) below fit.min_size ({})",
                self.fit.start_size, self.fit.min_size
            )));
        }
        Ok(())
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.canvas.width != self.canvas.height {
            w.push(format!(
                "non-square canvas {}x{}; most fine-tuning pipelines expect square images",
                self.canvas.width, self.canvas.height
            ));
        }
        if self.canvas.width.max(self.canvas.height) > 4096 {
            w.push(format!(
                "very large canvas {}x{}",
                self.canvas.width, self.canvas.height
            ));
        }
        let span = self.fit.start_size.saturating_sub(self.fit.min_size);
        if self.fit.step > 0 && span % self.fit.step != 0 {
            w.push(format!(
                "fit ladder {}..{} step {} does not land on min_size; \
                 the floor is only used as fallback",
                self.fit.start_size, self.fit.min_size, self.fit.step
            ));
        }
        if self.fit.max_line_chars == 0 {
            w.push("fit.max_line_chars is 0; treated as 1 (one word per line)".into());
        }
        if self.colors.foreground == self.colors.background {
            w.push(format!(
                "foreground and background are both {}; text will be invisible",
                self.colors.foreground
            ));
        }
        if self.caption.trigger_word.trim().is_empty() {
            w.push("caption.trigger_word is empty".into());
        }
        if let Some(texts) = &self.texts {
            if texts.is_empty() {
                w.push("texts is an empty list; falling back to built-in samples".into());
            }
            if let Some(i) = texts.iter().position(|t| t.trim().is_empty()) {
                w.push(format!("texts[{i}] is blank; it renders as an empty canvas"));
            }
        }
        w
    }
}
