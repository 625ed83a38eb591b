//! Font fine-tuning dataset generation.
//!
//! Renders sample strings with a font onto fixed-size canvases, sizing the
//! text to fit a padded box, and writes each image next to a caption file.

pub mod backend;
pub mod caption;
pub mod color;
pub mod config;
pub mod dataset;
pub mod error;
pub mod fit;
pub mod inspect;
pub mod logging;
pub mod render;
pub mod text_source;
pub mod wrap;

// Curated re-exports
pub use backend::{FixedAdvanceBackend, GlyphBackend, TextBackend, TextBounds};
pub use color::{ColorPair, Rgb8};
pub use config::DatasetConfig;
pub use dataset::{DatasetSummary, DatasetWriter};
pub use error::DatasetError;
pub use fit::{fit, fit_with, FitParams, FitResult};
pub use text_source::TextSource;
