//! Error types for dataset generation.
//!
//! Font loading, configuration and output failures are fatal for a run. An
//! oversized fit is not represented here; see [`crate::fit::FitResult::fits`].

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("read font {}: {source}", .path.display())]
    FontRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("decode font {}: {reason}", .path.display())]
    FontParse { path: PathBuf, reason: String },

    #[error("font path {} has no usable file stem", .path.display())]
    FontName { path: PathBuf },

    #[error("write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("encode png {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("config: {0}")]
    Config(String),

    #[error("invalid color {0:?} (expected #rrggbb)")]
    InvalidColor(String),
}
