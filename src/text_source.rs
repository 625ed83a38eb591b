//! Ordered sample strings for a dataset run.
//!
//! The built-in list probes single glyphs first, then ligature/kerning pairs,
//! then words and full sentences. Entry order fixes output file indices.

use crate::config::DatasetConfig;

pub const ALPHABET: &str = concat!(
    "ABCDEFGHIJKLMNOPQRSTUVWXYZÄÖÜ",
    "abcdefghijklmnopqrstuvwxyzäöüß",
    "0123456789",
    "!\"$%&?@€#,.:;'()/+-",
);

pub const LIGATURE_PAIRS: &[&str] = &["fi", "fl", "ff", "ffi", "ffl", "Th", "st", "AV", "To", "Wa"];

pub const SAMPLE_WORDS: &[&str] = &[
    "Hallo",
    "Welt",
    "Fähigkeit",
    "Überraschung",
    "Straße",
    "Python3",
    "Programmierung",
    "Datenanalyse",
    "Künstliche",
];

pub const SAMPLE_SENTENCES: &[&str] = &[
    "The quick brown fox jumps over the lazy dog.",
    "Pack my box with five dozen liquor jugs.",
    "How vexingly quick daft zebras jump!",
    "Sphinx of black quartz, judge my vow.",
    "Äpfel, Öl & Übung: Das kostet 42€ + 15% = 48,30€.",
    "Test123: 50% off! Call @555-7890 or visit example.com/shop.",
    "Größe: 176cm, Gewicht: 78kg, Preis: $99.99 (Sonderangebot!)",
    "Franz jagt im komplett verwahrlosten Taxi quer durch Bayern.",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSource {
    entries: Vec<String>,
}

impl TextSource {
    pub fn builtin() -> Self {
        let entries = ALPHABET
            .chars()
            .map(String::from)
            .chain(LIGATURE_PAIRS.iter().map(|s| s.to_string()))
            .chain(SAMPLE_WORDS.iter().map(|s| s.to_string()))
            .chain(SAMPLE_SENTENCES.iter().map(|s| s.to_string()))
            .collect();
        Self { entries }
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(cfg: &DatasetConfig) -> Self {
        match &cfg.texts {
            Some(texts) if !texts.is_empty() => Self::from_entries(texts.iter().cloned()),
            _ => Self::builtin(),
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
