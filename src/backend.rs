//! Text measurement and drawing backends.
//!
//! The fitter only needs [`TextBackend::measure`] and the renderer only needs
//! [`TextBackend::draw`]. [`GlyphBackend`] does both with real font outlines
//! (ab_glyph for layout and coverage, ttf-parser for face metadata).
//! [`FixedAdvanceBackend`] is a deterministic stand-in with no font file.

use std::{fs, path::Path};

use ab_glyph::{point, Font, FontVec, Glyph, GlyphId, PxScale, PxScaleFont, ScaleFont};
use image::RgbImage;
use tracing::debug;
use ttf_parser as ttf;

use crate::color::Rgb8;
use crate::error::DatasetError;

/// Axis-aligned ink box in pixels. The empty box is all zeros.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextBounds {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl TextBounds {
    pub const EMPTY: Self = Self { x0: 0.0, y0: 0.0, x1: 0.0, y1: 0.0 };

    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    pub fn center(&self) -> (f32, f32) {
        ((self.x0 + self.x1) * 0.5, (self.y0 + self.y1) * 0.5)
    }

    pub fn union(self, other: Self) -> Self {
        Self {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }
}

pub trait TextBackend {
    /// Ink bounding box of (possibly multi-line) `text` at `size` pixels.
    fn measure(&self, text: &str, size: u32) -> TextBounds;

    /// Draws `text` so the center of its ink box lands on `center`.
    fn draw(&self, canvas: &mut RgbImage, center: (f32, f32), text: &str, size: u32, ink: Rgb8);

    /// Characters of `text` (whitespace excluded) the backend cannot draw.
    fn missing_glyphs(&self, _text: &str) -> Vec<char> {
        Vec::new()
    }
}

/// Face metadata read with ttf-parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontInfo {
    pub family: Option<String>,
    pub glyph_count: u16,
    pub units_per_em: u16,
}

pub struct GlyphBackend {
    font: FontVec,
    info: FontInfo,
}

impl GlyphBackend {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| DatasetError::FontRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(bytes).map_err(|e| match e {
            DatasetError::FontParse { reason, .. } => DatasetError::FontParse {
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        })
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, DatasetError> {
        let info = {
            let face = ttf::Face::parse(&bytes, 0).map_err(|e| DatasetError::FontParse {
                path: Default::default(),
                reason: format!("ttf parse failed: {e}"),
            })?;
            FontInfo {
                family: family_name(&face),
                glyph_count: face.number_of_glyphs(),
                units_per_em: face.units_per_em(),
            }
        };
        let font = FontVec::try_from_vec(bytes).map_err(|e| DatasetError::FontParse {
            path: Default::default(),
            reason: e.to_string(),
        })?;
        debug!(
            target: "backend",
            "loaded font {:?} glyphs={} upem={}",
            info.family, info.glyph_count, info.units_per_em
        );
        Ok(Self { font, info })
    }

    pub fn info(&self) -> &FontInfo {
        &self.info
    }

    /// Positions glyphs line by line; each line is centered on x = 0 and the
    /// first baseline sits at y = ascent.
    fn layout(&self, text: &str, size: u32) -> Vec<Glyph> {
        let scale = PxScale::from(size.max(1) as f32);
        let scaled = self.font.as_scaled(scale);
        let pitch = scaled.ascent() - scaled.descent() + scaled.line_gap();
        let mut glyphs = Vec::new();
        for (line_idx, line) in text.split('\n').enumerate() {
            let line_width = line_advance(&scaled, line);
            let baseline = scaled.ascent() + line_idx as f32 * pitch;
            let mut caret = point(-line_width * 0.5, baseline);
            let mut prev: Option<GlyphId> = None;
            for ch in line.chars() {
                let id = scaled.glyph_id(ch);
                if let Some(p) = prev {
                    caret.x += scaled.kern(p, id);
                }
                glyphs.push(id.with_scale_and_position(scale, caret));
                caret.x += scaled.h_advance(id);
                prev = Some(id);
            }
        }
        glyphs
    }

    fn ink_bounds(&self, glyphs: &[Glyph]) -> TextBounds {
        glyphs
            .iter()
            .filter_map(|g| self.font.outline_glyph(g.clone()))
            .map(|o| {
                let b = o.px_bounds();
                TextBounds::new(b.min.x, b.min.y, b.max.x, b.max.y)
            })
            .reduce(TextBounds::union)
            .unwrap_or(TextBounds::EMPTY)
    }
}

impl TextBackend for GlyphBackend {
    fn measure(&self, text: &str, size: u32) -> TextBounds {
        self.ink_bounds(&self.layout(text, size))
    }

    fn draw(&self, canvas: &mut RgbImage, center: (f32, f32), text: &str, size: u32, ink: Rgb8) {
        let glyphs = self.layout(text, size);
        let (bx, by) = self.ink_bounds(&glyphs).center();
        let (dx, dy) = (center.0 - bx, center.1 - by);
        let (w, h) = canvas.dimensions();
        for g in glyphs {
            let shifted = Glyph {
                position: point(g.position.x + dx, g.position.y + dy),
                ..g
            };
            let Some(outlined) = self.font.outline_glyph(shifted) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|x, y, coverage| {
                let px = bounds.min.x as i64 + x as i64;
                let py = bounds.min.y as i64 + y as i64;
                if px < 0 || py < 0 || px >= w as i64 || py >= h as i64 {
                    return;
                }
                let pixel = canvas.get_pixel_mut(px as u32, py as u32);
                *pixel = Rgb8::from(*pixel).lerp(ink, coverage).to_pixel();
            });
        }
    }

    /// Characters that map to the notdef glyph.
    fn missing_glyphs(&self, text: &str) -> Vec<char> {
        let mut out: Vec<char> = Vec::new();
        for ch in text.chars().filter(|c| !c.is_whitespace()) {
            if self.font.glyph_id(ch) == GlyphId(0) && !out.contains(&ch) {
                out.push(ch);
            }
        }
        out
    }
}

fn line_advance(scaled: &PxScaleFont<&FontVec>, line: &str) -> f32 {
    let mut width = 0.0f32;
    let mut prev: Option<GlyphId> = None;
    for ch in line.chars() {
        let id = scaled.glyph_id(ch);
        if let Some(p) = prev {
            width += scaled.kern(p, id);
        }
        width += scaled.h_advance(id);
        prev = Some(id);
    }
    width
}

fn family_name(face: &ttf::Face<'_>) -> Option<String> {
    [ttf::name_id::TYPOGRAPHIC_FAMILY, ttf::name_id::FAMILY]
        .iter()
        .find_map(|id| {
            face.names()
                .into_iter()
                .filter(|n| n.name_id == *id && n.is_unicode())
                .find_map(|n| n.to_string())
        })
}

/// Every character occupies a `size * advance` wide cell, every line is
/// `size` tall. Non-whitespace characters draw as solid boxes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvanceBackend {
    pub advance: f32,
}

impl FixedAdvanceBackend {
    pub fn new(advance: f32) -> Self {
        Self { advance }
    }

    fn block(&self, text: &str, size: u32) -> (f32, f32) {
        let lines: Vec<&str> = text.split('\n').collect();
        let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        if longest == 0 {
            return (0.0, 0.0);
        }
        (longest as f32 * size as f32 * self.advance, lines.len() as f32 * size as f32)
    }
}

impl Default for FixedAdvanceBackend {
    fn default() -> Self {
        Self::new(0.6)
    }
}

impl TextBackend for FixedAdvanceBackend {
    fn measure(&self, text: &str, size: u32) -> TextBounds {
        let (w, h) = self.block(text, size);
        TextBounds::new(0.0, 0.0, w, h)
    }

    fn draw(&self, canvas: &mut RgbImage, center: (f32, f32), text: &str, size: u32, ink: Rgb8) {
        let (bw, bh) = self.block(text, size);
        let cell_w = size as f32 * self.advance;
        let cell_h = size as f32;
        let origin = (center.0 - bw * 0.5, center.1 - bh * 0.5);
        let (w, h) = canvas.dimensions();
        for (row, line) in text.split('\n').enumerate() {
            let line_w = line.chars().count() as f32 * cell_w;
            let line_x = origin.0 + (bw - line_w) * 0.5;
            for (col, ch) in line.chars().enumerate() {
                if ch.is_whitespace() {
                    continue;
                }
                let x0 = (line_x + col as f32 * cell_w).round().max(0.0) as u32;
                let y0 = (origin.1 + row as f32 * cell_h).round().max(0.0) as u32;
                let x1 = ((line_x + (col + 1) as f32 * cell_w).round().max(0.0) as u32).min(w);
                let y1 = ((origin.1 + (row + 1) as f32 * cell_h).round().max(0.0) as u32).min(h);
                for y in y0..y1 {
                    for x in x0..x1 {
                        canvas.put_pixel(x, y, ink.to_pixel());
                    }
                }
            }
        }
    }
}
