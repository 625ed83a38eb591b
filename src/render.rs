use image::RgbImage;

use crate::backend::TextBackend;
use crate::color::ColorPair;
use crate::config::CanvasConfig;

/// Draws already wrapped `text` at `size`, centered on a fresh canvas.
/// `invert` swaps which color of `colors` is used for the fill and the ink.
pub fn render<B: TextBackend + ?Sized>(
    text: &str,
    size: u32,
    colors: &ColorPair,
    invert: bool,
    canvas: &CanvasConfig,
    backend: &B,
) -> RgbImage {
    let fill = colors.canvas(invert).to_pixel();
    let mut img = RgbImage::from_pixel(canvas.width, canvas.height, fill);
    if !text.trim().is_empty() {
        backend.draw(&mut img, canvas.center(), text, size, colors.ink(invert));
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::FixedAdvanceBackend;
    use crate::color::Rgb8;

    #[test]
    fn canvas_size_independent_of_text() {
        let cfg = CanvasConfig::default();
        let backend = FixedAdvanceBackend::default();
        let long = "a very long line that certainly overflows the canvas many times over";
        for text in ["", "A", long] {
            let img = render(text, 576, &ColorPair::default(), false, &cfg, &backend);
            assert_eq!(img.dimensions(), (1024, 1024));
        }
    }

    #[test]
    fn blank_text_is_plain_fill() {
        let colors = ColorPair::new(Rgb8(1, 2, 3), Rgb8(4, 5, 6));
        let backend = FixedAdvanceBackend::default();
        let img = render("   ", 64, &colors, true, &CanvasConfig::default(), &backend);
        assert!(img.pixels().all(|p| p.0 == [1, 2, 3]));
    }

    #[test]
    fn ink_lands_on_center_and_fill_on_corners() {
        let colors = ColorPair::new(Rgb8(200, 0, 0), Rgb8(0, 0, 200));
        let cfg = CanvasConfig::default();
        let backend = FixedAdvanceBackend::default();
        for invert in [false, true] {
            let img = render("Ab", 100, &colors, invert, &cfg, &backend);
            assert_eq!(Rgb8::from(*img.get_pixel(512, 512)), colors.ink(invert));
            assert_eq!(Rgb8::from(*img.get_pixel(0, 0)), colors.canvas(invert));
            assert_eq!(Rgb8::from(*img.get_pixel(1023, 1023)), colors.canvas(invert));
        }
    }
}
