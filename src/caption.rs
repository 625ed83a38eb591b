use crate::color::ColorPair;

/// `{trigger}, text saying "{text}", text color #rrggbb, background color #rrggbb`
///
/// `text` is the original sample, not the wrapped one. Color roles follow the
/// same invert rule as [`crate::render::render`].
pub fn format_caption(trigger_word: &str, text: &str, colors: &ColorPair, invert: bool) -> String {
    format!(
        "{trigger_word}, text saying \"{text}\", text color {}, background color {}",
        colors.ink(invert).to_hex(),
        colors.canvas(invert).to_hex()
    )
}
