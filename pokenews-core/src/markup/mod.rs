//! Chat markup compiler
//!
//! Turns strings such as `"&#ffffff&l[&#dd959c&lP&r] hello"` into a
//! [`StyledText`]: a list of runs, each with one color and one flag set.
//!
//! # Grammar
//!
//! - `&#RRGGBB` sets a 24-bit color (pass 1)
//! - `&0`..`&9`, `&a`..`&f` set a color from the legacy palette (pass 2)
//! - `&k` `&l` `&m` `&n` `&o` add obfuscated, bold, strikethrough,
//!   underline, italic (pass 2)
//! - `&r` clears every flag and the color (pass 2)
//!
//! Codes are case-insensitive. Anything else, including a lone `&`, is
//! literal text. Compilation never fails.

pub mod lexer;
pub mod style;

pub use lexer::Token;
pub use style::{Format, FormatFlags, LEGACY_PALETTE, Rgb, Style, StyledText, TextRun};

/// Compiles markup into styled text.
///
/// Flags accumulate until `&r`; color is last-wins. A run boundary is
/// emitted only when the style in effect for the next character differs
/// from the previous run.
#[must_use]
pub fn compile(markup: &str) -> StyledText {
    let mut builder = RunBuilder::default();
    for token in lexer::tokenize(markup) {
        match token {
            Token::Literal(text) => builder.push_text(text),
            Token::HexColor(rgb) | Token::PaletteColor(rgb) => builder.set_color(rgb),
            Token::Format(Format::Reset) => builder.reset(),
            Token::Format(flag) => builder.add_flag(flag),
        }
    }
    builder.finish()
}

/// Left-to-right fold over the token stream.
#[derive(Debug, Default)]
struct RunBuilder {
    current: Style,
    pending: String,
    runs: Vec<TextRun>,
}

impl RunBuilder {
    fn push_text(&mut self, text: &str) {
        self.pending.push_str(text);
    }

    fn set_color(&mut self, rgb: Rgb) {
        let mut next = self.current;
        next.color = Some(rgb);
        next.flags.remove(Format::Reset);
        self.apply(next);
    }

    fn add_flag(&mut self, flag: Format) {
        let mut next = self.current;
        next.flags.insert(flag);
        next.flags.remove(Format::Reset);
        self.apply(next);
    }

    fn reset(&mut self) {
        let mut flags = style::FormatFlags::NONE;
        flags.insert(Format::Reset);
        self.apply(Style { color: None, flags });
    }

    fn apply(&mut self, next: Style) {
        if next != self.current {
            self.flush();
            self.current = next;
        }
    }

    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.pending);
        match self.runs.last_mut() {
            Some(last) if last.style == self.current => last.text.push_str(&text),
            _ => self.runs.push(TextRun {
                text,
                style: self.current,
            }),
        }
    }

    fn finish(mut self) -> StyledText {
        self.flush();
        StyledText { runs: self.runs }
    }
}
