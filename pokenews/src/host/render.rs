//! Terminal renderers for [`StyledText`].

use std::fmt::Write as _;

use clap::ValueEnum;
use pokenews_core::markup::{Format, Style, StyledText};

const SGR_RESET: &str = "\x1b[0m";

/// How styled text is written to a terminal or pipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RenderMode {
    /// 24-bit ANSI escape sequences.
    #[default]
    Ansi,
    /// Text only, styles dropped.
    Plain,
    /// One JSON document per message.
    Json,
}

impl RenderMode {
    /// Renders `text` as a single line (without the trailing newline).
    #[must_use]
    pub fn render(self, text: &StyledText) -> String {
        match self {
            Self::Ansi => render_ansi(text),
            Self::Plain => text.plain_text(),
            Self::Json => serde_json::to_string(text).unwrap_or_else(|_| text.plain_text()),
        }
    }
}

/// Renders runs with SGR sequences, resetting before each styled run.
#[must_use]
pub fn render_ansi(text: &StyledText) -> String {
    let mut out = String::new();
    let mut styled = false;
    for run in &text.runs {
        if run.style.color.is_some() || !visible_flags(run.style).is_empty() {
            out.push_str(SGR_RESET);
            push_sgr(&mut out, run.style);
            styled = true;
        } else if styled {
            out.push_str(SGR_RESET);
            styled = false;
        }
        out.push_str(&run.text);
    }
    if styled {
        out.push_str(SGR_RESET);
    }
    out
}

fn visible_flags(style: Style) -> Vec<Format> {
    style.flags.iter().filter(|f| *f != Format::Reset).collect()
}

fn push_sgr(out: &mut String, style: Style) {
    let mut params: Vec<String> = visible_flags(style)
        .into_iter()
        .filter_map(|flag| sgr_code(flag).map(str::to_owned))
        .collect();
    if let Some(rgb) = style.color {
        params.push(format!("38;2;{};{};{}", rgb.r(), rgb.g(), rgb.b()));
    }
    if !params.is_empty() {
        let _ = write!(out, "\x1b[{}m", params.join(";"));
    }
}

const fn sgr_code(flag: Format) -> Option<&'static str> {
    match flag {
        Format::Bold => Some("1"),
        Format::Italic => Some("3"),
        Format::Underline => Some("4"),
        Format::Obfuscated => Some("5"),
        Format::Strikethrough => Some("9"),
        Format::Reset => None,
    }
}
