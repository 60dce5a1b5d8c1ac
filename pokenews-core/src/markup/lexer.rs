//! Two-pass tokenizer for `&`-style chat markup.
//!
//! Pass 1 ([`scan_hex`]) splits the input on `&#RRGGBB` tokens. Pass 2
//! ([`scan_legacy`]) runs over each literal segment left by pass 1 and
//! splits it on `&<code>` tokens. A hex token is a barrier between
//! segments: pass 2 never joins text from both sides of one.

use super::style::{Format, Rgb, legacy_color};

/// One lexical unit of markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Text shown as-is, including any unrecognized `&` sequences.
    Literal(&'a str),
    /// `&#RRGGBB`
    HexColor(Rgb),
    /// `&0`..`&f`, already resolved through the legacy palette.
    PaletteColor(Rgb),
    /// `&k`, `&l`, `&m`, `&n`, `&o`, `&r`
    Format(Format),
}

const HEX_TOKEN_LEN: usize = 8;

/// Pass 1: recognizes `&#` followed by exactly six hex digits.
///
/// Matching is left to right and non-overlapping. Everything else is
/// returned as [`Token::Literal`].
#[must_use]
pub fn scan_hex(input: &str) -> Vec<Token<'_>> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'&' && bytes.get(i + 1) == Some(&b'#') {
            if let Some(rgb) = input.get(i + 2..i + HEX_TOKEN_LEN).and_then(Rgb::from_hex) {
                push_literal(&mut tokens, &input[literal_start..i]);
                tokens.push(Token::HexColor(rgb));
                i += HEX_TOKEN_LEN;
                literal_start = i;
                continue;
            }
        }
        i += 1;
    }

    push_literal(&mut tokens, &input[literal_start..]);
    tokens
}

/// Pass 2: recognizes `&` followed by a legacy color or format code.
#[must_use]
pub fn scan_legacy(segment: &str) -> Vec<Token<'_>> {
    let bytes = segment.as_bytes();
    let mut tokens = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'&' {
            if let Some(token) = bytes.get(i + 1).and_then(|&b| legacy_token(b)) {
                push_literal(&mut tokens, &segment[literal_start..i]);
                tokens.push(token);
                i += 2;
                literal_start = i;
                continue;
            }
        }
        i += 1;
    }

    push_literal(&mut tokens, &segment[literal_start..]);
    tokens
}

/// Runs both passes and returns the combined token stream.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    scan_hex(input)
        .into_iter()
        .flat_map(|token| match token {
            Token::Literal(segment) => scan_legacy(segment),
            other => vec![other],
        })
        .collect()
}

fn legacy_token<'a>(byte: u8) -> Option<Token<'a>> {
    if !byte.is_ascii() {
        return None;
    }
    let code = char::from(byte);
    legacy_color(code)
        .map(Token::PaletteColor)
        .or_else(|| Format::from_code(code).map(Token::Format))
}

fn push_literal<'a>(tokens: &mut Vec<Token<'a>>, text: &'a str) {
    if !text.is_empty() {
        tokens.push(Token::Literal(text));
    }
}
