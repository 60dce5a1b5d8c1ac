//! Styled text model produced by the markup compiler.

use std::fmt;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

// ============================================================================
// Color
// ============================================================================

/// A 24-bit foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u32);

impl Rgb {
    /// Red channel.
    #[must_use]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    #[must_use]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    #[must_use]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Parses exactly six hexadecimal digits (case-insensitive).
    #[must_use]
    pub fn from_hex(digits: &str) -> Option<Self> {
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Classic 16-color chat palette, indexed by the legacy code's hex digit.
pub const LEGACY_PALETTE: [Rgb; 16] = [
    Rgb(0x00_00_00),
    Rgb(0x00_00_AA),
    Rgb(0x00_AA_00),
    Rgb(0x00_AA_AA),
    Rgb(0xAA_00_00),
    Rgb(0xAA_00_AA),
    Rgb(0xFF_AA_00),
    Rgb(0xAA_AA_AA),
    Rgb(0x55_55_55),
    Rgb(0x55_55_FF),
    Rgb(0x55_FF_55),
    Rgb(0x55_FF_FF),
    Rgb(0xFF_55_55),
    Rgb(0xFF_55_FF),
    Rgb(0xFF_FF_55),
    Rgb(0xFF_FF_FF),
];

/// Looks up the palette entry for a legacy color code (`0-9`, `a-f`).
#[must_use]
pub fn legacy_color(code: char) -> Option<Rgb> {
    code.to_digit(16)
        .and_then(|d| LEGACY_PALETTE.get(d as usize).copied())
}

// ============================================================================
// Format flags
// ============================================================================

/// A single text decoration set by a legacy format code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// `&k`
    Obfuscated,
    /// `&l`
    Bold,
    /// `&m`
    Strikethrough,
    /// `&n`
    Underline,
    /// `&o`
    Italic,
    /// `&r`: clears every flag and the color.
    Reset,
}

impl Format {
    /// All flags in serialization order.
    pub const ALL: [Self; 6] = [
        Self::Bold,
        Self::Italic,
        Self::Underline,
        Self::Strikethrough,
        Self::Obfuscated,
        Self::Reset,
    ];

    /// Maps a legacy format code letter (case-insensitive) to its flag.
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_lowercase() {
            'k' => Some(Self::Obfuscated),
            'l' => Some(Self::Bold),
            'm' => Some(Self::Strikethrough),
            'n' => Some(Self::Underline),
            'o' => Some(Self::Italic),
            'r' => Some(Self::Reset),
            _ => None,
        }
    }

    /// Lower-case name used in JSON output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Obfuscated => "obfuscated",
            Self::Bold => "bold",
            Self::Strikethrough => "strikethrough",
            Self::Underline => "underlined",
            Self::Italic => "italic",
            Self::Reset => "reset",
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Self::Obfuscated => 1,
            Self::Bold => 1 << 1,
            Self::Strikethrough => 1 << 2,
            Self::Underline => 1 << 3,
            Self::Italic => 1 << 4,
            Self::Reset => 1 << 5,
        }
    }
}

/// Set of active [`Format`] flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FormatFlags(u8);

impl FormatFlags {
    /// The empty set.
    pub const NONE: Self = Self(0);

    /// Returns `true` if `flag` is in the set.
    #[must_use]
    pub const fn contains(self, flag: Format) -> bool {
        self.0 & flag.bit() != 0
    }

    /// Adds `flag` to the set.
    pub const fn insert(&mut self, flag: Format) {
        self.0 |= flag.bit();
    }

    /// Removes `flag` from the set.
    pub const fn remove(&mut self, flag: Format) {
        self.0 &= !flag.bit();
    }

    /// Returns `true` if no flag is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates over the set flags in [`Format::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = Format> {
        Format::ALL.into_iter().filter(move |f| self.contains(*f))
    }
}

impl FromIterator<Format> for FormatFlags {
    fn from_iter<I: IntoIterator<Item = Format>>(iter: I) -> Self {
        let mut flags = Self::NONE;
        for flag in iter {
            flags.insert(flag);
        }
        flags
    }
}

impl Serialize for FormatFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(None)?;
        for flag in self.iter() {
            seq.serialize_element(flag.name())?;
        }
        seq.end()
    }
}

// ============================================================================
// Style, runs, and the compiled tree
// ============================================================================

/// Color and decorations shared by every character of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Foreground color; `None` inherits the client default.
    pub color: Option<Rgb>,
    /// Active decorations.
    pub flags: FormatFlags,
}

impl Style {
    /// A style with no color and no flags.
    pub const PLAIN: Self = Self {
        color: None,
        flags: FormatFlags::NONE,
    };

    /// Returns `true` if `flag` is active.
    #[must_use]
    pub const fn has(&self, flag: Format) -> bool {
        self.flags.contains(flag)
    }
}

/// A maximal span of text sharing one [`Style`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    /// Literal text.
    pub text: String,
    /// Style applied to `text`.
    pub style: Style,
}

impl Serialize for TextRun {
    // Chat-component shape: {"text": .., "color": "#rrggbb", "bold": true, ..}
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("text", &self.text)?;
        if let Some(color) = self.style.color {
            map.serialize_entry("color", &color)?;
        }
        for flag in self.style.flags.iter() {
            map.serialize_entry(flag.name(), &true)?;
        }
        map.end()
    }
}

/// Output of [`compile`](super::compile): an ordered list of runs.
///
/// Built fresh for each compile call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StyledText {
    /// Runs in display order.
    pub runs: Vec<TextRun>,
}

impl StyledText {
    /// Returns `true` if there is no text at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Concatenated text of all runs, without styling.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for run in &self.runs {
            f.write_str(&run.text)?;
        }
        Ok(())
    }
}
