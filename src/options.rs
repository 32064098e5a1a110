//! User-selected visual parameters for the word cloud.
//!
//! Everything here is validated when it is constructed, so the renderer
//! never sees an unknown font, an out-of-range size, or a malformed color.

use std::fmt;

use thiserror::Error;

/// Smallest selectable word size, in pixels.
pub const MIN_FONT_SIZE: u32 = 10;

/// Largest selectable word size, in pixels.
pub const MAX_FONT_SIZE: u32 = 100;

/// Size used when the form has not been touched.
pub const DEFAULT_FONT_SIZE: u32 = 40;

/// Rendered image dimensions.
pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 400;

/// The fonts a user can pick from. Each maps to a TTF bundled under
/// `assets/fonts`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontFamily {
    Serif,
    SansSerif,
    Monospace,
}

impl FontFamily {
    pub fn all() -> [FontFamily; 3] {
        [
            FontFamily::Serif,
            FontFamily::SansSerif,
            FontFamily::Monospace,
        ]
    }

    /// The value submitted by the form's font selector.
    pub fn id(self) -> &'static str {
        match self {
            FontFamily::Serif => "serif",
            FontFamily::SansSerif => "sans-serif",
            FontFamily::Monospace => "monospace",
        }
    }

    /// Human-readable name shown in the form.
    pub fn label(self) -> &'static str {
        match self {
            FontFamily::Serif => "Serif",
            FontFamily::SansSerif => "Sans-serif",
            FontFamily::Monospace => "Monospace",
        }
    }

    pub fn font_path(self) -> &'static str {
        match self {
            FontFamily::Serif => "assets/fonts/DejaVuSerif.ttf",
            FontFamily::SansSerif => "assets/fonts/DejaVuSans.ttf",
            FontFamily::Monospace => "assets/fonts/DejaVuSansMono.ttf",
        }
    }

    fn from_id(id: &str) -> Result<Self, Error> {
        FontFamily::all()
            .into_iter()
            .find(|family| family.id() == id)
            .ok_or_else(|| Error::UnknownFont(id.to_owned()))
    }
}

/// An opaque sRGB color, parsed from a `#rrggbb` form value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 0xff,
        g: 0xff,
        b: 0xff,
    };

    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    pub fn parse(value: &str) -> Result<Self, Error> {
        let bad = || Error::BadColor(value.to_owned());

        let hex = value.strip_prefix('#').ok_or_else(bad)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(bad());
        }
        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| bad())?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| bad())?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| bad())?;
        Ok(Color { r, g, b })
    }

    pub fn rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 0xff]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Validated configuration handed to the renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisualOptions {
    pub font: FontFamily,
    /// Pixel size of the most frequent word.
    pub font_size: u32,
    pub background: Color,
    pub foreground: Color,
}

impl VisualOptions {
    /// Builds options from raw form values, rejecting anything out of range
    /// before it reaches the renderer.
    pub fn new(
        font: &str,
        font_size: u32,
        background: &str,
        foreground: &str,
    ) -> Result<Self, Error> {
        if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&font_size) {
            return Err(Error::FontSizeOutOfRange(font_size));
        }
        Ok(VisualOptions {
            font: FontFamily::from_id(font)?,
            font_size,
            background: Color::parse(background)?,
            foreground: Color::parse(foreground)?,
        })
    }
}

impl Default for VisualOptions {
    fn default() -> Self {
        VisualOptions {
            font: FontFamily::SansSerif,
            font_size: DEFAULT_FONT_SIZE,
            background: Color::WHITE,
            foreground: Color::BLACK,
        }
    }
}

/// A form value the generator refuses to work with.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Please enter a YouTube video ID.")]
    MissingVideoId,

    #[error("Please enter a YouTube Data API key.")]
    MissingApiKey,

    #[error("\"{0}\" is not one of the available fonts.")]
    UnknownFont(String),

    #[error("Font size must be between {MIN_FONT_SIZE} and {MAX_FONT_SIZE}; got {0}.")]
    FontSizeOutOfRange(u32),

    #[error("\"{0}\" is not a #rrggbb color.")]
    BadColor(String),
}
