//! Frequency-weighted word cloud rendering.
//!
//! Given aggregated comment text and validated [`VisualOptions`], this
//! module produces a raster image: frequent words drawn large near the
//! center, rarer words smaller and further out. Layout is randomized, so
//! two renders of the same text are not byte-identical; callers should
//! only rely on the declared dimensions.

mod layout;
mod words;

use std::fs;
use std::io::Cursor;

use ab_glyph::{Font, FontVec};
use base64::{engine::general_purpose, Engine as _};
use image::{ImageFormat, Rgba, RgbaImage};
use rand::Rng;
use thiserror::Error;

use crate::options::{Color, FontFamily, VisualOptions, CANVAS_HEIGHT, CANVAS_WIDTH};

/// Renders the word cloud for `text` onto a fresh canvas.
///
/// Fails with [`Error::NoWords`] when nothing drawable is left after
/// tokenizing, such as all-stopword text or pure punctuation. Callers are
/// expected to have already handled the zero-comments case.
pub fn render(text: &str, options: &VisualOptions) -> Result<RgbaImage, Error> {
    let tokens = words::tokenize(text);
    let weighted = words::weigh(tokens, options.font_size);
    if weighted.is_empty() {
        return Err(Error::NoWords);
    }

    let font = load_font(options.font)?;
    let mut rng = rand::thread_rng();
    let placed = layout::layout(&font, &weighted, CANVAS_WIDTH, CANVAS_HEIGHT, &mut rng);

    let mut image = RgbaImage::from_pixel(
        CANVAS_WIDTH,
        CANVAS_HEIGHT,
        Rgba(options.background.rgba()),
    );

    for word in &placed {
        // Slight per-word brightness variation keeps the cloud from
        // reading as a flat block of one color.
        let color = shade(options.foreground, rng.gen_range(0.7..=1.0));
        for glyph in &word.glyphs {
            draw_glyph(&mut image, &font, glyph.clone(), color);
        }
    }

    Ok(image)
}

/// Encodes the rendered canvas as an in-memory PNG.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, Error> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Wraps PNG bytes in a `data:` URI suitable for an `img` tag or a
/// download link. Nothing touches the filesystem.
pub fn png_data_uri(png: &[u8]) -> String {
    format!(
        "data:image/png;base64,{}",
        general_purpose::STANDARD.encode(png)
    )
}

/// A failure while building the image.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not load the font at {path}: {source}")]
    FontFile {
        path: &'static str,
        source: std::io::Error,
    },

    #[error("the font at {0} is not a usable font file")]
    FontData(&'static str),

    #[error("no words left to draw after filtering")]
    NoWords,

    #[error("could not encode the image: {0}")]
    Encode(#[from] image::ImageError),
}

fn load_font(family: FontFamily) -> Result<FontVec, Error> {
    let path = family.font_path();
    let bytes = fs::read(path).map_err(|source| Error::FontFile { path, source })?;
    FontVec::try_from_vec(bytes).map_err(|_| Error::FontData(path))
}

fn draw_glyph(image: &mut RgbaImage, font: &FontVec, glyph: ab_glyph::Glyph, color: [u8; 3]) {
    let Some(outline) = font.outline_glyph(glyph) else {
        // Whitespace and anything else without an outline.
        return;
    };
    let bounds = outline.px_bounds();
    outline.draw(|x, y, coverage| {
        let px = bounds.min.x as i32 + x as i32;
        let py = bounds.min.y as i32 + y as i32;
        if px < 0 || py < 0 || px >= image.width() as i32 || py >= image.height() as i32 {
            return;
        }
        let pixel = image.get_pixel_mut(px as u32, py as u32);
        let coverage = coverage.clamp(0.0, 1.0);
        for channel in 0..3 {
            let base = pixel[channel] as f32;
            pixel[channel] = (base + (color[channel] as f32 - base) * coverage) as u8;
        }
    });
}

/// Scales a color toward black by `factor` in `0.0..=1.0`.
fn shade(color: Color, factor: f32) -> [u8; 3] {
    [
        (color.r as f32 * factor) as u8,
        (color.g as f32 * factor) as u8,
        (color.b as f32 * factor) as u8,
    ]
}
