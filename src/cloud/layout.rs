//! Spiral placement of sized words on the canvas.
//!
//! Words are laid down in frequency order. Each one starts at a random
//! angle near the canvas center and walks an outward spiral until it finds
//! a spot that stays inside the canvas and clear of everything already
//! placed. Words that never find a spot are skipped.

use ab_glyph::{point, Font, FontVec, Glyph, GlyphId, PxScale, ScaleFont};
use rand::Rng;

use super::words::WeightedWord;

const ANGLE_STEP: f32 = 0.35;
const RADIUS_PER_RADIAN: f32 = 1.6;
const SPIRAL_STEPS: usize = 1200;

/// Canvas height is half its width, so the spiral is flattened to fill
/// the frame instead of escaping off the top and bottom first.
const VERTICAL_SQUASH: f32 = 0.55;

/// Clearance kept between neighboring words, in pixels.
const WORD_PADDING: f32 = 2.0;

/// An axis-aligned box in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub(super) fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }

    fn padded(&self, pad: f32) -> Rect {
        Rect {
            x: self.x - pad,
            y: self.y - pad,
            w: self.w + 2.0 * pad,
            h: self.h + 2.0 * pad,
        }
    }

    fn within(&self, width: f32, height: f32) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.x + self.w <= width && self.y + self.h <= height
    }
}

/// A word that found a home, with its glyphs in final canvas positions.
pub(super) struct PlacedWord {
    pub glyphs: Vec<Glyph>,
    pub bounds: Rect,
}

/// Places as many of the weighted words as will fit.
pub(super) fn layout(
    font: &FontVec,
    words: &[WeightedWord],
    width: u32,
    height: u32,
    rng: &mut impl Rng,
) -> Vec<PlacedWord> {
    let mut placed: Vec<PlacedWord> = Vec::new();
    for word in words {
        if let Some(hit) = place_word(font, word, width as f32, height as f32, &placed, rng) {
            placed.push(hit);
        }
    }
    placed
}

fn place_word(
    font: &FontVec,
    word: &WeightedWord,
    width: f32,
    height: f32,
    placed: &[PlacedWord],
    rng: &mut impl Rng,
) -> Option<PlacedWord> {
    let shaped = shape(font, &word.text, word.size);
    if shaped.width <= 0.0 {
        return None;
    }

    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let start_angle = rng.gen_range(0.0..std::f32::consts::TAU);

    for step in 0..SPIRAL_STEPS {
        let theta = step as f32 * ANGLE_STEP;
        let radius = RADIUS_PER_RADIAN * theta;
        let angle = start_angle + theta;

        let bounds = Rect {
            x: center_x + radius * angle.cos() - shaped.width / 2.0,
            y: center_y + radius * angle.sin() * VERTICAL_SQUASH - shaped.height / 2.0,
            w: shaped.width,
            h: shaped.height,
        };

        if !bounds.within(width, height) {
            continue;
        }
        let guarded = bounds.padded(WORD_PADDING);
        if placed.iter().any(|other| other.bounds.intersects(&guarded)) {
            continue;
        }

        // Shaped glyphs sit on a baseline at y = 0; move them into place.
        let glyphs = shaped
            .glyphs
            .iter()
            .cloned()
            .map(|mut glyph| {
                glyph.position.x += bounds.x;
                glyph.position.y += bounds.y + shaped.ascent;
                glyph
            })
            .collect();

        return Some(PlacedWord { glyphs, bounds });
    }

    None
}

struct ShapedWord {
    glyphs: Vec<Glyph>,
    width: f32,
    height: f32,
    ascent: f32,
}

/// Lays the word's glyphs along a baseline at the given pixel size and
/// measures the box they occupy.
fn shape(font: &FontVec, text: &str, size: f32) -> ShapedWord {
    let scale = PxScale::from(size);
    let scaled = font.as_scaled(scale);

    let mut glyphs = Vec::new();
    let mut caret = 0.0f32;
    let mut previous: Option<GlyphId> = None;

    for ch in text.chars() {
        let id = font.glyph_id(ch);
        if let Some(prev) = previous {
            caret += scaled.kern(prev, id);
        }
        glyphs.push(id.with_scale_and_position(scale, point(caret, 0.0)));
        caret += scaled.h_advance(id);
        previous = Some(id);
    }

    ShapedWord {
        glyphs,
        width: caret,
        height: scaled.ascent() - scaled.descent(),
        ascent: scaled.ascent(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_font() -> FontVec {
        let bytes = std::fs::read("assets/fonts/DejaVuSans.ttf").expect("bundled font");
        FontVec::try_from_vec(bytes).expect("bundled font should parse")
    }

    fn word(text: &str, size: f32) -> WeightedWord {
        WeightedWord {
            text: text.to_string(),
            size,
        }
    }

    #[test]
    fn rects_that_overlap_intersect() {
        let a = Rect { x: 0.0, y: 0.0, w: 10.0, h: 10.0 };
        let b = Rect { x: 5.0, y: 5.0, w: 10.0, h: 10.0 };
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn disjoint_rects_do_not_intersect() {
        let a = Rect { x: 0.0, y: 0.0, w: 10.0, h: 10.0 };
        let b = Rect { x: 20.0, y: 0.0, w: 10.0, h: 10.0 };
        assert!(!a.intersects(&b));
    }

    #[test]
    fn touching_rects_do_not_intersect() {
        let a = Rect { x: 0.0, y: 0.0, w: 10.0, h: 10.0 };
        let b = Rect { x: 10.0, y: 0.0, w: 10.0, h: 10.0 };
        assert!(!a.intersects(&b));
    }

    #[test]
    fn longer_words_shape_wider() {
        let font = test_font();
        let short = shape(&font, "hi", 40.0);
        let long = shape(&font, "hippopotamus", 40.0);
        assert!(short.width > 0.0);
        assert!(long.width > short.width);
    }

    #[test]
    fn larger_sizes_shape_taller() {
        let font = test_font();
        let small = shape(&font, "word", 20.0);
        let large = shape(&font, "word", 60.0);
        assert!(large.height > small.height);
        assert!(large.width > small.width);
    }

    #[test]
    fn placed_words_stay_on_the_canvas_and_apart() {
        let font = test_font();
        let words: Vec<_> = ["comments", "video", "nice", "thanks", "editing", "music"]
            .iter()
            .enumerate()
            .map(|(n, text)| word(text, 60.0 - 5.0 * n as f32))
            .collect();

        let placed = layout(&font, &words, 800, 400, &mut rand::thread_rng());

        assert_eq!(placed.len(), words.len(), "all six words should fit");
        for word in &placed {
            assert!(word.bounds.within(800.0, 400.0));
        }
        for (i, a) in placed.iter().enumerate() {
            for b in &placed[i + 1..] {
                assert!(!a.bounds.intersects(&b.bounds));
            }
        }
    }

    #[test]
    fn a_word_wider_than_the_canvas_is_skipped() {
        let font = test_font();
        let too_wide = word(&"w".repeat(300), 80.0);
        let placed = layout(&font, &[too_wide], 800, 400, &mut rand::thread_rng());
        assert!(placed.is_empty());
    }
}
