//! Structural checks on rendered clouds. Layout is randomized, so these
//! assert on dimensions and content, never on exact pixels.

use commentcloud::cloud::{self, Error};
use commentcloud::options::{VisualOptions, CANVAS_HEIGHT, CANVAS_WIDTH};

const COMMENT_TEXT: &str = "great video nice nice thanks loved loved loved \
    editing music music great great subscribe";

#[test]
fn a_cloud_has_the_declared_dimensions() {
    let image = cloud::render(COMMENT_TEXT, &VisualOptions::default()).unwrap();
    assert_eq!(image.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
}

#[test]
fn a_cloud_renders_with_every_font_choice() {
    for font in ["serif", "sans-serif", "monospace"] {
        let options = VisualOptions::new(font, 40, "#ffffff", "#000000").unwrap();
        let image = cloud::render(COMMENT_TEXT, &options).unwrap();
        assert_eq!(image.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
    }
}

#[test]
fn a_cloud_respects_the_background_color() {
    let options = VisualOptions::new("sans-serif", 40, "#15181f", "#f0f2f5").unwrap();
    let image = cloud::render(COMMENT_TEXT, &options).unwrap();

    // Corners are far from the spiral's center and should stay untouched.
    let corner = image.get_pixel(0, 0);
    assert_eq!(corner.0, [0x15, 0x18, 0x1f, 0xff]);
}

#[test]
fn two_renders_agree_on_structure_but_need_not_agree_on_pixels() {
    let options = VisualOptions::default();
    let first = cloud::render(COMMENT_TEXT, &options).unwrap();
    let second = cloud::render(COMMENT_TEXT, &options).unwrap();
    assert_eq!(first.dimensions(), second.dimensions());
}

#[test]
fn stopword_only_text_is_a_render_error() {
    let result = cloud::render("the and but so very", &VisualOptions::default());
    assert!(matches!(result, Err(Error::NoWords)));
}

#[test]
fn the_png_export_is_a_png() {
    let image = cloud::render(COMMENT_TEXT, &VisualOptions::default()).unwrap();
    let png = cloud::encode_png(&image).unwrap();
    assert_eq!(&png[0..4], b"\x89PNG");

    let uri = cloud::png_data_uri(&png);
    assert!(uri.starts_with("data:image/png;base64,"));
}
