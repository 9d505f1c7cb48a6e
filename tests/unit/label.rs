use super::*;

const GRAY: [u8; 4] = [240, 240, 240, 255];

fn gray_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, image::Rgba(GRAY))
}

fn bitmap_labeler() -> Labeler {
    Labeler::new(FontChain::builtin_only(), LabelStyle::default())
}

#[test]
fn default_style_matches_documentation_labels() {
    let style = LabelStyle::default();
    assert_eq!(style.color, Rgba8::opaque(220, 38, 38));
    assert_eq!(style.offset, PixelOffset::new(180, 10));
    assert_eq!(style.size_px, 80.0);
}

#[test]
fn bitmap_label_keeps_dimensions_and_source() {
    let src = gray_image(320, 40);
    let labeled = bitmap_labeler().label(&src, "Before").unwrap();

    assert_eq!(labeled.dimensions(), src.dimensions());
    assert!(src.pixels().all(|p| p.0 == GRAY));
    assert_ne!(labeled, src);
}

#[test]
fn bitmap_label_lands_at_offset_in_red() {
    let src = gray_image(320, 40);
    let labeled = bitmap_labeler().label(&src, "Before").unwrap();

    // First column of 'B' is solid for seven rows.
    for row in 0..7 {
        assert_eq!(labeled.get_pixel(180, 10 + row).0, [220, 38, 38, 255]);
    }
    assert_eq!(labeled.get_pixel(179, 10).0, GRAY);
    assert_eq!(labeled.get_pixel(180, 9).0, GRAY);
    assert_eq!(labeled.get_pixel(0, 0).0, GRAY);
}

#[test]
fn bitmap_label_clips_on_small_images() {
    let src = gray_image(100, 8);
    let labeled = bitmap_labeler().label(&src, "After").unwrap();
    assert_eq!(labeled, src);
}

#[test]
fn translucent_pixels_blend_under_label() {
    let src = RgbaImage::from_pixel(200, 20, image::Rgba([0, 0, 255, 0]));
    let labeled = bitmap_labeler().label(&src, "I").unwrap();
    // 'I' center column is solid from the top row.
    assert_eq!(labeled.get_pixel(182, 10).0, [220, 38, 38, 255]);
    assert_eq!(labeled.get_pixel(0, 0).0[3], 0);
}

#[test]
fn pixels_outside_label_are_untouched() {
    let mut src = RgbaImage::from_pixel(400, 40, image::Rgba([200, 100, 50, 3]));
    src.put_pixel(1, 0, image::Rgba([12, 34, 56, 0]));
    let labeled = bitmap_labeler().label(&src, "Before").unwrap();

    assert_eq!(labeled.get_pixel(0, 0).0, [200, 100, 50, 3]);
    assert_eq!(labeled.get_pixel(1, 0).0, [12, 34, 56, 0]);
    assert_eq!(labeled.get_pixel(399, 39).0, [200, 100, 50, 3]);
    // Glyph pixels are fully covered by the opaque label color.
    assert_eq!(labeled.get_pixel(180, 10).0, [220, 38, 38, 255]);
    let changed = labeled
        .pixels()
        .zip(src.pixels())
        .filter(|(a, b)| a != b)
        .count();
    assert!(changed > 0 && changed < 8 * 36);
}

#[test]
fn outline_label_with_system_font_if_present() {
    let font_path = std::path::Path::new("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf");
    if !font_path.exists() {
        return;
    }

    let labeler = Labeler::new(FontChain::new([font_path]), LabelStyle::default());
    let src = gray_image(640, 160);
    let labeled = labeler.label(&src, "Before").unwrap();

    assert_eq!(labeled.dimensions(), (640, 160));
    let reddish = labeled
        .pixels()
        .filter(|p| p.0[0] > 200 && p.0[1] < 120 && p.0[2] < 120)
        .count();
    assert!(reddish > 500, "expected a visible label, got {reddish} red pixels");

    // Nothing is drawn left of the anchor.
    for y in 0..160 {
        for x in 0..170 {
            assert_eq!(labeled.get_pixel(x, y).0, GRAY);
        }
    }
}
