use image::RgbaImage;

use crate::font::bitmap;
use crate::font::chain::{FontChain, ResolvedFont};
use crate::font::shape::{OutlineFont, TextBrushRgba8, TextLayoutEngine};
use crate::foundation::core::{PixelOffset, Rgba8};
use crate::foundation::error::{LabelGifError, LabelGifResult};
use crate::foundation::math::premul_over_straight_in_place;

/// Label color, RGB(220, 38, 38).
pub const LABEL_RED: Rgba8 = Rgba8::opaque(220, 38, 38);
/// Default label anchor: 180px from the left edge, 10px from the top.
pub const LABEL_OFFSET: PixelOffset = PixelOffset::new(180, 10);
/// Default label font size in pixels.
pub const LABEL_SIZE_PX: f32 = 80.0;

/// How labels are drawn. The bitmap fallback ignores `size_px`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelStyle {
    /// Fill color of the text.
    pub color: Rgba8,
    /// Top-left corner of the text box.
    pub offset: PixelOffset,
    /// Outline font size in pixels.
    pub size_px: f32,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            color: LABEL_RED,
            offset: LABEL_OFFSET,
            size_px: LABEL_SIZE_PX,
        }
    }
}

/// Draws labels with a font chain and style.
#[derive(Clone, Debug, Default)]
pub struct Labeler {
    fonts: FontChain,
    style: LabelStyle,
}

impl Labeler {
    /// Labeler resolving fonts from `fonts` and drawing with `style`.
    pub fn new(fonts: FontChain, style: LabelStyle) -> Self {
        Self { fonts, style }
    }

    /// Font chain probed on every call to [`Labeler::label`].
    pub fn fonts(&self) -> &FontChain {
        &self.fonts
    }

    /// Style applied to every label.
    pub fn style(&self) -> &LabelStyle {
        &self.style
    }

    /// Return a copy of `img` with `text` drawn on it. The result has the same dimensions as `img`
    /// and `img` itself is left untouched. Text running past the image edges is clipped.
    ///
    /// Fonts are resolved on every call; nothing is cached between labels.
    pub fn label(&self, img: &RgbaImage, text: &str) -> LabelGifResult<RgbaImage> {
        let mut engine = TextLayoutEngine::new();
        let font = self.fonts.resolve(&mut engine);
        self.label_with(&mut engine, &font, img, text)
    }

    fn label_with(
        &self,
        engine: &mut TextLayoutEngine,
        font: &ResolvedFont,
        img: &RgbaImage,
        text: &str,
    ) -> LabelGifResult<RgbaImage> {
        let (width, height) = img.dimensions();
        let layer = match font {
            ResolvedFont::Outline(outline) => {
                render_outline_layer(engine, outline, text, &self.style, width, height)?
            }
            ResolvedFont::Builtin => {
                let mut layer = vec![0u8; width as usize * height as usize * 4];
                bitmap::draw_text_premul(
                    &mut layer,
                    width,
                    height,
                    text,
                    self.style.offset,
                    self.style.color,
                );
                layer
            }
        };

        let mut labeled = img.clone();
        composite_layer(&mut labeled, &layer)?;
        Ok(labeled)
    }
}

/// Label `img` with the default font chain and style.
pub fn add_label(img: &RgbaImage, text: &str) -> LabelGifResult<RgbaImage> {
    Labeler::default().label(img, text)
}

fn render_outline_layer(
    engine: &mut TextLayoutEngine,
    font: &OutlineFont,
    text: &str,
    style: &LabelStyle,
    width: u32,
    height: u32,
) -> LabelGifResult<Vec<u8>> {
    let w: u16 = width
        .try_into()
        .map_err(|_| LabelGifError::render("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| LabelGifError::render("image height exceeds u16"))?;

    let brush = TextBrushRgba8 {
        r: style.color.r,
        g: style.color.g,
        b: style.color.b,
        a: style.color.a,
    };
    let layout = engine.layout_plain(text, &font.family, style.size_px, brush)?;
    let font_data = font.font_data();

    let mut ctx = vello_cpu::RenderContext::new(w, h);
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((
        f64::from(style.offset.left),
        f64::from(style.offset.top),
    )));
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let brush = run.style().brush;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                brush.r, brush.g, brush.b, brush.a,
            ));
            let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(&font_data)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }

    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);
    Ok(pixmap.data_as_u8_slice().to_vec())
}

fn composite_layer(img: &mut RgbaImage, layer_premul: &[u8]) -> LabelGifResult<()> {
    let dst: &mut [u8] = &mut **img;
    premul_over_straight_in_place(dst, layer_premul)
}

#[cfg(test)]
#[path = "../tests/unit/label.rs"]
mod tests;
