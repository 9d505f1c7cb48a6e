use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{LabelGifError, LabelGifResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub(crate) struct TextBrushRgba8 {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

/// Outline font loaded from disk and registered with a [`TextLayoutEngine`].
#[derive(Clone, Debug)]
pub struct OutlineFont {
    pub(crate) path: PathBuf,
    pub(crate) family: String,
    pub(crate) bytes: Vec<u8>,
}

impl OutlineFont {
    /// File the font was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Family name of the first face in the file.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Raw font file bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub(crate) fn font_data(&self) -> vello_cpu::peniko::FontData {
        vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(self.bytes.clone()), 0)
    }
}

/// Stateful helper for registering font files and building Parley text layouts.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Construct a new layout engine with fresh Parley contexts and no registered fonts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Read and register a font file. Fails when the file is unreadable or contains no usable
    /// font family.
    pub fn load_font_file(&mut self, path: &Path) -> LabelGifResult<OutlineFont> {
        let bytes = std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
        let family = self.register_font_bytes(&bytes)?;
        Ok(OutlineFont {
            path: path.to_path_buf(),
            family,
            bytes,
        })
    }

    pub(crate) fn register_font_bytes(&mut self, font_bytes: &[u8]) -> LabelGifResult<String> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| LabelGifError::font("no font families registered from font bytes"))?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| LabelGifError::font("registered font family has no name"))?
            .to_string();
        Ok(family_name)
    }

    /// Shape and lay out a single unwrapped line of text in a registered family.
    pub(crate) fn layout_plain(
        &mut self,
        text: &str,
        family: &str,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> LabelGifResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(LabelGifError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family.to_string())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/font/shape.rs"]
mod tests;
