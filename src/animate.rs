use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::Path,
};

use anyhow::Context as _;
use image::{
    Delay, Frame, RgbaImage,
    codecs::gif::{GifEncoder, Repeat},
};

use crate::foundation::error::{LabelGifError, LabelGifResult};

/// How long each frame stays on screen unless configured otherwise.
pub const DEFAULT_FRAME_DURATION_MS: u32 = 1500;

/// Write `before` then `after` as a two-frame GIF that loops forever.
#[tracing::instrument(skip(before, after), fields(out = %out_path.display()))]
pub fn create_gif(
    before: &RgbaImage,
    after: &RgbaImage,
    out_path: &Path,
    frame_duration_ms: u32,
) -> LabelGifResult<()> {
    write_looping_gif(&[before, after], out_path, frame_duration_ms)
}

/// Write `frames` in order as an infinitely looping GIF, each shown for `frame_duration_ms`.
///
/// The duration is handed to the encoder as-is; GIF stores delays in hundredths of a second.
pub fn write_looping_gif(
    frames: &[&RgbaImage],
    out_path: &Path,
    frame_duration_ms: u32,
) -> LabelGifResult<()> {
    if frames.is_empty() {
        return Err(LabelGifError::validation(
            "a gif needs at least one frame",
        ));
    }

    let file = File::create(out_path)
        .with_context(|| format!("create gif '{}'", out_path.display()))?;
    let mut writer = BufWriter::new(file);
    {
        let mut encoder = GifEncoder::new(&mut writer);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| LabelGifError::encode(format!("set gif loop count: {e}")))?;

        let delay = Delay::from_numer_denom_ms(frame_duration_ms, 1);
        for (i, img) in frames.iter().enumerate() {
            let frame = Frame::from_parts((*img).clone(), 0, 0, delay);
            encoder.encode_frame(frame).map_err(|e| {
                LabelGifError::encode(format!(
                    "encode frame {i} of '{}': {e}",
                    out_path.display()
                ))
            })?;
        }
    }
    writer
        .flush()
        .with_context(|| format!("flush gif '{}'", out_path.display()))?;

    tracing::debug!(frames = frames.len(), frame_duration_ms, "gif written");
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/animate.rs"]
mod tests;
