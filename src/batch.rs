use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::animate::{DEFAULT_FRAME_DURATION_MS, create_gif};
use crate::font::chain::FontChain;
use crate::foundation::error::{LabelGifError, LabelGifResult};
use crate::label::{LabelStyle, Labeler};
use crate::manifest::{Manifest, PairDescriptor, default_pairs};

/// Text burned into the first frame.
pub const BEFORE_LABEL: &str = "Before";
/// Text burned into the second frame.
pub const AFTER_LABEL: &str = "After";

/// Everything a batch run needs.
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Directory holding the screenshots.
    pub source_dir: PathBuf,
    /// Directory the GIFs are written to; created if missing.
    pub output_dir: PathBuf,
    /// Per-frame display time in milliseconds.
    pub frame_duration_ms: u32,
    /// Pairs to process, in order.
    pub pairs: Vec<PairDescriptor>,
    /// Font candidates for the labels.
    pub fonts: FontChain,
    /// Label appearance.
    pub style: LabelStyle,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            output_dir: PathBuf::from("images"),
            frame_duration_ms: DEFAULT_FRAME_DURATION_MS,
            pairs: default_pairs(),
            fonts: FontChain::default(),
            style: LabelStyle::default(),
        }
    }
}

impl BatchConfig {
    /// Apply the fields a manifest sets, keeping the rest.
    pub fn with_manifest(mut self, manifest: Manifest) -> Self {
        if let Some(dir) = manifest.source_dir {
            self.source_dir = dir;
        }
        if let Some(dir) = manifest.output_dir {
            self.output_dir = dir;
        }
        if let Some(ms) = manifest.frame_duration_ms {
            self.frame_duration_ms = ms;
        }
        if let Some(fonts) = manifest.fonts {
            self.fonts = FontChain::new(fonts);
        }
        if let Some(pairs) = manifest.pairs {
            self.pairs = pairs;
        }
        self
    }
}

/// What happened to one descriptor.
#[derive(Debug)]
pub enum PairOutcome {
    /// The GIF was written.
    Created {
        /// Path of the written GIF.
        output: PathBuf,
    },
    /// The "before" screenshot does not exist; nothing was written.
    MissingBefore {
        /// Path that was checked.
        path: PathBuf,
    },
    /// The "after" screenshot does not exist; nothing was written.
    MissingAfter {
        /// Path that was checked.
        path: PathBuf,
    },
    /// Decoding, labeling or encoding failed.
    Failed {
        /// Path the GIF would have been written to.
        output: PathBuf,
        /// Cause, with context.
        error: LabelGifError,
    },
}

impl PairOutcome {
    /// Whether the GIF was written.
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created { .. })
    }
}

/// A descriptor together with its outcome.
#[derive(Debug)]
pub struct PairReport {
    /// The processed descriptor.
    pub descriptor: PairDescriptor,
    /// What happened to it.
    pub outcome: PairOutcome,
}

/// Outcomes of a batch run, in descriptor order.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One entry per descriptor.
    pub pairs: Vec<PairReport>,
}

impl BatchReport {
    /// Number of GIFs written.
    pub fn succeeded(&self) -> usize {
        self.pairs.iter().filter(|p| p.outcome.is_created()).count()
    }

    /// Number of descriptors processed.
    pub fn total(&self) -> usize {
        self.pairs.len()
    }
}

/// Run every descriptor in `cfg` once, in order. Per-pair problems never abort the run; the only
/// error returned is failing to create the output directory.
pub fn run_batch(cfg: &BatchConfig) -> LabelGifResult<BatchReport> {
    run_batch_with(cfg, |_| {})
}

/// Like [`run_batch`], calling `on_pair` as soon as each descriptor finishes.
pub fn run_batch_with(
    cfg: &BatchConfig,
    mut on_pair: impl FnMut(&PairReport),
) -> LabelGifResult<BatchReport> {
    std::fs::create_dir_all(&cfg.output_dir).with_context(|| {
        format!(
            "create output directory '{}'",
            cfg.output_dir.display()
        )
    })?;

    let labeler = Labeler::new(cfg.fonts.clone(), cfg.style);
    let mut report = BatchReport::default();
    for descriptor in &cfg.pairs {
        let outcome = process_pair(cfg, &labeler, descriptor);
        let entry = PairReport {
            descriptor: descriptor.clone(),
            outcome,
        };
        on_pair(&entry);
        report.pairs.push(entry);
    }

    tracing::info!(
        succeeded = report.succeeded(),
        total = report.total(),
        "batch finished"
    );
    Ok(report)
}

#[tracing::instrument(skip(cfg, labeler), fields(output = %descriptor.output))]
fn process_pair(cfg: &BatchConfig, labeler: &Labeler, descriptor: &PairDescriptor) -> PairOutcome {
    let before_path = cfg.source_dir.join(&descriptor.before);
    let after_path = cfg.source_dir.join(&descriptor.after);
    let output = cfg.output_dir.join(&descriptor.output);

    if !before_path.exists() {
        tracing::warn!(path = %before_path.display(), "before image not found");
        return PairOutcome::MissingBefore { path: before_path };
    }
    if !after_path.exists() {
        tracing::warn!(path = %after_path.display(), "after image not found");
        return PairOutcome::MissingAfter { path: after_path };
    }

    match label_and_write(
        labeler,
        &before_path,
        &after_path,
        &output,
        cfg.frame_duration_ms,
    ) {
        Ok(()) => PairOutcome::Created { output },
        Err(error) => {
            tracing::warn!(error = %error, "pair failed");
            PairOutcome::Failed { output, error }
        }
    }
}

fn label_and_write(
    labeler: &Labeler,
    before_path: &Path,
    after_path: &Path,
    output: &Path,
    frame_duration_ms: u32,
) -> LabelGifResult<()> {
    let before = open_rgba(before_path)?;
    let after = open_rgba(after_path)?;

    let before = labeler.label(&before, BEFORE_LABEL)?;
    let after = labeler.label(&after, AFTER_LABEL)?;

    create_gif(&before, &after, output, frame_duration_ms)
}

fn open_rgba(path: &Path) -> LabelGifResult<image::RgbaImage> {
    let img = image::open(path).with_context(|| format!("open image '{}'", path.display()))?;
    Ok(img.to_rgba8())
}

#[cfg(test)]
#[path = "../tests/unit/batch.rs"]
mod tests;
