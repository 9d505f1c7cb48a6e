use std::path::{Path, PathBuf};

use crate::font::shape::{OutlineFont, TextLayoutEngine};

/// Bold system fonts probed in order when no other list is configured.
pub const DEFAULT_FONT_CANDIDATES: [&str; 7] = [
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/SFNSDisplay.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
    "C:\\Windows\\Fonts\\ariblk.ttf",
];

/// Result of walking a [`FontChain`].
#[derive(Clone, Debug)]
pub enum ResolvedFont {
    /// First candidate that loaded.
    Outline(OutlineFont),
    /// No candidate loaded; the built-in bitmap font is used at its native size.
    Builtin,
}

impl ResolvedFont {
    /// Whether this is the built-in bitmap fallback.
    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin)
    }
}

/// Ordered font candidates with first-success selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontChain {
    candidates: Vec<PathBuf>,
}

impl Default for FontChain {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_CANDIDATES)
    }
}

impl FontChain {
    /// Chain probing `candidates` in the given order.
    pub fn new<I, P>(candidates: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    /// Chain with no candidates, always resolving to the bitmap font.
    pub fn builtin_only() -> Self {
        Self {
            candidates: Vec::new(),
        }
    }

    /// Candidate paths in probe order.
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Register the first loadable candidate with `engine`. Rejected candidates are logged at
    /// debug level and skipped.
    pub fn resolve(&self, engine: &mut TextLayoutEngine) -> ResolvedFont {
        for path in &self.candidates {
            if let Some(font) = probe(engine, path) {
                return ResolvedFont::Outline(font);
            }
        }
        tracing::debug!(
            candidates = self.candidates.len(),
            "no font candidate loaded, using builtin bitmap font"
        );
        ResolvedFont::Builtin
    }
}

fn probe(engine: &mut TextLayoutEngine, path: &Path) -> Option<OutlineFont> {
    match engine.load_font_file(path) {
        Ok(font) => {
            tracing::debug!(path = %path.display(), family = %font.family, "font candidate loaded");
            Some(font)
        }
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "font candidate rejected");
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/font/chain.rs"]
mod tests;
