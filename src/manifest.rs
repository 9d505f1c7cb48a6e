use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::foundation::error::{LabelGifError, LabelGifResult};

/// One animation job: two screenshots in, one GIF out.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PairDescriptor {
    /// File name of the "before" screenshot, relative to the source directory.
    pub before: String,
    /// File name of the "after" screenshot, relative to the source directory.
    pub after: String,
    /// File name of the GIF, relative to the output directory.
    pub output: String,
}

impl PairDescriptor {
    /// Descriptor from its three file names.
    pub fn new(
        before: impl Into<String>,
        after: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
            output: output.into(),
        }
    }

    /// Reject empty file names.
    pub fn validate(&self) -> LabelGifResult<()> {
        for (field, value) in [
            ("before", &self.before),
            ("after", &self.after),
            ("output", &self.output),
        ] {
            if value.trim().is_empty() {
                return Err(LabelGifError::validation(format!(
                    "pair descriptor '{field}' must be non-empty"
                )));
            }
        }
        Ok(())
    }
}

/// The screenshot pairs used by the workspace documentation, in processing order.
pub fn default_pairs() -> Vec<PairDescriptor> {
    [
        // uv code actions
        "uv_CodeAction_UseWorkspaceDependency",
        "uv_CodeAction_AddToWorkspaceAndUseWorkspaceDependency",
        // Cargo code actions
        "Cargo_CodeAction_InheritFromWorkspace",
        "Cargo_CodeAction_InheritDependencyFromWorkspace",
    ]
    .into_iter()
    .map(stem_pair)
    .chain([
        // Source screenshots carry a typo that the published GIF name does not.
        PairDescriptor::new(
            "Cargo_CodeAction_ConevrtDependencyToTableFormat_Before.png",
            "Cargo_CodeAction_ConevrtDependencyToTableFormat_After.png",
            "Cargo_CodeAction_ConvertDependencyToTableFormat.gif",
        ),
        stem_pair("Cargo_CodeAction_AddToWorkspaceAndInheritDependency"),
    ])
    .collect()
}

fn stem_pair(stem: &str) -> PairDescriptor {
    PairDescriptor::new(
        format!("{stem}_Before.png"),
        format!("{stem}_After.png"),
        format!("{stem}.gif"),
    )
}

/// Optional overrides read from a JSON file. Missing fields keep their defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Directory holding the screenshots.
    pub source_dir: Option<PathBuf>,
    /// Directory the GIFs are written to.
    pub output_dir: Option<PathBuf>,
    /// Per-frame display time in milliseconds.
    pub frame_duration_ms: Option<u32>,
    /// Font files to probe, in order, replacing the default candidates.
    pub fonts: Option<Vec<PathBuf>>,
    /// Pairs to process, replacing the default list.
    pub pairs: Option<Vec<PairDescriptor>>,
}

impl Manifest {
    /// Parse a manifest from JSON text. Paths are kept as written.
    pub fn from_json_str(s: &str) -> LabelGifResult<Self> {
        let manifest: Self = serde_json::from_str(s)
            .map_err(|e| LabelGifError::config(format!("parse manifest JSON: {e}")))?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Read a manifest file. Relative paths inside it are resolved against the file's directory.
    pub fn load(path: &Path) -> LabelGifResult<Self> {
        let f = File::open(path).with_context(|| format!("open manifest '{}'", path.display()))?;
        let manifest: Self = serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            LabelGifError::config(format!("parse manifest '{}': {e}", path.display()))
        })?;
        manifest.validate()?;

        let root = path.parent().unwrap_or_else(|| Path::new("."));
        Ok(manifest.rebased(root))
    }

    /// Validate every listed pair.
    pub fn validate(&self) -> LabelGifResult<()> {
        if let Some(pairs) = &self.pairs {
            for pair in pairs {
                pair.validate()?;
            }
        }
        Ok(())
    }

    fn rebased(self, root: &Path) -> Self {
        let rebase = |p: PathBuf| if p.is_absolute() { p } else { root.join(p) };
        Self {
            source_dir: self.source_dir.map(rebase),
            output_dir: self.output_dir.map(rebase),
            fonts: self
                .fonts
                .map(|fonts| fonts.into_iter().map(rebase).collect()),
            ..self
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/manifest.rs"]
mod tests;
