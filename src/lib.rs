//! labelgif turns before/after screenshot pairs into labeled, looping GIF animations for
//! documentation.
//!
//! Each pair goes through three steps:
//!
//! 1. **Label**: burn "Before"/"After" into a copy of each screenshot ([`Labeler`]), using the
//!    first loadable font from a [`FontChain`] or a built-in bitmap font.
//! 2. **Animate**: write both frames as an infinitely looping GIF ([`create_gif`]).
//! 3. **Drive**: walk a list of [`PairDescriptor`]s, skipping pairs with missing screenshots and
//!    reporting per-pair outcomes ([`run_batch`]).
//!
//! The pair list and directories default to the workspace documentation set and can be replaced
//! with a JSON [`Manifest`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod font;
mod foundation;

/// Looping GIF output.
pub mod animate;
/// Sequential batch driver.
pub mod batch;
/// Label drawing.
pub mod label;
/// Pair descriptors and manifests.
pub mod manifest;

pub use crate::foundation::core::{PixelOffset, Rgba8};
pub use crate::foundation::error::{LabelGifError, LabelGifResult};

pub use crate::animate::{DEFAULT_FRAME_DURATION_MS, create_gif, write_looping_gif};
pub use crate::batch::{
    AFTER_LABEL, BEFORE_LABEL, BatchConfig, BatchReport, PairOutcome, PairReport, run_batch,
    run_batch_with,
};
pub use crate::font::chain::{DEFAULT_FONT_CANDIDATES, FontChain, ResolvedFont};
pub use crate::font::shape::{OutlineFont, TextLayoutEngine};
pub use crate::label::{LabelStyle, Labeler, add_label};
pub use crate::manifest::{Manifest, PairDescriptor, default_pairs};
