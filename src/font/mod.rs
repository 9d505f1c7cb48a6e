//! Font resolution for labels.
//!
//! A [`FontChain`] is an ordered list of font files. Resolution walks the list and keeps the first
//! file that registers at least one font family; when none does, labels fall back to a small
//! built-in bitmap font.

pub(crate) mod bitmap;
pub(crate) mod chain;
pub(crate) mod shape;
