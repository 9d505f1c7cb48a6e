/// Crate-wide result alias.
pub type LabelGifResult<T> = Result<T, LabelGifError>;

/// Errors produced while loading, labeling and encoding screenshot pairs.
#[derive(thiserror::Error, Debug)]
pub enum LabelGifError {
    /// Invalid input data (descriptors, manifest fields).
    #[error("validation error: {0}")]
    Validation(String),

    /// A font could not be loaded or shaped.
    #[error("font error: {0}")]
    Font(String),

    /// Drawing the label failed.
    #[error("render error: {0}")]
    Render(String),

    /// Writing the animation failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// Configuration could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Anything else, usually I/O or codec failures with attached context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LabelGifError {
    /// Build a [`LabelGifError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LabelGifError::Font`].
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`LabelGifError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`LabelGifError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`LabelGifError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
