/// Result alias that carries the custom [`SketchError`] type.
pub type Result<T> = std::result::Result<T, SketchError>;

/// Common error type for the core crate.
#[derive(Debug, thiserror::Error)]
pub enum SketchError {
    /// Free-form error that simply carries a readable message.
    #[error("{0}")]
    Message(String),
    /// A caller handed us a value outside the documented domain.
    #[error("{0}")]
    InvalidInput(&'static str),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl SketchError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }
}

impl From<&str> for SketchError {
    fn from(value: &str) -> Self {
        Self::msg(value)
    }
}

impl From<String> for SketchError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}
