pub type SlateResult<T> = Result<T, SlateError>;

#[derive(thiserror::Error, Debug)]
pub enum SlateError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("font error: {0}")]
    Font(String),

    #[error("layout error: {0}")]
    Layout(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SlateError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }
}
