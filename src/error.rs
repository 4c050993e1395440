use thiserror::Error;

/// Errors raised by a [`Measurer`](crate::Measurer) while querying a font
#[derive(Error, Debug)]
pub enum MeasureError {
    #[error("no font registered for family `{0}`")]
    /// The requested font family isn't known to the measurer. No fallback font is
    /// substituted; choosing one is up to the caller
    UnknownFamily(String),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),
}

/// All errors that laying out a text box can generate
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("invalid argument: {0}")]
    /// An input was out of range, i.e. a font size that isn't positive
    InvalidArgument(String),

    #[error("measurement failed: {0}")]
    /// The measurer could not provide metrics or bounds
    MeasurementFailed(#[from] MeasureError),

    #[error("rendering failed: {0}")]
    /// The renderer could not produce a surface from a finished layout
    Render(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl LayoutError {
    pub(crate) fn invalid<S: Into<String>>(message: S) -> LayoutError {
        LayoutError::InvalidArgument(message.into())
    }
}
