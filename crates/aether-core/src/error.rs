/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised when reading pet data from text.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The name does not match any pet type.
    #[error("unknown pet type: \"{0}\" (expected fire, water, forest, or electric)")]
    UnknownPetType(String),

    /// The name does not match any growth stage.
    #[error("unknown pet stage: \"{0}\"")]
    UnknownPetStage(String),

    /// The name does not match any stat gauge.
    #[error("unknown stat: \"{0}\"")]
    UnknownStat(String),
}
