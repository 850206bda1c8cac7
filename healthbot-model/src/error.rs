#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("\"{value}\" is not a known category of {encoder}")]
    UnknownCategory { encoder: String, value: String },
    #[error("prediction failed: {0}")]
    PredictionError(String),
    #[error("artifact {artifact} unavailable: {reason}")]
    ArtifactUnavailable { artifact: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
