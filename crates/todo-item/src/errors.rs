use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseImportanceError {
    #[error("Unknown importance token: {0}")]
    UnknownToken(String),

    #[error("Importance level out of range: {0}")]
    LevelOutOfRange(u8),
}
