use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardError {
    #[error("You need to define a run_id for PlantRun")]
    MissingRunId,

    #[error("Unknown card type: {0}")]
    UnknownCardType(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CardError>;
