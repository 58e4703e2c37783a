use thiserror::Error;

/// Raised when a candidate is not exactly three decimal digits after trimming.
///
/// This is the only error the generation core can produce.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Input must be exactly 3 digits (000–999).")]
pub struct InvalidInputError {
    pub input: String,
}

impl InvalidInputError {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum Pick3Error {
    #[error("Invalid Input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Writing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Thread Pool Error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type P3Result<T> = Result<T, Pick3Error>;
