use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    /// Malformed or mathematically invalid input data (non-positive divisor,
    /// duplicate date). Aborts the run for that stock; never substituted with
    /// a default value.
    #[error("Data error: {0}")]
    Data(String),

    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("API error: remote status was {0:?}")]
    Api(Option<String>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(format!("JSON error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
