use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Failed to read file: {path}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse file: {path} - {message}")]
    ParseError { path: String, message: String },
}

pub type Result<T> = std::result::Result<T, ScanError>;
