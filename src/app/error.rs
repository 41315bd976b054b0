use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Pattern error: {0}")]
    Parse(#[from] crate::expand::ParseError),
    #[error("Puzzle error: {0}")]
    Shape(#[from] crate::search::ShapeError),
    #[error("Invalid file path: {0}")]
    InvalidPath(String),
}
