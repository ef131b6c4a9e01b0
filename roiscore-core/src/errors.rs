use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoiCoreError {
    #[error("Invalid strand: {0}. Expected one of '+', '-' or '.'")]
    InvalidStrand(String),

    #[error("Invalid frame: {0}. Expected one of 0, 1, 2 or '.'")]
    InvalidFrame(String),

    #[error("Invalid region coordinates {start}-{end}. Positions are 1-based and the end can't be before the start")]
    InvalidCoordinates { start: u32, end: u32 },

    #[error("Can't derive an output name from path: {0}")]
    InvalidOutputPath(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RoiCoreError>;
