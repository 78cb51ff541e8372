use thiserror::Error;

// Errors the render pipeline can report back to its caller
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerrainError {
    #[error("invalid dimensions {width}x{height}: width and height must be positive")]
    InvalidDimensions { width: i64, height: i64 },
}

pub type Result<T> = std::result::Result<T, TerrainError>;
