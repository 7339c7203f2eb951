use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("minimum column width must be a positive finite number, got {0}")]
    InvalidMinWidth(f32),
    #[error("row height must be a positive finite number, got {0}")]
    InvalidRowHeight(f32),
    #[error("fixed column width {width} is below the minimum column width {min}")]
    FixedWidthBelowMin { width: f32, min: f32 },
    #[error("intrinsic fallback width must be a positive finite number, got {0}")]
    InvalidFallbackWidth(f32),
}
