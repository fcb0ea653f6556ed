//! 크레이트 공통 에러 타입

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdcError {
    /// 샘플링에 필요한 가중치 수보다 레이어가 작음 (레이어 스킵 대상)
    #[error("Insufficient data in '{layer}': {available} weights, {required} required")]
    InsufficientData {
        layer: String,
        available: usize,
        required: usize,
    },

    #[error("Quantized value {value} at flat index {index} is outside [-127, 127]")]
    ValueOutOfRange { index: usize, value: i8 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Non-finite weight at flat index {index} in '{layer}'")]
    NonFiniteWeight { layer: String, index: usize },

    #[error("Unsupported tensor dtype {dtype} for '{layer}'")]
    UnsupportedDtype { layer: String, dtype: String },

    #[error("Model file not found: {0}")]
    ModelNotFound(String),

    #[error("SafeTensors error: {0}")]
    Safetensors(#[from] safetensors::SafeTensorError),

    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Download failed: {0}")]
    Download(String),
}

pub type Result<T> = std::result::Result<T, AdcError>;
