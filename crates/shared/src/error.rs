use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NOT_FOUND_NOTICE: &str = "Товар не найден";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotFound,
    Validation,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("product not found for barcode '{barcode}'")]
    NotFound { barcode: String },
}

impl ScanError {
    pub fn not_found(barcode: impl Into<String>) -> Self {
        Self::NotFound {
            barcode: barcode.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound { .. } => ErrorCode::NotFound,
        }
    }

    /// Text of the blocking notice shown to the worker.
    pub fn notice(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => NOT_FOUND_NOTICE,
        }
    }

    pub fn barcode(&self) -> &str {
        match self {
            Self::NotFound { barcode } => barcode,
        }
    }
}
