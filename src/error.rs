use std::error::Error;
use std::fmt;

/// Custom error type for matrix construction and arithmetic failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Zero row or column count requested at construction
    InvalidDimensions { rows: usize, cols: usize },
    /// Source holds no elements to copy
    EmptySource,
    /// Source rows disagree in length
    RaggedSource {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Flat buffer length disagrees with the requested shape
    ShapeMismatch { rows: usize, cols: usize, len: usize },
    /// Element-wise operands differ in shape
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Multiplication operands whose inner dimensions disagree
    IncompatibleDimensions {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Identity matrix requested with size zero
    InvalidSize,
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::InvalidDimensions { rows, cols } => {
                write!(f, "invalid dimensions {}x{}: both must be at least 1", rows, cols)
            }
            MatrixError::EmptySource => write!(f, "source holds no elements"),
            MatrixError::RaggedSource {
                row,
                expected,
                found,
            } => write!(
                f,
                "source row {} has {} columns, expected {}",
                row, found, expected
            ),
            MatrixError::ShapeMismatch { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
            MatrixError::DimensionMismatch { left, right } => write!(
                f,
                "dimension mismatch: {}x{} vs {}x{}",
                left.0, left.1, right.0, right.1
            ),
            MatrixError::IncompatibleDimensions { left, right } => write!(
                f,
                "incompatible dimensions for multiplication: {}x{} * {}x{}",
                left.0, left.1, right.0, right.1
            ),
            MatrixError::InvalidSize => write!(f, "identity size must be at least 1"),
        }
    }
}

impl Error for MatrixError {}
