use thiserror::Error;

/// Error types for checked construction and element access.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlgebraError {
    /// The source sequence is shorter than the number of components required.
    #[error("Expected at least {expected} elements, got {actual}")]
    InsufficientElements {
        /// Minimum number of elements required by the target type
        expected: usize,
        /// Number of elements provided
        actual: usize,
    },

    /// A nested initializer has fewer rows than the matrix dimension.
    #[error("Expected at least {expected} rows, got {actual}")]
    InsufficientRows {
        /// Minimum number of rows required by the target type
        expected: usize,
        /// Number of rows provided
        actual: usize,
    },

    /// A row of a nested initializer is shorter than the matrix dimension.
    #[error("Row {row} has {actual} elements, expected at least {expected}")]
    ShortRow {
        /// Zero-based index of the offending row
        row: usize,
        /// Minimum number of elements required per row
        expected: usize,
        /// Number of elements in the row
        actual: usize,
    },

    /// A component, row or column index outside the valid range.
    #[error("Index {index} out of range for dimension {len}")]
    IndexOutOfRange {
        /// The requested index
        index: usize,
        /// The dimension of the accessed type
        len: usize,
    },
}

impl AlgebraError {
    /// Returns an error if `index` is not below `len`.
    #[inline]
    pub(crate) fn check_index(index: usize, len: usize) -> Result<(), Self> {
        if index < len {
            Ok(())
        } else {
            Err(Self::IndexOutOfRange { index, len })
        }
    }
}
