//! Error types for PMC access.

use thiserror::Error;

/// Result type alias for FOCAS PMC operations.
pub type Result<T> = std::result::Result<T, FocasError>;

/// Errors that can occur while encoding, decoding or transferring PMC data.
///
/// Every variant except [`FocasError::ExternalCallFailed`] is detected locally,
/// before the library boundary is crossed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FocasError {
    /// Data type tag is not one of byte/word/long/float/double.
    #[error("Invalid data type tag {tag}")]
    InvalidDataType {
        /// The rejected tag.
        tag: i16,
    },

    /// Bit position outside 0-7.
    #[error("Bit position must be between 0 and 7, got {bit}")]
    InvalidBitPosition {
        /// The rejected bit position.
        bit: u8,
    },

    /// Number of values does not match the address range.
    #[error("Range size mismatch: range holds {expected} elements, got {actual} values")]
    RangeSizeMismatch {
        /// Element count of the address range.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },

    /// Integer value does not fit the target data type.
    #[error("Value {value} at index {index} is out of range [{min}, {max}]")]
    ValueOutOfRange {
        /// Position of the value in the input.
        index: usize,
        /// The rejected value.
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// Value is not a number (NaN).
    #[error("Value at index {index} is not numeric")]
    NotNumeric {
        /// Position of the value in the input.
        index: usize,
    },

    /// Fractional or non-finite value written to an integer data type.
    #[error("Value at index {index} is not an integer")]
    NotIntegral {
        /// Position of the value in the input.
        index: usize,
    },

    /// Address range with `end < start`, or too many elements for a 16-bit count.
    #[error("Invalid address range {start}..={end}")]
    InvalidRange {
        /// First address.
        start: u16,
        /// Last address.
        end: u16,
    },

    /// Buffer for the range would not fit the 16-bit length field.
    #[error("Range of {count} {data_type} elements exceeds the maximum buffer length")]
    RangeTooLarge {
        /// Data type name.
        data_type: &'static str,
        /// Requested element count.
        count: usize,
    },

    /// Raw buffer does not have the expected layout.
    #[error("Invalid PMC buffer: {reason}")]
    InvalidBuffer {
        /// Description of the layout error.
        reason: String,
    },

    /// PMC address text could not be parsed.
    #[error("Invalid PMC address: {reason}")]
    InvalidAddress {
        /// Description of the parse error.
        reason: String,
    },

    /// Operation mode name is not one of mdi/auto/jog.
    #[error("Invalid mode '{mode}': must be 'mdi', 'auto', or 'jog'")]
    InvalidMode {
        /// The rejected mode name.
        mode: String,
    },

    /// The FOCAS library returned a nonzero status code.
    #[error("{function} failed: {code}")]
    ExternalCallFailed {
        /// Name of the library call.
        function: &'static str,
        /// Raw FOCAS return code (`EW_*`).
        code: i16,
    },
}

impl FocasError {
    /// Creates a new `RangeSizeMismatch` error.
    ///
    /// # Example
    ///
    /// ```
    /// use focas_pmc::FocasError;
    ///
    /// let err = FocasError::range_size_mismatch(3, 2);
    /// assert_eq!(err.to_string(), "Range size mismatch: range holds 3 elements, got 2 values");
    /// ```
    pub fn range_size_mismatch(expected: usize, actual: usize) -> Self {
        Self::RangeSizeMismatch { expected, actual }
    }

    /// Creates a new `ValueOutOfRange` error.
    pub fn value_out_of_range(index: usize, value: i64, min: i64, max: i64) -> Self {
        Self::ValueOutOfRange {
            index,
            value,
            min,
            max,
        }
    }

    /// Creates a new `InvalidBuffer` error.
    ///
    /// # Example
    ///
    /// ```
    /// use focas_pmc::FocasError;
    ///
    /// let err = FocasError::invalid_buffer("buffer too short");
    /// ```
    pub fn invalid_buffer(reason: impl Into<String>) -> Self {
        Self::InvalidBuffer {
            reason: reason.into(),
        }
    }

    /// Creates a new `InvalidAddress` error.
    pub fn invalid_address(reason: impl Into<String>) -> Self {
        Self::InvalidAddress {
            reason: reason.into(),
        }
    }

    /// Creates a new `ExternalCallFailed` error from a FOCAS return code.
    ///
    /// # Example
    ///
    /// ```
    /// use focas_pmc::FocasError;
    ///
    /// let err = FocasError::external("pmc_rdpmcrng", -16);
    /// assert_eq!(err.to_string(), "pmc_rdpmcrng failed: -16");
    /// ```
    pub fn external(function: &'static str, code: i16) -> Self {
        Self::ExternalCallFailed { function, code }
    }

    /// Returns the FOCAS return code if this error came from the library.
    pub fn external_code(&self) -> Option<i16> {
        match self {
            Self::ExternalCallFailed { code, .. } => Some(*code),
            _ => None,
        }
    }
}
