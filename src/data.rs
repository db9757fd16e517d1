//! PMC element encodings and host-side values.

use crate::error::{FocasError, Result};

/// Element encoding of a PMC range.
///
/// The discriminants are the vendor data type tags. Tag 3 is unused by the
/// vendor and is rejected like any other unknown tag.
///
/// # Example
///
/// ```
/// use focas_pmc::DataType;
///
/// assert_eq!(DataType::from_tag(1).unwrap(), DataType::Word);
/// assert_eq!(DataType::Float64.width(), 8);
/// assert!(DataType::from_tag(3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataType {
    /// 8-bit, unsigned on write.
    Byte,
    /// 16-bit signed integer.
    Word,
    /// 32-bit signed integer.
    Long,
    /// IEEE-754 single precision.
    Float32,
    /// IEEE-754 double precision.
    Float64,
}

impl DataType {
    /// All data types in tag order.
    pub const ALL: [DataType; 5] = [
        DataType::Byte,
        DataType::Word,
        DataType::Long,
        DataType::Float32,
        DataType::Float64,
    ];

    /// Resolves a vendor data type tag.
    ///
    /// # Errors
    ///
    /// Returns `FocasError::InvalidDataType` for any tag other than 0, 1, 2, 4 or 5.
    pub fn from_tag(tag: i16) -> Result<Self> {
        match tag {
            0 => Ok(DataType::Byte),
            1 => Ok(DataType::Word),
            2 => Ok(DataType::Long),
            4 => Ok(DataType::Float32),
            5 => Ok(DataType::Float64),
            _ => Err(FocasError::InvalidDataType { tag }),
        }
    }

    /// Returns the vendor tag.
    pub fn tag(self) -> i16 {
        match self {
            DataType::Byte => 0,
            DataType::Word => 1,
            DataType::Long => 2,
            DataType::Float32 => 4,
            DataType::Float64 => 5,
        }
    }

    /// Returns the element width in bytes.
    pub fn width(self) -> usize {
        match self {
            DataType::Byte => 1,
            DataType::Word => 2,
            DataType::Long | DataType::Float32 => 4,
            DataType::Float64 => 8,
        }
    }

    /// Returns the accepted integer range on write, or `None` for float types.
    pub(crate) fn integer_bounds(self) -> Option<(i64, i64)> {
        match self {
            DataType::Byte => Some((0, u8::MAX as i64)),
            DataType::Word => Some((i16::MIN as i64, i16::MAX as i64)),
            DataType::Long => Some((i32::MIN as i64, i32::MAX as i64)),
            DataType::Float32 | DataType::Float64 => None,
        }
    }

    /// Returns whether elements are floating point.
    pub fn is_float(self) -> bool {
        matches!(self, DataType::Float32 | DataType::Float64)
    }

    /// Returns the lowercase name used in messages.
    pub fn name(self) -> &'static str {
        match self {
            DataType::Byte => "byte",
            DataType::Word => "word",
            DataType::Long => "long",
            DataType::Float32 => "float",
            DataType::Float64 => "double",
        }
    }
}

impl TryFrom<i16> for DataType {
    type Error = FocasError;

    fn try_from(tag: i16) -> Result<Self> {
        DataType::from_tag(tag)
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A host-side number read from or written to PMC memory.
///
/// Integer elements decode to [`PmcValue::Int`], float elements to
/// [`PmcValue::Float`] (single precision is widened).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum PmcValue {
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
}

impl PmcValue {
    /// Returns the value as an integer, if it is one.
    pub fn as_int(self) -> Option<i64> {
        match self {
            PmcValue::Int(v) => Some(v),
            PmcValue::Float(_) => None,
        }
    }

    /// Returns the value as a float, widening integers.
    pub fn as_f64(self) -> f64 {
        match self {
            PmcValue::Int(v) => v as f64,
            PmcValue::Float(v) => v,
        }
    }
}

impl From<i64> for PmcValue {
    fn from(v: i64) -> Self {
        PmcValue::Int(v)
    }
}

impl From<i32> for PmcValue {
    fn from(v: i32) -> Self {
        PmcValue::Int(v as i64)
    }
}

impl From<i16> for PmcValue {
    fn from(v: i16) -> Self {
        PmcValue::Int(v as i64)
    }
}

impl From<u8> for PmcValue {
    fn from(v: u8) -> Self {
        PmcValue::Int(v as i64)
    }
}

impl From<f64> for PmcValue {
    fn from(v: f64) -> Self {
        PmcValue::Float(v)
    }
}

impl From<f32> for PmcValue {
    fn from(v: f32) -> Self {
        PmcValue::Float(v as f64)
    }
}

impl std::fmt::Display for PmcValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PmcValue::Int(v) => write!(f, "{}", v),
            PmcValue::Float(v) => write!(f, "{}", v),
        }
    }
}
