//! PMC buffer header and address ranges.
//!
//! Every PMC transfer buffer starts with an 8-byte header that mirrors the
//! vendor `IODBPMC` struct:
//!
//! | Offset | Size | Field | Description |
//! |-------:|-----:|-------|-------------|
//! | 0 | 2 | type_a | Area type (signed) |
//! | 2 | 2 | type_d | Data type tag (signed) |
//! | 4 | 2 | datano_s | Start address |
//! | 6 | 2 | datano_e | End address (inclusive) |
//!
//! Fields are in host byte order, because the buffer is handed straight to the
//! library in process memory.
//!
//! # Example
//!
//! ```
//! use focas_pmc::{AddressRange, AreaType, PmcHeader, PMC_HEADER_SIZE};
//!
//! let range = AddressRange::new(10, 12).unwrap();
//! assert_eq!(range.count(), 3);
//!
//! let header = PmcHeader::new(AreaType::Y, 0, range);
//! assert_eq!(header.to_bytes().len(), PMC_HEADER_SIZE);
//! ```

use crate::area::AreaType;
use crate::error::{FocasError, Result};

/// PMC buffer header size in bytes.
pub const PMC_HEADER_SIZE: usize = 8;

/// Inclusive range of PMC addresses.
///
/// Deserialization goes through [`AddressRange::new`], so a decoded range
/// holds the same invariants as a constructed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRange"))]
pub struct AddressRange {
    start: u16,
    end: u16,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRange {
    start: u16,
    end: u16,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRange> for AddressRange {
    type Error = FocasError;

    fn try_from(raw: RawRange) -> Result<Self> {
        AddressRange::new(raw.start, raw.end)
    }
}

impl AddressRange {
    /// Creates a new inclusive range.
    ///
    /// # Errors
    ///
    /// Returns `FocasError::InvalidRange` if `end < start`, or if the range
    /// holds 65536 elements (the element count is a 16-bit field).
    ///
    /// # Example
    ///
    /// ```
    /// use focas_pmc::AddressRange;
    ///
    /// assert!(AddressRange::new(0, 10).is_ok());
    /// assert!(AddressRange::new(10, 0).is_err());
    /// ```
    pub fn new(start: u16, end: u16) -> Result<Self> {
        if end < start || (start == 0 && end == u16::MAX) {
            return Err(FocasError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a range covering a single address.
    pub fn single(address: u16) -> Self {
        Self {
            start: address,
            end: address,
        }
    }

    /// Returns the first address.
    pub fn start(&self) -> u16 {
        self.start
    }

    /// Returns the last address.
    pub fn end(&self) -> u16 {
        self.end
    }

    /// Returns the number of elements in the range.
    pub fn count(&self) -> u16 {
        self.end - self.start + 1
    }
}

impl std::fmt::Display for AddressRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// A single bit within a PMC byte.
///
/// # Example
///
/// ```
/// use focas_pmc::BitAddress;
///
/// let bit = BitAddress::new(7, 6).unwrap();
/// assert_eq!((bit.address(), bit.bit()), (7, 6));
/// assert!(BitAddress::new(7, 8).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBitAddress"))]
pub struct BitAddress {
    address: u16,
    bit: u8,
}

impl BitAddress {
    /// Creates a new bit address.
    ///
    /// # Errors
    ///
    /// Returns `FocasError::InvalidBitPosition` if bit > 7.
    pub fn new(address: u16, bit: u8) -> Result<Self> {
        check_bit(bit)?;
        Ok(Self { address, bit })
    }

    /// Returns the byte address.
    pub fn address(&self) -> u16 {
        self.address
    }

    /// Returns the bit position (0 = LSB).
    pub fn bit(&self) -> u8 {
        self.bit
    }
}

impl std::fmt::Display for BitAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.address, self.bit)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBitAddress {
    address: u16,
    bit: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBitAddress> for BitAddress {
    type Error = FocasError;

    fn try_from(raw: RawBitAddress) -> Result<Self> {
        BitAddress::new(raw.address, raw.bit)
    }
}

/// Rejects bit positions outside 0-7.
pub(crate) fn check_bit(bit: u8) -> Result<()> {
    if bit > 7 {
        return Err(FocasError::InvalidBitPosition { bit });
    }
    Ok(())
}

/// Header of a PMC transfer buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PmcHeader {
    /// Area type.
    pub area: AreaType,
    /// Raw data type tag.
    pub data_type: i16,
    /// Start address.
    pub start: u16,
    /// End address (inclusive).
    pub end: u16,
}

impl PmcHeader {
    /// Creates a header for the given area, data type tag and range.
    pub fn new(area: AreaType, data_type: i16, range: AddressRange) -> Self {
        Self {
            area,
            data_type,
            start: range.start(),
            end: range.end(),
        }
    }

    /// Serializes the header in host byte order.
    pub fn to_bytes(&self) -> [u8; PMC_HEADER_SIZE] {
        let mut bytes = [0u8; PMC_HEADER_SIZE];
        bytes[0..2].copy_from_slice(&self.area.code().to_ne_bytes());
        bytes[2..4].copy_from_slice(&self.data_type.to_ne_bytes());
        bytes[4..6].copy_from_slice(&self.start.to_ne_bytes());
        bytes[6..8].copy_from_slice(&self.end.to_ne_bytes());
        bytes
    }

    /// Parses a header from the start of a buffer.
    ///
    /// # Errors
    ///
    /// Returns `FocasError::InvalidBuffer` if fewer than 8 bytes are given.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < PMC_HEADER_SIZE {
            return Err(FocasError::invalid_buffer(format!(
                "header too short: expected {} bytes, got {}",
                PMC_HEADER_SIZE,
                data.len()
            )));
        }

        Ok(Self::read(data))
    }

    /// Parses the first 8 bytes; callers guarantee the length.
    pub(crate) fn read(data: &[u8]) -> Self {
        Self {
            area: AreaType(i16::from_ne_bytes([data[0], data[1]])),
            data_type: i16::from_ne_bytes([data[2], data[3]]),
            start: u16::from_ne_bytes([data[4], data[5]]),
            end: u16::from_ne_bytes([data[6], data[7]]),
        }
    }

    /// Returns the recorded range.
    ///
    /// # Errors
    ///
    /// Returns `FocasError::InvalidRange` if the recorded end precedes the start.
    pub fn range(&self) -> Result<AddressRange> {
        AddressRange::new(self.start, self.end)
    }
}
