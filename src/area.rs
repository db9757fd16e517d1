//! PMC area codes and address notation.
//!
//! This module defines [`AreaType`], the opaque code that selects a PMC memory
//! bank, and [`PmcAddress`], the `X7.6` style text notation used on FANUC
//! ladder screens.
//!
//! # Well-known Areas
//!
//! | Letter | Code | Description |
//! |--------|-----:|-------------|
//! | G | 0 | Signals from PMC to CNC |
//! | F | 1 | Signals from CNC to PMC |
//! | Y | 2 | Outputs from PMC to machine |
//! | X | 3 | Inputs from machine to PMC |
//! | A | 4 | Message display requests |
//! | R | 5 | Internal relays |
//! | T | 6 | Timers |
//! | K | 7 | Keep relays |
//! | C | 8 | Counters |
//! | D | 9 | Data table |
//! | M | 10 | Inputs from another PMC path |
//! | N | 11 | Outputs to another PMC path |
//! | E | 12 | Extended relays |
//! | Z | 13 | System relays |
//!
//! Codes outside this table are still accepted and passed through unchanged.
//!
//! # Example
//!
//! ```
//! use focas_pmc::{AreaType, PmcAddress};
//!
//! let addr: PmcAddress = "X7.6".parse().unwrap();
//! assert_eq!(addr.area, AreaType::X);
//! assert_eq!(addr.address, 7);
//! assert_eq!(addr.bit, Some(6));
//! assert_eq!(addr.to_string(), "X7.6");
//! ```

use std::str::FromStr;

use crate::error::{FocasError, Result};
use crate::header::BitAddress;

/// PMC area code.
///
/// The value is handed to the library as-is; only [`Display`](std::fmt::Display)
/// and address parsing look at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AreaType(pub i16);

const AREA_LETTERS: [char; 14] = [
    'G', 'F', 'Y', 'X', 'A', 'R', 'T', 'K', 'C', 'D', 'M', 'N', 'E', 'Z',
];

impl AreaType {
    /// G area (PMC to CNC).
    pub const G: AreaType = AreaType(0);
    /// F area (CNC to PMC).
    pub const F: AreaType = AreaType(1);
    /// Y area (PMC to machine).
    pub const Y: AreaType = AreaType(2);
    /// X area (machine to PMC).
    pub const X: AreaType = AreaType(3);
    /// A area (message display).
    pub const A: AreaType = AreaType(4);
    /// R area (internal relay).
    pub const R: AreaType = AreaType(5);
    /// T area (timer).
    pub const T: AreaType = AreaType(6);
    /// K area (keep relay).
    pub const K: AreaType = AreaType(7);
    /// C area (counter).
    pub const C: AreaType = AreaType(8);
    /// D area (data table).
    pub const D: AreaType = AreaType(9);
    /// M area (input from other PMC path).
    pub const M: AreaType = AreaType(10);
    /// N area (output to other PMC path).
    pub const N: AreaType = AreaType(11);
    /// E area (extended relay).
    pub const E: AreaType = AreaType(12);
    /// Z area (system relay).
    pub const Z: AreaType = AreaType(13);

    /// Returns the raw area code.
    pub fn code(self) -> i16 {
        self.0
    }

    /// Returns the ladder letter for well-known areas.
    ///
    /// # Example
    ///
    /// ```
    /// use focas_pmc::AreaType;
    ///
    /// assert_eq!(AreaType::D.letter(), Some('D'));
    /// assert_eq!(AreaType(42).letter(), None);
    /// ```
    pub fn letter(self) -> Option<char> {
        usize::try_from(self.0)
            .ok()
            .and_then(|i| AREA_LETTERS.get(i).copied())
    }

    /// Looks up a well-known area by its ladder letter (case-insensitive).
    pub fn from_letter(letter: char) -> Option<AreaType> {
        let upper = letter.to_ascii_uppercase();
        AREA_LETTERS
            .iter()
            .position(|&c| c == upper)
            .map(|i| AreaType(i as i16))
    }
}

impl From<i16> for AreaType {
    fn from(code: i16) -> Self {
        AreaType(code)
    }
}

impl std::fmt::Display for AreaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.letter() {
            Some(letter) => write!(f, "{}", letter),
            None => write!(f, "area({})", self.0),
        }
    }
}

/// A PMC byte address with an optional bit, as written on ladder screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PmcAddress {
    /// Area the address belongs to.
    pub area: AreaType,
    /// Byte address within the area.
    pub address: u16,
    /// Bit within the byte (0-7), if any.
    pub bit: Option<u8>,
}

impl PmcAddress {
    /// Returns the bit selector of an `X7.6` style address.
    ///
    /// # Errors
    ///
    /// Returns `FocasError::InvalidAddress` if the address has no bit part.
    pub fn bit_address(&self) -> Result<BitAddress> {
        match self.bit {
            Some(bit) => BitAddress::new(self.address, bit),
            None => Err(FocasError::invalid_address(format!(
                "'{}' does not name a bit",
                self
            ))),
        }
    }
}

impl FromStr for PmcAddress {
    type Err = FocasError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars
            .next()
            .ok_or_else(|| FocasError::invalid_address("empty address"))?;
        let area = AreaType::from_letter(letter)
            .ok_or_else(|| FocasError::invalid_address(format!("unknown area '{}'", letter)))?;

        let rest = chars.as_str();
        let (address_part, bit_part) = match rest.split_once('.') {
            Some((address, bit)) => (address, Some(bit)),
            None => (rest, None),
        };

        let address = address_part
            .parse::<u16>()
            .map_err(|_| FocasError::invalid_address(format!("bad address number in '{}'", s)))?;

        let bit = match bit_part {
            Some(text) => {
                let bit = text.parse::<u8>().map_err(|_| {
                    FocasError::invalid_address(format!("bad bit number in '{}'", s))
                })?;
                if bit > 7 {
                    return Err(FocasError::invalid_address(format!(
                        "bit {} out of range 0-7 in '{}'",
                        bit, s
                    )));
                }
                Some(bit)
            }
            None => None,
        };

        Ok(Self { area, address, bit })
    }
}

impl std::fmt::Display for PmcAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.area, self.address)?;
        if let Some(bit) = self.bit {
            write!(f, ".{}", bit)?;
        }
        Ok(())
    }
}
