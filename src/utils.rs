//! Bit helpers for PMC bytes.
//!
//! PMC signals (X, Y, G, F, R, ...) are addressed as byte plus bit, so these
//! helpers work on `u8`. Bit 0 is the least significant bit.
//!
//! # Example
//!
//! ```
//! use focas_pmc::utils::{byte_to_bits, format_binary, get_bit, get_on_bits};
//!
//! let x7: u8 = 0b1100_0000;
//!
//! assert!(get_bit(x7, 6));  // chuck open
//! assert!(get_bit(x7, 7));  // chuck closed
//! assert_eq!(get_on_bits(x7), vec![6, 7]);
//! assert_eq!(byte_to_bits(x7)[7], true);
//! assert_eq!(format_binary(x7), "0b1100_0000");
//! ```

/// Gets a single bit from a PMC byte.
///
/// # Example
///
/// ```
/// use focas_pmc::utils::get_bit;
///
/// let value: u8 = 0b0000_0101;
/// assert!(get_bit(value, 0));
/// assert!(!get_bit(value, 1));
/// assert!(get_bit(value, 2));
/// ```
#[inline]
pub fn get_bit(value: u8, bit: u8) -> bool {
    (value >> bit) & 1 == 1
}

/// Returns `value` with one bit set or cleared.
///
/// # Example
///
/// ```
/// use focas_pmc::utils::set_bit;
///
/// assert_eq!(set_bit(0b0000_0000, 3, true), 0b0000_1000);
/// assert_eq!(set_bit(0b1111_1111, 0, false), 0b1111_1110);
/// ```
#[inline]
pub fn set_bit(value: u8, bit: u8, state: bool) -> u8 {
    if state {
        value | (1 << bit)
    } else {
        value & !(1 << bit)
    }
}

/// Expands a byte into its eight bits, LSB first.
pub fn byte_to_bits(value: u8) -> [bool; 8] {
    let mut bits = [false; 8];
    for (i, slot) in bits.iter_mut().enumerate() {
        *slot = get_bit(value, i as u8);
    }
    bits
}

/// Packs eight bits, LSB first, into a byte.
pub fn bits_to_byte(bits: &[bool; 8]) -> u8 {
    bits.iter()
        .enumerate()
        .fold(0, |acc, (i, &on)| set_bit(acc, i as u8, on))
}

/// Returns the positions of the bits that are ON.
///
/// # Example
///
/// ```
/// use focas_pmc::utils::get_on_bits;
///
/// assert_eq!(get_on_bits(0b0010_0101), vec![0, 2, 5]);
/// assert!(get_on_bits(0).is_empty());
/// ```
pub fn get_on_bits(value: u8) -> Vec<u8> {
    (0..8).filter(|&i| get_bit(value, i)).collect()
}

/// Formats a byte as `0bxxxx_xxxx`.
pub fn format_binary(value: u8) -> String {
    let binary = format!("{:08b}", value);
    format!("0b{}_{}", &binary[0..4], &binary[4..8])
}

/// Formats a byte as `0xXX`.
pub fn format_hex(value: u8) -> String {
    format!("0x{:02X}", value)
}
