//! PMC typed-range codec.
//!
//! Converts between raw PMC transfer buffers and ordered sequences of
//! [`PmcValue`]s. A buffer is an 8-byte [`PmcHeader`] followed by `count`
//! packed elements of the data type's width, in host byte order:
//!
//! ```text
//! +--------+--------+--------+--------+-----------+-----------+-----+
//! | type_a | type_d | start  |  end   | element 0 | element 1 | ... |
//! +--------+--------+--------+--------+-----------+-----------+-----+
//!   2 B      2 B      2 B      2 B      width       width
//! ```
//!
//! All layout arithmetic for reads, bit reads and writes lives here, keyed on
//! [`DataType`].
//!
//! # Example
//!
//! ```
//! use focas_pmc::codec::{decode_range, encode_range};
//! use focas_pmc::{AddressRange, AreaType, DataType, PmcValue};
//!
//! let range = AddressRange::new(100, 101).unwrap();
//! let values = [PmcValue::Int(-5), PmcValue::Int(1200)];
//!
//! let buffer = encode_range(AreaType::D, &values, DataType::Word.tag(), range).unwrap();
//! assert_eq!(buffer.len(), 8 + 2 * 2);
//!
//! let decoded = decode_range(buffer.as_bytes(), DataType::Word.tag(), range.count()).unwrap();
//! assert_eq!(decoded, values);
//! ```

use crate::area::AreaType;
use crate::data::{DataType, PmcValue};
use crate::error::{FocasError, Result};
use crate::header::{check_bit, AddressRange, PmcHeader, PMC_HEADER_SIZE};
use crate::utils::get_bit;

/// Returns the total buffer length for `count` elements of `data_type`.
///
/// Always `8 + count * width`.
///
/// # Example
///
/// ```
/// use focas_pmc::codec::buffer_len;
/// use focas_pmc::DataType;
///
/// assert_eq!(buffer_len(DataType::Byte, 1), 9);
/// assert_eq!(buffer_len(DataType::Float64, 2), 24);
/// ```
pub fn buffer_len(data_type: DataType, count: u16) -> usize {
    PMC_HEADER_SIZE + count as usize * data_type.width()
}

/// Returns the buffer length as the 16-bit value the library expects.
///
/// # Errors
///
/// Returns `FocasError::RangeTooLarge` if the length does not fit in 16 bits.
pub fn wire_len(data_type: DataType, count: u16) -> Result<u16> {
    u16::try_from(buffer_len(data_type, count)).map_err(|_| FocasError::RangeTooLarge {
        data_type: data_type.name(),
        count: count as usize,
    })
}

/// An owned PMC transfer buffer.
///
/// Built fresh for each transfer and dropped afterwards; it is never shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PmcBuffer {
    bytes: Vec<u8>,
}

impl PmcBuffer {
    /// Wraps raw bytes returned by the library.
    ///
    /// # Errors
    ///
    /// Returns `FocasError::InvalidBuffer` if the bytes are shorter than a header.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        PmcHeader::from_bytes(&bytes)?;
        Ok(Self { bytes })
    }

    /// Returns the parsed header.
    pub fn header(&self) -> PmcHeader {
        // Length is checked on construction.
        PmcHeader::read(&self.bytes)
    }

    /// Returns the element bytes following the header.
    pub fn payload(&self) -> &[u8] {
        &self.bytes[PMC_HEADER_SIZE..]
    }

    /// Returns the full buffer including the header.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the buffer, returning the raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Returns the total length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns whether the buffer is empty (never true for a valid buffer).
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for PmcBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Checks that a raw buffer holds exactly `count` elements of `data_type`
/// and that its header agrees.
fn check_layout(buffer: &[u8], data_type: DataType, count: u16) -> Result<PmcHeader> {
    let expected = buffer_len(data_type, count);
    if buffer.len() != expected {
        return Err(FocasError::invalid_buffer(format!(
            "expected {} bytes for {} {} elements, got {}",
            expected,
            count,
            data_type,
            buffer.len()
        )));
    }

    let header = PmcHeader::from_bytes(buffer)?;
    if header.data_type != data_type.tag() {
        return Err(FocasError::invalid_buffer(format!(
            "header data type {} does not match {}",
            header.data_type, data_type
        )));
    }
    let recorded = header
        .range()
        .map_err(|_| FocasError::invalid_buffer("header end address precedes start"))?
        .count();
    if recorded != count {
        return Err(FocasError::invalid_buffer(format!(
            "header records {} elements, expected {}",
            recorded, count
        )));
    }

    Ok(header)
}

fn decode_element(data_type: DataType, raw: &[u8]) -> PmcValue {
    match data_type {
        DataType::Byte => PmcValue::Int(raw[0] as i64),
        DataType::Word => PmcValue::Int(i16::from_ne_bytes([raw[0], raw[1]]) as i64),
        DataType::Long => {
            PmcValue::Int(i32::from_ne_bytes([raw[0], raw[1], raw[2], raw[3]]) as i64)
        }
        DataType::Float32 => {
            PmcValue::Float(f32::from_ne_bytes([raw[0], raw[1], raw[2], raw[3]]) as f64)
        }
        DataType::Float64 => {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(raw);
            PmcValue::Float(f64::from_ne_bytes(bytes))
        }
    }
}

/// Decodes `count` elements from a raw PMC buffer.
///
/// Integers are widened to [`PmcValue::Int`]; bytes read as 0-255. Single
/// precision floats are widened to [`PmcValue::Float`].
///
/// # Errors
///
/// Returns an error if:
/// - `data_type` is not a valid tag (`InvalidDataType`, checked first)
/// - The buffer length or header does not match (`InvalidBuffer`)
///
/// # Example
///
/// ```
/// use focas_pmc::codec::decode_range;
/// use focas_pmc::{AddressRange, AreaType, DataType, PmcHeader, PmcValue};
///
/// let range = AddressRange::new(0, 1).unwrap();
/// let header = PmcHeader::new(AreaType::D, DataType::Float64.tag(), range);
/// let mut buffer = header.to_bytes().to_vec();
/// buffer.extend_from_slice(&1.5f64.to_ne_bytes());
/// buffer.extend_from_slice(&(-2.25f64).to_ne_bytes());
///
/// let values = decode_range(&buffer, DataType::Float64.tag(), 2).unwrap();
/// assert_eq!(values, vec![PmcValue::Float(1.5), PmcValue::Float(-2.25)]);
/// ```
pub fn decode_range(buffer: &[u8], data_type: i16, count: u16) -> Result<Vec<PmcValue>> {
    let data_type = DataType::from_tag(data_type)?;
    check_layout(buffer, data_type, count)?;

    Ok(buffer[PMC_HEADER_SIZE..]
        .chunks_exact(data_type.width())
        .map(|raw| decode_element(data_type, raw))
        .collect())
}

/// Extracts one bit from a single-byte PMC buffer.
///
/// # Errors
///
/// Returns an error if:
/// - `bit` > 7 (`InvalidBitPosition`, checked first)
/// - The buffer is not a one-element byte buffer (`InvalidBuffer`)
///
/// # Example
///
/// ```
/// use focas_pmc::codec::decode_bit;
/// use focas_pmc::{AddressRange, AreaType, DataType, PmcHeader};
///
/// let header = PmcHeader::new(AreaType::X, DataType::Byte.tag(), AddressRange::single(7));
/// let mut buffer = header.to_bytes().to_vec();
/// buffer.push(0b0000_0101);
///
/// assert!(decode_bit(&buffer, 0).unwrap());
/// assert!(!decode_bit(&buffer, 1).unwrap());
/// assert!(decode_bit(&buffer, 2).unwrap());
/// ```
pub fn decode_bit(buffer: &[u8], bit: u8) -> Result<bool> {
    check_bit(bit)?;
    check_layout(buffer, DataType::Byte, 1)?;
    Ok(get_bit(buffer[PMC_HEADER_SIZE], bit))
}

/// An element narrowed to its wire type.
#[derive(Debug, Clone, Copy)]
enum Element {
    Byte(u8),
    Word(i16),
    Long(i32),
    Float32(f32),
    Float64(f64),
}

impl Element {
    fn write(self, out: &mut [u8]) {
        match self {
            Element::Byte(v) => out.copy_from_slice(&[v]),
            Element::Word(v) => out.copy_from_slice(&v.to_ne_bytes()),
            Element::Long(v) => out.copy_from_slice(&v.to_ne_bytes()),
            Element::Float32(v) => out.copy_from_slice(&v.to_ne_bytes()),
            Element::Float64(v) => out.copy_from_slice(&v.to_ne_bytes()),
        }
    }
}

fn narrow(data_type: DataType, index: usize, value: PmcValue) -> Result<Element> {
    if let PmcValue::Float(f) = value {
        if f.is_nan() {
            return Err(FocasError::NotNumeric { index });
        }
    }

    let (min, max) = match data_type.integer_bounds() {
        Some(bounds) => bounds,
        None if data_type == DataType::Float32 => {
            return Ok(Element::Float32(value.as_f64() as f32))
        }
        None => return Ok(Element::Float64(value.as_f64())),
    };

    let int = match value {
        PmcValue::Int(v) => v,
        PmcValue::Float(f) => {
            if !f.is_finite() || f.fract() != 0.0 {
                return Err(FocasError::NotIntegral { index });
            }
            // saturates beyond i64; the bounds check below rejects it
            f as i64
        }
    };

    if int < min || int > max {
        return Err(FocasError::value_out_of_range(index, int, min, max));
    }

    Ok(match data_type {
        DataType::Byte => Element::Byte(int as u8),
        DataType::Word => Element::Word(int as i16),
        _ => Element::Long(int as i32),
    })
}

/// Encodes values into a PMC buffer ready for a range write.
///
/// Every value is validated before the buffer is allocated, so a failed call
/// never produces a partially written buffer.
///
/// # Errors
///
/// Returns an error if, in this order:
/// - `data_type` is not a valid tag (`InvalidDataType`)
/// - `values.len()` differs from `range.count()` (`RangeSizeMismatch`)
/// - A float value is NaN (`NotNumeric`)
/// - A float value for an integer type is fractional or infinite (`NotIntegral`)
/// - An integer, or an integral float, does not fit the type
///   (`ValueOutOfRange`; floats beyond `i64` report the saturated value)
///
/// # Example
///
/// ```
/// use focas_pmc::codec::encode_range;
/// use focas_pmc::{AddressRange, AreaType, DataType, FocasError, PmcValue};
///
/// let range = AddressRange::new(0, 2).unwrap();
/// let values = [PmcValue::Int(10), PmcValue::Int(20), PmcValue::Int(300)];
///
/// let err = encode_range(AreaType::Y, &values, DataType::Byte.tag(), range).unwrap_err();
/// assert_eq!(err, FocasError::ValueOutOfRange { index: 2, value: 300, min: 0, max: 255 });
/// ```
pub fn encode_range(
    area: AreaType,
    values: &[PmcValue],
    data_type: i16,
    range: AddressRange,
) -> Result<PmcBuffer> {
    let data_type = DataType::from_tag(data_type)?;

    let count = range.count() as usize;
    if values.len() != count {
        return Err(FocasError::range_size_mismatch(count, values.len()));
    }

    let elements = values
        .iter()
        .enumerate()
        .map(|(index, &value)| narrow(data_type, index, value))
        .collect::<Result<Vec<_>>>()?;

    let width = data_type.width();
    let mut bytes = vec![0u8; buffer_len(data_type, range.count())];
    bytes[..PMC_HEADER_SIZE]
        .copy_from_slice(&PmcHeader::new(area, data_type.tag(), range).to_bytes());
    for (element, out) in elements
        .into_iter()
        .zip(bytes[PMC_HEADER_SIZE..].chunks_exact_mut(width))
    {
        element.write(out);
    }

    Ok(PmcBuffer { bytes })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Vec<PmcValue> {
        values.iter().map(|&v| PmcValue::Int(v)).collect()
    }

    fn raw_buffer(
        area: AreaType,
        data_type: DataType,
        range: AddressRange,
        payload: &[u8],
    ) -> Vec<u8> {
        let mut buffer = PmcHeader::new(area, data_type.tag(), range).to_bytes().to_vec();
        buffer.extend_from_slice(payload);
        buffer
    }

    #[test]
    fn test_buffer_len_formula() {
        for data_type in DataType::ALL {
            for count in [1u16, 2, 3, 10, 999] {
                assert_eq!(
                    buffer_len(data_type, count),
                    8 + count as usize * data_type.width()
                );
            }
        }
    }

    #[test]
    fn test_wire_len_limits() {
        assert_eq!(wire_len(DataType::Byte, 100).unwrap(), 108);
        assert_eq!(wire_len(DataType::Float64, 8190).unwrap(), 65528);
        assert_eq!(
            wire_len(DataType::Float64, 8191),
            Err(FocasError::RangeTooLarge {
                data_type: "double",
                count: 8191
            })
        );
        assert!(wire_len(DataType::Byte, u16::MAX).is_err());
    }

    #[test]
    fn test_roundtrip_per_type() {
        let range = AddressRange::new(20, 23).unwrap();
        let cases = [
            (DataType::Byte, ints(&[0, 1, 128, 255])),
            (DataType::Word, ints(&[-32768, -1, 0, 32767])),
            (DataType::Long, ints(&[i32::MIN as i64, -7, 0, i32::MAX as i64])),
            (
                DataType::Float32,
                vec![
                    PmcValue::Float(0.5),
                    PmcValue::Float(-1.25),
                    PmcValue::Float(1024.0),
                    PmcValue::Float(0.0),
                ],
            ),
            (
                DataType::Float64,
                vec![
                    PmcValue::Float(3.141592653589793),
                    PmcValue::Float(-1e300),
                    PmcValue::Float(f64::INFINITY),
                    PmcValue::Float(0.1),
                ],
            ),
        ];

        for (data_type, values) in cases {
            let buffer = encode_range(AreaType::D, &values, data_type.tag(), range).unwrap();
            let decoded = decode_range(buffer.as_bytes(), data_type.tag(), range.count()).unwrap();
            assert_eq!(decoded, values, "{}", data_type);
        }
    }

    #[test]
    fn test_float32_widening() {
        let range = AddressRange::single(0);
        let buffer = raw_buffer(AreaType::D, DataType::Float32, range, &0.1f32.to_ne_bytes());
        let values = decode_range(&buffer, DataType::Float32.tag(), 1).unwrap();
        assert_eq!(values, vec![PmcValue::Float(0.1f32 as f64)]);
    }

    #[test]
    fn test_decode_float64_scenario() {
        let range = AddressRange::new(0, 1).unwrap();
        let mut payload = 1.5f64.to_ne_bytes().to_vec();
        payload.extend_from_slice(&(-2.25f64).to_ne_bytes());
        let buffer = raw_buffer(AreaType::D, DataType::Float64, range, &payload);
        assert_eq!(buffer.len(), 24);

        let values = decode_range(&buffer, 5, 2).unwrap();
        assert_eq!(values, vec![PmcValue::Float(1.5), PmcValue::Float(-2.25)]);
    }

    #[test]
    fn test_decode_byte_is_unsigned() {
        let range = AddressRange::new(0, 1).unwrap();
        let buffer = raw_buffer(AreaType::X, DataType::Byte, range, &[0xFF, 0x80]);
        let values = decode_range(&buffer, 0, 2).unwrap();
        assert_eq!(values, ints(&[255, 128]));
    }

    #[test]
    fn test_invalid_data_type() {
        let range = AddressRange::single(0);
        let buffer = raw_buffer(AreaType::D, DataType::Byte, range, &[0]);
        for tag in [3, 6, -1] {
            assert_eq!(
                decode_range(&buffer, tag, 1),
                Err(FocasError::InvalidDataType { tag })
            );
            assert_eq!(
                encode_range(AreaType::D, &ints(&[0]), tag, range),
                Err(FocasError::InvalidDataType { tag })
            );
        }
    }

    #[test]
    fn test_invalid_data_type_before_size_check() {
        let range = AddressRange::new(0, 2).unwrap();
        assert_eq!(
            encode_range(AreaType::D, &[], 3, range),
            Err(FocasError::InvalidDataType { tag: 3 })
        );
        assert_eq!(
            decode_range(&[], 3, 3),
            Err(FocasError::InvalidDataType { tag: 3 })
        );
    }

    #[test]
    fn test_decode_rejects_bad_layout() {
        let range = AddressRange::new(0, 1).unwrap();
        let buffer = raw_buffer(AreaType::D, DataType::Word, range, &[0, 0, 0, 0]);

        // wrong length for the count
        assert!(matches!(
            decode_range(&buffer, 1, 3),
            Err(FocasError::InvalidBuffer { .. })
        ));
        // header says word, caller says byte with matching length
        assert!(matches!(
            decode_range(&buffer[..10], 0, 2),
            Err(FocasError::InvalidBuffer { .. })
        ));
        // truncated
        assert!(matches!(
            decode_range(&buffer[..4], 1, 2),
            Err(FocasError::InvalidBuffer { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_header_count_mismatch() {
        let buffer = raw_buffer(
            AreaType::D,
            DataType::Byte,
            AddressRange::new(0, 4).unwrap(),
            &[1, 2],
        );
        assert!(matches!(
            decode_range(&buffer, 0, 2),
            Err(FocasError::InvalidBuffer { .. })
        ));
    }

    #[test]
    fn test_decode_bit_scenario() {
        let range = AddressRange::single(7);
        let buffer = raw_buffer(AreaType::X, DataType::Byte, range, &[0b0000_0101]);
        assert!(decode_bit(&buffer, 0).unwrap());
        assert!(!decode_bit(&buffer, 1).unwrap());
        assert!(decode_bit(&buffer, 2).unwrap());
        for bit in 3..8 {
            assert!(!decode_bit(&buffer, bit).unwrap());
        }
    }

    #[test]
    fn test_decode_bit_invalid_position() {
        let buffer = raw_buffer(AreaType::X, DataType::Byte, AddressRange::single(7), &[0xFF]);
        assert_eq!(
            decode_bit(&buffer, 8),
            Err(FocasError::InvalidBitPosition { bit: 8 })
        );
        // bit is checked before the buffer
        assert_eq!(
            decode_bit(&[], 200),
            Err(FocasError::InvalidBitPosition { bit: 200 })
        );
    }

    #[test]
    fn test_decode_bit_rejects_word_buffer() {
        let buffer = raw_buffer(AreaType::X, DataType::Word, AddressRange::single(7), &[1, 0]);
        assert!(decode_bit(&buffer, 0).is_err());
    }

    #[test]
    fn test_encode_size_mismatch() {
        let range = AddressRange::new(0, 2).unwrap();
        assert_eq!(
            encode_range(AreaType::Y, &ints(&[1, 2]), 0, range),
            Err(FocasError::RangeSizeMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            encode_range(AreaType::Y, &ints(&[1, 2, 3, 4]), 0, range),
            Err(FocasError::RangeSizeMismatch {
                expected: 3,
                actual: 4
            })
        );
    }

    #[test]
    fn test_encode_byte_out_of_range() {
        let range = AddressRange::new(0, 2).unwrap();
        assert_eq!(
            encode_range(AreaType::Y, &ints(&[10, 20, 300]), 0, range),
            Err(FocasError::ValueOutOfRange {
                index: 2,
                value: 300,
                min: 0,
                max: 255
            })
        );
        assert_eq!(
            encode_range(AreaType::Y, &ints(&[-1, 0, 0]), 0, range),
            Err(FocasError::ValueOutOfRange {
                index: 0,
                value: -1,
                min: 0,
                max: 255
            })
        );
    }

    #[test]
    fn test_encode_fixed_width_bounds() {
        let range = AddressRange::single(0);
        assert!(encode_range(AreaType::D, &ints(&[32768]), 1, range).is_err());
        assert!(encode_range(AreaType::D, &ints(&[-32769]), 1, range).is_err());
        assert!(encode_range(AreaType::D, &ints(&[2_147_483_648]), 2, range).is_err());
        assert!(encode_range(AreaType::D, &ints(&[-2_147_483_648]), 2, range).is_ok());
    }

    #[test]
    fn test_encode_float_inputs() {
        let range = AddressRange::new(0, 1).unwrap();
        let buffer = encode_range(
            AreaType::D,
            &[PmcValue::Int(3), PmcValue::Float(0.25)],
            DataType::Float64.tag(),
            range,
        )
        .unwrap();
        let values = decode_range(buffer.as_bytes(), 5, 2).unwrap();
        assert_eq!(values, vec![PmcValue::Float(3.0), PmcValue::Float(0.25)]);

        assert_eq!(
            encode_range(
                AreaType::D,
                &[PmcValue::Float(1.0), PmcValue::Float(f64::NAN)],
                DataType::Float32.tag(),
                range
            ),
            Err(FocasError::NotNumeric { index: 1 })
        );
    }

    #[test]
    fn test_encode_integral_float_into_integer() {
        let range = AddressRange::new(0, 1).unwrap();
        let buffer = encode_range(
            AreaType::D,
            &[PmcValue::Float(42.0), PmcValue::Int(-3)],
            DataType::Word.tag(),
            range,
        )
        .unwrap();
        assert_eq!(
            decode_range(buffer.as_bytes(), 1, 2).unwrap(),
            ints(&[42, -3])
        );

        assert_eq!(
            encode_range(
                AreaType::D,
                &[PmcValue::Int(1), PmcValue::Float(1.5)],
                DataType::Long.tag(),
                range
            ),
            Err(FocasError::NotIntegral { index: 1 })
        );
        assert_eq!(
            encode_range(
                AreaType::D,
                &[PmcValue::Float(f64::INFINITY), PmcValue::Int(1)],
                DataType::Byte.tag(),
                range
            ),
            Err(FocasError::NotIntegral { index: 0 })
        );
    }

    #[test]
    fn test_encode_huge_integral_float_is_out_of_range() {
        let range = AddressRange::single(0);
        assert_eq!(
            encode_range(AreaType::Y, &[PmcValue::Float(1e10)], DataType::Byte.tag(), range),
            Err(FocasError::value_out_of_range(0, 10_000_000_000, 0, 255))
        );
        assert_eq!(
            encode_range(AreaType::Y, &[PmcValue::Float(1e19)], DataType::Byte.tag(), range),
            Err(FocasError::value_out_of_range(0, i64::MAX, 0, 255))
        );
        assert_eq!(
            encode_range(AreaType::D, &[PmcValue::Float(-1e19)], DataType::Long.tag(), range),
            Err(FocasError::value_out_of_range(
                0,
                i64::MIN,
                i32::MIN as i64,
                i32::MAX as i64
            ))
        );
    }

    #[test]
    fn test_encode_header_and_offsets() {
        let range = AddressRange::new(100, 102).unwrap();
        let buffer = encode_range(AreaType::D, &ints(&[1, -2, 3]), 2, range).unwrap();

        let header = buffer.header();
        assert_eq!(header.area, AreaType::D);
        assert_eq!(header.data_type, 2);
        assert_eq!(header.start, 100);
        assert_eq!(header.end, 102);

        let payload = buffer.payload();
        assert_eq!(payload.len(), 12);
        assert_eq!(&payload[4..8], &(-2i32).to_ne_bytes());
        assert_eq!(&payload[8..12], &3i32.to_ne_bytes());
    }

    #[test]
    #[cfg(target_endian = "little")]
    fn test_encode_wire_bytes() {
        let range = AddressRange::new(10, 11).unwrap();
        let buffer = encode_range(AreaType::Y, &ints(&[0x1234, -1]), 1, range).unwrap();
        assert_eq!(hex::encode(buffer.as_bytes()), "020001000a000b003412ffff");
    }

    #[test]
    fn test_pmc_buffer_from_bytes() {
        assert!(PmcBuffer::from_bytes(vec![0; 7]).is_err());
        let buffer = PmcBuffer::from_bytes(vec![0; 9]).unwrap();
        assert_eq!(buffer.len(), 9);
        assert_eq!(buffer.header(), PmcHeader::from_bytes(&[0; 9]).unwrap());
        assert_eq!(buffer.payload(), &[0]);
        assert_eq!(buffer.into_bytes().len(), 9);
    }
}
