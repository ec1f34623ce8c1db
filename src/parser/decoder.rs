//! Binary decoder for WAM trace buffers.
//!
//! Layout (all integers little-endian):
//! - 8-byte header: magic `WAM\x05`, flags, u16 sequence number, reserved
//! - records until the buffer is exhausted, each starting with a tag byte:
//!   bits 0-1 class type, bit 2 class end, bit 3 two-byte id, bits 4-7 value type

use super::record::{ClassType, Record, Value};
use crate::utils::config::{HEADER_LEN, WAM_MAGIC};
use crate::utils::error::DecodeError;
use log::debug;

const TAG_CLASS_TYPE_MASK: u8 = 0b0011;
const TAG_CLASS_END: u8 = 0b0100;
const TAG_WIDE_ID: u8 = 0b1000;

/// Parse a complete WAM buffer into its records
///
/// **Public** - main entry point for decoding
///
/// The whole buffer is decoded before anything is returned, so callers
/// never see a partial sequence.
///
/// # Arguments
/// * `bytes` - Raw trace buffer, header included
///
/// # Returns
/// Records in the order they appear in the buffer; empty for an empty
/// buffer or a header with no records
///
/// # Errors
/// * `DecodeError::TruncatedHeader` - non-empty buffer shorter than the header
/// * `DecodeError::BadMagic` - header does not start with `WAM\x05`
/// * `DecodeError::InvalidClassType` / `InvalidValueType` - reserved tag bits
/// * `DecodeError::UnexpectedEof` - a record runs past the end of the buffer
///
/// # Example
/// ```ignore
/// let bytes = decode_hex_arg("57414d0501000000502f00f15365")?;
/// let records = parse_trace(&bytes)?;
/// assert_eq!(records[0].id, 47);
/// ```
pub fn parse_trace(bytes: &[u8]) -> Result<Vec<Record>, DecodeError> {
    if bytes.is_empty() {
        debug!("Empty trace buffer, nothing to decode");
        return Ok(Vec::new());
    }

    validate_header(bytes)?;

    let mut reader = ByteReader::new(bytes);
    reader.skip(HEADER_LEN)?;

    let mut records = Vec::new();
    while !reader.is_empty() {
        records.push(read_record(&mut reader)?);
    }

    debug!(
        "Decoded {} records from {} bytes",
        records.len(),
        bytes.len()
    );
    Ok(records)
}

/// Check header length and magic
///
/// **Private** - internal helper for parse_trace
fn validate_header(bytes: &[u8]) -> Result<(), DecodeError> {
    if bytes.len() < HEADER_LEN {
        return Err(DecodeError::TruncatedHeader {
            expected: HEADER_LEN,
            actual: bytes.len(),
        });
    }

    let found = &bytes[..WAM_MAGIC.len()];
    if found != WAM_MAGIC {
        return Err(DecodeError::BadMagic {
            expected: WAM_MAGIC.to_vec(),
            found: found.to_vec(),
        });
    }

    Ok(())
}

/// Decode one record starting at the reader's position
///
/// **Private** - internal helper for parse_trace
fn read_record(reader: &mut ByteReader<'_>) -> Result<Record, DecodeError> {
    let start = reader.offset();
    let tag = reader.read_u8()?;

    let class_tag = tag & TAG_CLASS_TYPE_MASK;
    let class_type =
        ClassType::from_tag(class_tag).ok_or(DecodeError::InvalidClassType {
            offset: start,
            class_type: class_tag,
        })?;

    let id_width = if tag & TAG_WIDE_ID != 0 { 2 } else { 1 };
    let id = reader.read_uint(id_width)? as i32;

    let value = read_value(reader, tag >> 4, start)?;

    Ok(Record {
        class_type,
        id,
        value,
        is_class_end: tag & TAG_CLASS_END != 0,
    })
}

/// Decode the value payload for a value type nibble
///
/// **Private** - internal helper for read_record
fn read_value(
    reader: &mut ByteReader<'_>,
    value_type: u8,
    record_offset: usize,
) -> Result<Value, DecodeError> {
    let value = match value_type {
        0 => Value::Absent,
        1 => Value::Int32(0),
        2 => Value::Int32(1),
        3 => Value::Int8(reader.read_u8()? as i8),
        4 => Value::Int16(reader.read_uint(2)? as u16 as i16),
        5 => Value::Int32(reader.read_uint(4)? as u32 as i32),
        6 => Value::Int64(reader.read_uint(8)? as i64),
        7 => Value::Float64(f64::from_bits(reader.read_uint(8)?)),
        8..=10 => {
            let prefix_width = match value_type {
                8 => 1,
                9 => 2,
                _ => 4,
            };
            let len = reader.read_uint(prefix_width)? as usize;
            let bytes = reader.read_n(len)?;
            Value::Text(String::from_utf8_lossy(bytes).into_owned())
        }
        _ => {
            return Err(DecodeError::InvalidValueType {
                offset: record_offset,
                value_type,
            })
        }
    };
    Ok(value)
}

/// Cursor over a borrowed byte buffer
#[derive(Debug)]
pub(crate) struct ByteReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Take the next `n` bytes
    pub fn read_n(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        if self.remaining() < n {
            return Err(DecodeError::UnexpectedEof {
                offset: self.offset,
                needed: n,
                available: self.remaining(),
            });
        }
        let bytes = &self.data[self.offset..self.offset + n];
        self.offset += n;
        Ok(bytes)
    }

    pub fn skip(&mut self, n: usize) -> Result<(), DecodeError> {
        self.read_n(n).map(|_| ())
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.read_n(1)?[0])
    }

    /// Read an unsigned little-endian integer of `width` bytes (at most 8)
    pub fn read_uint(&mut self, width: usize) -> Result<u64, DecodeError> {
        debug_assert!(width <= 8);
        let bytes = self.read_n(width)?;
        Ok(bytes
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, b)| acc | (u64::from(*b) << (i * 8))))
    }
}
