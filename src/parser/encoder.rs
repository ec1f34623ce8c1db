//! Encoder producing WAM trace buffers.
//!
//! Mirrors the decoder: every buffer `TraceBuilder` produces decodes back
//! into the records that went in, except that integers are written in
//! their narrowest wire form and so decode as the narrowest kind holding
//! the value (`0` and `1` always come back as `Int32`).

use super::record::{ClassType, Record, Value};
use crate::utils::config::{HEADER_FLAGS, MAX_TEXT_LEN, WAM_MAGIC};
use crate::utils::error::EncodeError;

const TAG_CLASS_END: u8 = 0b0100;
const TAG_WIDE_ID: u8 = 0b1000;

/// Encode a single record
///
/// # Errors
/// * `EncodeError::IdOutOfRange` - id negative or wider than 16 bits
/// * `EncodeError::TextTooLong` - text value above `MAX_TEXT_LEN` bytes
pub fn encode_record(record: &Record) -> Result<Vec<u8>, EncodeError> {
    let mut out = vec![0u8]; // tag placeholder

    let id = u16::try_from(record.id).map_err(|_| EncodeError::IdOutOfRange(record.id))?;
    let wide_id = id > 0xff;
    if wide_id {
        out.extend_from_slice(&id.to_le_bytes());
    } else {
        out.push(id as u8);
    }

    let value_type = put_value(&mut out, &record.value)?;

    let mut tag = record.class_type.tag() | (value_type << 4);
    if wide_id {
        tag |= TAG_WIDE_ID;
    }
    if record.is_class_end {
        tag |= TAG_CLASS_END;
    }
    out[0] = tag;

    Ok(out)
}

/// Append the value payload and return its value type nibble
///
/// **Private** - internal helper for encode_record
fn put_value(out: &mut Vec<u8>, value: &Value) -> Result<u8, EncodeError> {
    let value_type = match value {
        Value::Absent => 0,
        Value::Float64(v) => {
            out.extend_from_slice(&v.to_bits().to_le_bytes());
            7
        }
        Value::Text(s) => {
            let len = s.len();
            if len > MAX_TEXT_LEN {
                return Err(EncodeError::TextTooLong {
                    len,
                    limit: MAX_TEXT_LEN,
                });
            }
            let value_type = match put_length(out, len as u32) {
                1 => 8,
                2 => 9,
                _ => 10,
            };
            out.extend_from_slice(s.as_bytes());
            value_type
        }
        // Integer kinds; as_i64 covers every remaining variant
        other => put_number(out, other.as_i64().unwrap_or_default()),
    };
    Ok(value_type)
}

/// Narrowest integer encoding; 0 and 1 carry no payload
///
/// **Private** - internal helper for put_value
fn put_number(out: &mut Vec<u8>, v: i64) -> u8 {
    match v {
        0 => 1,
        1 => 2,
        _ => {
            if let Ok(b) = i8::try_from(v) {
                out.extend_from_slice(&b.to_le_bytes());
                3
            } else if let Ok(h) = i16::try_from(v) {
                out.extend_from_slice(&h.to_le_bytes());
                4
            } else if let Ok(w) = i32::try_from(v) {
                out.extend_from_slice(&w.to_le_bytes());
                5
            } else {
                out.extend_from_slice(&v.to_le_bytes());
                6
            }
        }
    }
}

/// Narrowest unsigned length prefix; returns its width in bytes
///
/// **Private** - internal helper for put_value
fn put_length(out: &mut Vec<u8>, len: u32) -> usize {
    if let Ok(b) = u8::try_from(len) {
        out.push(b);
        1
    } else if let Ok(h) = u16::try_from(len) {
        out.extend_from_slice(&h.to_le_bytes());
        2
    } else {
        out.extend_from_slice(&len.to_le_bytes());
        4
    }
}

/// Run of root-level records
#[derive(Debug, Clone, Default)]
pub struct WildChunk {
    pub records: Vec<Record>,
}

impl WildChunk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, id: i32, value: impl Into<Value>) -> &mut Self {
        self.records.push(Record::wild(id, value));
        self
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        let mut out = Vec::new();
        for record in &self.records {
            out.extend(encode_record(record)?);
        }
        Ok(out)
    }
}

/// One class: a begin record followed by its fields
///
/// The last record written carries the class-end flag.
#[derive(Debug, Clone)]
pub struct ClassChunk {
    pub id: i32,
    pub value: Value,
    pub records: Vec<Record>,
}

impl ClassChunk {
    pub fn new(id: i32, value: impl Into<Value>) -> Self {
        Self {
            id,
            value: value.into(),
            records: Vec::new(),
        }
    }

    pub fn append(&mut self, id: i32, value: impl Into<Value>) -> &mut Self {
        self.records.push(Record::data(id, value));
        self
    }

    /// Records in wire order, with the class-end flag applied
    pub fn to_records(&self) -> Vec<Record> {
        let mut records = Vec::with_capacity(self.records.len() + 1);
        records.push(Record::begin(self.id, self.value.clone()));
        records.extend(self.records.iter().cloned());
        if let Some(last) = records.last_mut() {
            last.is_class_end = true;
        }
        records
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        let mut out = Vec::new();
        for record in &self.to_records() {
            out.extend(encode_record(record)?);
        }
        Ok(out)
    }
}

/// Assembles a complete trace buffer, header included
#[derive(Debug, Clone)]
pub struct TraceBuilder {
    buf: Vec<u8>,
}

impl TraceBuilder {
    pub fn new(sequence: u16) -> Self {
        let mut buf = Vec::with_capacity(64);
        buf.extend_from_slice(&WAM_MAGIC);
        buf.push(HEADER_FLAGS);
        buf.extend_from_slice(&sequence.to_le_bytes());
        buf.push(0);
        Self { buf }
    }

    pub fn wild(&mut self, chunk: &WildChunk) -> Result<&mut Self, EncodeError> {
        self.buf.extend(chunk.to_bytes()?);
        Ok(self)
    }

    pub fn class(&mut self, chunk: &ClassChunk) -> Result<&mut Self, EncodeError> {
        self.buf.extend(chunk.to_bytes()?);
        Ok(self)
    }

    /// Append an arbitrary record, bypassing the chunk helpers
    pub fn record(&mut self, record: &Record) -> Result<&mut Self, EncodeError> {
        self.buf.extend(encode_record(record)?);
        Ok(self)
    }

    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}

impl Default for TraceBuilder {
    fn default() -> Self {
        Self::new(0)
    }
}
