//! Hex argument decoding.

use super::error::InputError;
use log::debug;

/// Decode the hex-encoded trace argument into raw bytes
///
/// Surrounding whitespace and a leading `0x`/`0X` are ignored; everything
/// else must be an even number of hex digits.
///
/// # Errors
/// * `InputError::InvalidHex` - odd length or a non-hex character
pub fn decode_hex_arg(input: &str) -> Result<Vec<u8>, InputError> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let bytes = hex::decode(digits)?;
    debug!("Decoded {} hex digits into {} bytes", digits.len(), bytes.len());
    Ok(bytes)
}
