//! Configuration and constants for the CLI.

/// Magic prefix of every WAM buffer ("WAM" + format version 5)
pub const WAM_MAGIC: [u8; 4] = [0x57, 0x41, 0x4d, 0x05];

/// Total header length: magic, flags byte, u16 sequence number, reserved byte
pub const HEADER_LEN: usize = 8;

/// Flags byte written by the encoder after the magic
pub const HEADER_FLAGS: u8 = 1;

/// Class id of the implicit root ("Wild") class
pub const ROOT_CLASS_ID: i32 = 0;

/// Root field carrying the event time as Unix epoch seconds
pub const TIMESTAMP_FIELD_ID: i32 = 47;

/// Calendar format used when annotating the timestamp field (always UTC)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Longest text value the encoder accepts
pub const MAX_TEXT_LEN: usize = 0x400;

/// Suffix appended to the line of a record that closes a class
pub const CHUNK_END_MARKER: &str = "<- chunk end";

/// Version of the schema JSON layout this build understands
pub const SCHEMA_VERSION: u32 = 1;

/// Environment variable that points at a replacement schema file
pub const SCHEMA_ENV_VAR: &str = "WAM_SCHEMA";
