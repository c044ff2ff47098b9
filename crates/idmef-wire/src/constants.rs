//! Wire format constants.

/// Size of the record header: one big-endian u32 payload length.
pub const HDR_SIZE: usize = 4;

/// Upper bound on a single payload. Anything larger is rejected before
/// allocation so a corrupt length prefix cannot exhaust memory.
pub const MAX_PAYLOAD: u32 = 16 * 1024 * 1024;

/// Terminates the entry sequence of one node body.
pub const ENTRY_END: u8 = 0x00;
/// A present scalar field: tag, type discriminant, length-prefixed bytes.
pub const ENTRY_SCALAR: u8 = 0x01;
/// A present single-valued child: tag, then the child's node body.
pub const ENTRY_SINGLE: u8 = 0x02;
/// A non-empty listed child: tag, element count, then each element's body.
pub const ENTRY_LIST: u8 = 0x03;

/// UTF-8 text.
pub const TYPE_STR: u8 = 0x01;
/// Big-endian unsigned 32-bit integer.
pub const TYPE_UINT32: u8 = 0x02;
/// UTF-8 enumeration label.
pub const TYPE_ENUM: u8 = 0x03;
