//! Binary wire form of IDMEF messages.
//!
//! One message is one record: a 4-byte big-endian payload length followed by
//! the payload, a depth-first registry-driven encoding of the object tree.
//! Records are self-delimiting, so any byte stream carrying them can be read
//! incrementally, message by message, with a clean distinction between end of
//! stream and a short read.
//!
//! # Example
//!
//! ```
//! use idmef_core::{registry, ObjectNode};
//! use idmef_wire::{read_message, write_message};
//!
//! let message = ObjectNode::new(registry::root());
//! let mut stream = Vec::new();
//! write_message(&mut stream, &message).unwrap();
//!
//! let mut cursor = &stream[..];
//! assert!(read_message(&mut cursor).unwrap().is_some());
//! assert!(read_message(&mut cursor).unwrap().is_none()); // end of stream
//! ```

pub mod constants;

mod error;
pub use error::WireError;

mod writer;
pub use writer::Writer;

mod encoder;
pub use encoder::Encoder;

mod decoder;
pub use decoder::Decoder;

mod stream;
pub use stream::{read_message, read_message_len, read_record, write_message};
