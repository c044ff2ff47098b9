//! Incremental record reads and atomic record writes over byte streams.
//!
//! The only stream contract required is `std::io`'s: read bytes or report
//! zero at end of data, write all bytes or fail. Three read outcomes are kept
//! distinct: a stream positioned exactly at end of data yields a clean
//! end-of-stream, a stream with some but not all of a record is truncated,
//! and only a complete well-formed record yields a tree.

use std::io::{self, Read, Write};

use idmef_core::ObjectNode;

use crate::constants::{HDR_SIZE, MAX_PAYLOAD};
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::WireError;

/// Read until `buf` is full or the stream ends; returns bytes read.
/// Interrupted reads are retried, as in `Read::read_exact`.
fn fill<R: Read>(stream: &mut R, buf: &mut [u8]) -> Result<usize, WireError> {
    let mut read = 0;
    while read < buf.len() {
        match stream.read(&mut buf[read..]) {
            Ok(0) => break,
            Ok(n) => read += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(read)
}

/// Read one raw record payload. `Ok(None)` is clean end-of-stream: zero bytes
/// were available at a record boundary.
pub fn read_record<R: Read>(stream: &mut R) -> Result<Option<Vec<u8>>, WireError> {
    let mut header = [0u8; HDR_SIZE];
    let got = fill(stream, &mut header)?;
    if got == 0 {
        return Ok(None);
    }
    if got < HDR_SIZE {
        return Err(WireError::Truncated);
    }
    let len = u32::from_be_bytes(header);
    if len > MAX_PAYLOAD {
        return Err(WireError::Oversized(u64::from(len)));
    }
    let mut payload = vec![0u8; len as usize];
    if fill(stream, &mut payload)? < payload.len() {
        return Err(WireError::Truncated);
    }
    Ok(Some(payload))
}

/// Read and decode one message. `Ok(None)` is clean end-of-stream.
pub fn read_message<R: Read>(stream: &mut R) -> Result<Option<ObjectNode>, WireError> {
    match read_record(stream)? {
        None => Ok(None),
        Some(payload) => Decoder::new().decode(&payload).map(Some),
    }
}

/// Byte-count view of [`read_message`]: stores the decoded tree in `out` and
/// returns the number of bytes consumed, `0` meaning end of stream. Suited to
/// `while read_message_len(..)? > 0` loops.
pub fn read_message_len<R: Read>(
    stream: &mut R,
    out: &mut Option<ObjectNode>,
) -> Result<usize, WireError> {
    match read_record(stream)? {
        None => {
            *out = None;
            Ok(0)
        }
        Some(payload) => {
            *out = Some(Decoder::new().decode(&payload)?);
            Ok(HDR_SIZE + payload.len())
        }
    }
}

/// Write one complete record. The record is built and size-checked in memory
/// first and handed to the stream as a single `write_all`, so nothing is
/// emitted for a message the read side would refuse, and no decodable partial
/// record is ever left behind on success paths.
pub fn write_message<W: Write>(stream: &mut W, node: &ObjectNode) -> Result<(), WireError> {
    let record = Encoder::new().encode(node)?;
    stream.write_all(&record)?;
    stream.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use idmef_core::registry;

    #[test]
    fn test_empty_stream_is_end_of_stream() {
        let mut stream: &[u8] = &[];
        assert!(read_message(&mut stream).unwrap().is_none());
    }

    #[test]
    fn test_partial_header_is_truncated() {
        let mut stream: &[u8] = &[0, 0];
        assert!(matches!(read_message(&mut stream), Err(WireError::Truncated)));
    }

    #[test]
    fn test_partial_payload_is_truncated() {
        let message = ObjectNode::new(registry::root());
        let mut bytes = Vec::new();
        write_message(&mut bytes, &message).unwrap();
        let mut stream = &bytes[..bytes.len() - 1];
        assert!(matches!(read_message(&mut stream), Err(WireError::Truncated)));
    }

    #[test]
    fn test_oversized_length_prefix_is_rejected() {
        let mut stream: &[u8] = &[0xff, 0xff, 0xff, 0xff];
        assert!(matches!(read_message(&mut stream), Err(WireError::Oversized(_))));
    }

    /// Fails every other read with EINTR.
    struct Interrupting<R> {
        inner: R,
        interrupt: bool,
    }

    impl<R: Read> Read for Interrupting<R> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(io::Error::from(io::ErrorKind::Interrupted));
            }
            self.inner.read(buf)
        }
    }

    #[test]
    fn test_interrupted_reads_are_retried() {
        let message = ObjectNode::new(registry::root());
        let mut bytes = Vec::new();
        write_message(&mut bytes, &message).unwrap();

        let mut stream = Interrupting { inner: &bytes[..], interrupt: false };
        assert!(read_message(&mut stream).unwrap().is_some());
        assert!(read_message(&mut stream).unwrap().is_none());
    }
}
