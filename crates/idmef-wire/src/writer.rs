//! Binary buffer writer.

/// Append-only byte buffer with big-endian primitive writes.
///
/// # Example
///
/// ```
/// use idmef_wire::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(0x01);
/// writer.u16(0x0203);
/// assert_eq!(writer.take(), [0x01, 0x02, 0x03]);
/// ```
#[derive(Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { buf: Vec::with_capacity(capacity) }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.buf.push(val);
    }

    #[inline]
    pub fn u16(&mut self, val: u16) {
        self.buf.extend_from_slice(&val.to_be_bytes());
    }

    #[inline]
    pub fn u32(&mut self, val: u32) {
        self.buf.extend_from_slice(&val.to_be_bytes());
    }

    #[inline]
    pub fn bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes the UTF-8 bytes of `text`, without a length prefix.
    #[inline]
    pub fn utf8(&mut self, text: &str) {
        self.buf.extend_from_slice(text.as_bytes());
    }

    /// Returns the accumulated bytes, leaving the writer empty and reusable.
    pub fn take(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_big_endian_order() {
        let mut writer = Writer::new();
        writer.u32(0x01020304);
        assert_eq!(writer.take(), vec![0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_take_resets() {
        let mut writer = Writer::new();
        writer.u8(1);
        assert_eq!(writer.take(), vec![1]);
        assert!(writer.is_empty());
        writer.u8(2);
        assert_eq!(writer.take(), vec![2]);
    }

    #[test]
    fn test_utf8_and_bytes() {
        let mut writer = Writer::new();
        writer.utf8("ab");
        writer.bytes(&[0xff]);
        assert_eq!(writer.take(), vec![b'a', b'b', 0xff]);
    }
}
