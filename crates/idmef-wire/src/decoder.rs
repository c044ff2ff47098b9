//! Record-to-tree decoder.

use idmef_core::{registry, registry::ScalarType, ObjectNode, Value};

use crate::constants::*;
use crate::error::WireError;

/// Decodes one record payload back into a message tree.
///
/// Decoding is strict: an unknown entry kind, an unknown tag, a type
/// discriminant that contradicts the registry, an undeclared enumeration
/// label, or bytes left over after the root body are all corruption, never
/// silently skipped. Anything else would mask schema drift between peers.
#[derive(Default)]
pub struct Decoder {
    data: Vec<u8>,
    x: usize,
}

impl Decoder {
    pub fn new() -> Self {
        Self { data: Vec::new(), x: 0 }
    }

    /// Decode one payload into a freshly allocated tree.
    pub fn decode(&mut self, payload: &[u8]) -> Result<ObjectNode, WireError> {
        self.data = payload.to_vec();
        self.x = 0;
        let mut root = ObjectNode::new(registry::root());
        self.read_node(&mut root)?;
        if self.x != self.data.len() {
            return Err(WireError::Corrupt("trailing bytes after message body".into()));
        }
        Ok(root)
    }

    #[inline]
    fn check(&self, n: usize) -> Result<(), WireError> {
        if self.x + n > self.data.len() {
            Err(WireError::Corrupt("payload ends mid-entry".into()))
        } else {
            Ok(())
        }
    }

    #[inline]
    fn u8(&mut self) -> Result<u8, WireError> {
        self.check(1)?;
        let v = self.data[self.x];
        self.x += 1;
        Ok(v)
    }

    #[inline]
    fn u32(&mut self) -> Result<u32, WireError> {
        self.check(4)?;
        let v = u32::from_be_bytes([
            self.data[self.x],
            self.data[self.x + 1],
            self.data[self.x + 2],
            self.data[self.x + 3],
        ]);
        self.x += 4;
        Ok(v)
    }

    fn bytes(&mut self, n: usize) -> Result<Vec<u8>, WireError> {
        self.check(n)?;
        let v = self.data[self.x..self.x + n].to_vec();
        self.x += n;
        Ok(v)
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.x
    }

    fn read_node(&mut self, node: &mut ObjectNode) -> Result<(), WireError> {
        loop {
            match self.u8()? {
                ENTRY_END => return Ok(()),
                ENTRY_SCALAR => self.read_scalar(node)?,
                ENTRY_SINGLE => {
                    let tag = self.u8()?;
                    let Some((pos, desc)) = node.class().child_by_tag(tag) else {
                        return Err(WireError::Corrupt(format!(
                            "unknown child tag {tag} in class '{}'",
                            node.class().name
                        )));
                    };
                    if desc.listed {
                        return Err(WireError::Corrupt(format!(
                            "single-valued entry for listed child '{}'",
                            desc.name
                        )));
                    }
                    self.read_node(node.single_mut_or_create(pos))?;
                }
                ENTRY_LIST => {
                    let tag = self.u8()?;
                    let Some((pos, desc)) = node.class().child_by_tag(tag) else {
                        return Err(WireError::Corrupt(format!(
                            "unknown child tag {tag} in class '{}'",
                            node.class().name
                        )));
                    };
                    if !desc.listed {
                        return Err(WireError::Corrupt(format!(
                            "list entry for single-valued child '{}'",
                            desc.name
                        )));
                    }
                    let count = self.u32()? as usize;
                    // Every element body is at least one end marker.
                    if count > self.remaining() {
                        return Err(WireError::Corrupt("list count overruns payload".into()));
                    }
                    for _ in 0..count {
                        self.read_node(node.list_push(pos))?;
                    }
                }
                kind => {
                    return Err(WireError::Corrupt(format!("unknown entry kind 0x{kind:02x}")))
                }
            }
        }
    }

    fn read_scalar(&mut self, node: &mut ObjectNode) -> Result<(), WireError> {
        let tag = self.u8()?;
        let Some((pos, desc)) = node.class().scalar_by_tag(tag) else {
            return Err(WireError::Corrupt(format!(
                "unknown scalar tag {tag} in class '{}'",
                node.class().name
            )));
        };
        let ty = self.u8()?;
        let len = self.u32()? as usize;
        let bytes = self.bytes(len)?;
        let value = match (ty, desc.ty) {
            (TYPE_UINT32, ScalarType::Uint32) => {
                let Ok(raw) = <[u8; 4]>::try_from(bytes.as_slice()) else {
                    return Err(WireError::Corrupt(format!(
                        "uint32 field '{}' with {len}-byte value",
                        desc.name
                    )));
                };
                Value::Uint(u32::from_be_bytes(raw))
            }
            (TYPE_STR, ScalarType::Str) => Value::Str(utf8(bytes, desc.name)?),
            (TYPE_ENUM, ScalarType::Enum(labels)) => {
                let label = utf8(bytes, desc.name)?;
                if !labels.contains(&label.as_str()) {
                    return Err(WireError::Corrupt(format!(
                        "undeclared label '{label}' for enum field '{}'",
                        desc.name
                    )));
                }
                Value::Str(label)
            }
            _ => {
                return Err(WireError::Corrupt(format!(
                    "type discriminant 0x{ty:02x} contradicts the registry for field '{}'",
                    desc.name
                )))
            }
        };
        node.set_scalar(pos, value);
        Ok(())
    }
}

fn utf8(bytes: Vec<u8>, field: &str) -> Result<String, WireError> {
    String::from_utf8(bytes)
        .map_err(|_| WireError::Corrupt(format!("field '{field}' is not valid utf-8")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::Encoder;

    #[test]
    fn test_decode_empty_payload_is_corrupt() {
        // A payload must contain at least the root end marker.
        assert!(matches!(
            Decoder::new().decode(&[]),
            Err(WireError::Corrupt(_))
        ));
    }

    #[test]
    fn test_decode_end_marker_only() {
        let root = Decoder::new().decode(&[ENTRY_END]).unwrap();
        assert!(root.is_empty());
    }

    #[test]
    fn test_unknown_entry_kind_is_corrupt() {
        let err = Decoder::new().decode(&[0x7f, ENTRY_END]).unwrap_err();
        assert!(matches!(err, WireError::Corrupt(_)));
    }

    #[test]
    fn test_trailing_bytes_are_corrupt() {
        let err = Decoder::new().decode(&[ENTRY_END, 0x00]).unwrap_err();
        assert!(matches!(err, WireError::Corrupt(_)));
    }

    #[test]
    fn test_unknown_scalar_tag_is_corrupt() {
        // message class has a single scalar (tag 0); tag 9 does not exist.
        let payload = [ENTRY_SCALAR, 9, TYPE_STR, 0, 0, 0, 0, ENTRY_END];
        let err = Decoder::new().decode(&payload).unwrap_err();
        assert!(matches!(err, WireError::Corrupt(_)));
    }

    #[test]
    fn test_decoder_is_reusable() {
        let message = ObjectNode::new(registry::root());
        let payload = Encoder::new().encode_payload(&message);
        let mut decoder = Decoder::new();
        assert!(decoder.decode(&payload).unwrap().is_empty());
        assert!(decoder.decode(&payload).unwrap().is_empty());
    }
}
