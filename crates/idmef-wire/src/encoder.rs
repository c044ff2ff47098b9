//! Tree-to-record encoder.

use idmef_core::{registry::ScalarType, ObjectNode, Value};

use crate::constants::*;
use crate::error::WireError;
use crate::writer::Writer;

/// Encodes one message tree into one wire record.
///
/// The encoding is registry-driven and depth-first: for each node, present
/// scalars in declaration order, then present children in declaration order,
/// closed by an end marker. Absent scalars and empty lists are omitted
/// entirely; placeholder list elements encode as an empty node body so index
/// density survives a round trip.
#[derive(Default)]
pub struct Encoder {
    writer: Writer,
}

impl Encoder {
    pub fn new() -> Self {
        Self { writer: Writer::new() }
    }

    /// Encode a full record: header plus payload.
    ///
    /// The payload size is checked against the same bound the read side
    /// enforces, so every record this encoder produces can be read back.
    pub fn encode(&mut self, node: &ObjectNode) -> Result<Vec<u8>, WireError> {
        let payload = self.encode_payload(node);
        if payload.len() > MAX_PAYLOAD as usize {
            return Err(WireError::Oversized(payload.len() as u64));
        }
        let mut record = Vec::with_capacity(HDR_SIZE + payload.len());
        record.extend_from_slice(&(payload.len() as u32).to_be_bytes());
        record.extend_from_slice(&payload);
        Ok(record)
    }

    /// Encode the payload only, without the length prefix or the size bound
    /// that [`Encoder::encode`] applies.
    pub fn encode_payload(&mut self, node: &ObjectNode) -> Vec<u8> {
        self.write_node(node);
        self.writer.take()
    }

    fn write_node(&mut self, node: &ObjectNode) {
        let class = node.class();
        for (i, desc) in class.scalars.iter().enumerate() {
            let Some(value) = node.scalar(i) else { continue };
            self.writer.u8(ENTRY_SCALAR);
            self.writer.u8(desc.tag);
            match value {
                Value::Uint(n) => {
                    self.writer.u8(TYPE_UINT32);
                    self.writer.u32(4);
                    self.writer.u32(*n);
                }
                Value::Str(s) => {
                    let ty = match desc.ty {
                        ScalarType::Enum(_) => TYPE_ENUM,
                        _ => TYPE_STR,
                    };
                    self.writer.u8(ty);
                    self.writer.u32(s.len() as u32);
                    self.writer.utf8(s);
                }
            }
        }
        for (i, desc) in class.children.iter().enumerate() {
            if desc.listed {
                let items = node.list(i);
                if items.is_empty() {
                    continue;
                }
                self.writer.u8(ENTRY_LIST);
                self.writer.u8(desc.tag);
                self.writer.u32(items.len() as u32);
                for item in items {
                    self.write_node(item);
                }
            } else if let Some(child) = node.single(i) {
                self.writer.u8(ENTRY_SINGLE);
                self.writer.u8(desc.tag);
                self.write_node(child);
            }
        }
        self.writer.u8(ENTRY_END);
    }
}
