//! Message-level API over the tree, path, and wire layers.

use std::fmt;
use std::io::{Read, Write};

use idmef_core::{registry, ObjectNode};
use idmef_path::{resolver, GetResult, PathParser};
use idmef_wire::{read_message, read_message_len, write_message};

use crate::error::IdmefError;

/// One IDMEF message, addressable by textual path expressions.
#[derive(Debug, Clone)]
pub struct IdmefMessage {
    root: ObjectNode,
}

impl Default for IdmefMessage {
    fn default() -> Self {
        Self::new()
    }
}

impl IdmefMessage {
    /// Creates an empty message.
    pub fn new() -> Self {
        Self { root: ObjectNode::new(registry::root()) }
    }

    fn from_root(root: ObjectNode) -> Self {
        Self { root }
    }

    /// Store `value` at `path`; `None` unsets the addressed field.
    pub fn set(&mut self, path: &str, value: Option<&str>) -> Result<(), IdmefError> {
        let path = PathParser::parse(path)?;
        resolver::set(&mut self.root, &path, value)?;
        Ok(())
    }

    /// Read whatever `path` addresses: a scalar value, an object, or a nested
    /// list when the path fans out. `Ok(None)` means nothing is stored there.
    pub fn get(&self, path: &str) -> Result<Option<GetResult>, IdmefError> {
        let path = PathParser::parse(path)?;
        Ok(resolver::get(&self.root, &path)?)
    }

    /// Remove whatever `path` addresses. Idempotent.
    pub fn unset(&mut self, path: &str) -> Result<(), IdmefError> {
        let path = PathParser::parse(path)?;
        resolver::unset(&mut self.root, &path)?;
        Ok(())
    }

    /// The underlying object tree.
    pub fn root(&self) -> &ObjectNode {
        &self.root
    }

    /// Append this message to `stream` as one complete wire record.
    pub fn write<W: Write>(&self, stream: &mut W) -> Result<(), IdmefError> {
        write_message(stream, &self.root)?;
        Ok(())
    }

    /// Read the next message from `stream`. `Ok(None)` is clean end of stream.
    pub fn read<R: Read>(stream: &mut R) -> Result<Option<Self>, IdmefError> {
        Ok(read_message(stream)?.map(Self::from_root))
    }

    /// Replace this message with the next one from `stream`, returning the
    /// number of bytes consumed; `0` means end of stream and leaves the
    /// message untouched.
    pub fn read_into<R: Read>(&mut self, stream: &mut R) -> Result<usize, IdmefError> {
        let mut slot = None;
        let consumed = read_message_len(stream, &mut slot)?;
        if let Some(root) = slot {
            self.root = root;
        }
        Ok(consumed)
    }
}

impl fmt::Display for IdmefMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.root.dump())
    }
}
