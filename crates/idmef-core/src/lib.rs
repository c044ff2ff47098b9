//! Core IDMEF data model.
//!
//! This crate holds the pieces every other layer builds on: the static class
//! registry describing which fields and sub-objects each IDMEF class carries,
//! the typed scalar [`Value`], and the [`ObjectNode`] tree that represents one
//! message in memory.
//!
//! # Example
//!
//! ```
//! use idmef_core::{registry, ObjectNode, Value};
//!
//! let message = ObjectNode::new(registry::root());
//! assert_eq!(message.class().name, "message");
//! assert!(message.is_empty());
//! ```

pub mod registry;

mod value;
pub use value::{CoerceError, Value};

mod tree;
pub use tree::ObjectNode;
