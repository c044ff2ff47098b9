//! IDMEF path expressions.
//!
//! A path addresses one field or sub-object inside an IDMEF message tree:
//! dotted steps, each optionally indexed, e.g.
//! `alert.source(1).node.address(2).address`. Indices apply to listed
//! children only; `(*)` fans out over every present element of a list and is
//! valid in reads, `(>>)` appends a fresh element during writes.
//!
//! # Example
//!
//! ```
//! use idmef_core::{registry, ObjectNode};
//! use idmef_path::{resolver, PathParser};
//!
//! let mut message = ObjectNode::new(registry::root());
//! let path = PathParser::parse("alert.classification.text").unwrap();
//! resolver::set(&mut message, &path, Some("My Message")).unwrap();
//!
//! let got = resolver::get(&message, &path).unwrap().unwrap();
//! assert_eq!(got.to_string(), "My Message");
//! ```

mod types;
pub use types::{IndexSpec, Path, PathStep};

mod parser;
pub use parser::{ParseError, PathParser};

pub mod resolver;
pub use resolver::{GetResult, ResolveError};
