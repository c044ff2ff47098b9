//! IDMEF security alerts as a navigable object tree.
//!
//! [`IdmefMessage`] ties the pieces together: build and query a message
//! through textual path expressions, dump it in canonical form, and move it
//! across byte streams in the length-prefixed wire form. A [`Sink`] hands
//! finished messages to a collector; [`logger`] carries leveled diagnostics
//! to a caller-registered callback.
//!
//! # Example
//!
//! ```
//! use idmef::IdmefMessage;
//!
//! let mut idmef = IdmefMessage::new();
//! idmef.set("alert.classification.text", Some("My Message")).unwrap();
//!
//! let got = idmef.get("alert.classification.text").unwrap().unwrap();
//! assert_eq!(got.to_string(), "My Message");
//!
//! let mut stream = Vec::new();
//! idmef.write(&mut stream).unwrap();
//! let back = IdmefMessage::read(&mut &stream[..]).unwrap().unwrap();
//! assert_eq!(back.to_string(), idmef.to_string());
//! ```

mod error;
pub use error::IdmefError;

mod message;
pub use message::IdmefMessage;

mod client;
pub use client::{Sink, StreamClient};

pub mod logger;
pub use logger::LogLevel;

pub use idmef_core::{registry, ObjectNode, Value};
pub use idmef_path::{GetResult, IndexSpec, ParseError, Path, PathParser, PathStep, ResolveError};
pub use idmef_wire::WireError;
