use thiserror::Error;

use idmef_path::{ParseError, ResolveError};
use idmef_wire::WireError;

/// Umbrella error for the message-level API.
#[derive(Debug, Error)]
pub enum IdmefError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Wire(#[from] WireError),
}
