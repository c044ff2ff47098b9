use thiserror::Error;

#[derive(Debug, Error)]
pub enum WireError {
    /// The stream has bytes but ends before the record does. The stream
    /// position is undefined afterwards; callers must not retry without
    /// re-synchronizing.
    #[error("stream ends inside a record")]
    Truncated,
    /// The record is complete but its content contradicts the registry or
    /// its own framing.
    #[error("corrupt record: {0}")]
    Corrupt(String),
    /// A payload beyond the maximum record size, from a length prefix on
    /// the read side or an encoded tree on the write side.
    #[error("record payload of {0} bytes exceeds the maximum message size")]
    Oversized(u64),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
