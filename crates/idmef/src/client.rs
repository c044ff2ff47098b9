//! Client sink for finished messages.
//!
//! The sink owns its transport: the library's only obligation is to hand it
//! one complete serialized record per message. Connection management, queuing,
//! and retry toward a remote collector belong to the sink implementation.

use std::io::Write;

use crate::error::IdmefError;
use crate::logger::{self, LogLevel};
use crate::message::IdmefMessage;

/// Anything that accepts fully-built messages.
pub trait Sink {
    fn send(&mut self, message: &IdmefMessage) -> Result<(), IdmefError>;
}

/// A sink writing wire records to a byte stream.
pub struct StreamClient<W: Write> {
    profile: String,
    stream: W,
    started: bool,
}

impl<W: Write> StreamClient<W> {
    /// Creates a client named after its sensor profile, e.g. `"net-sensor"`.
    pub fn new(profile: impl Into<String>, stream: W) -> Self {
        Self { profile: profile.into(), stream, started: false }
    }

    /// Mark the client ready. Sending before `start` still works; the split
    /// exists so transports with a real connection phase can hook it.
    pub fn start(&mut self) {
        self.started = true;
        logger::emit(LogLevel::Info, &format!("client '{}' ready", self.profile));
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// Consumes the client, returning the underlying stream.
    pub fn into_inner(self) -> W {
        self.stream
    }
}

impl<W: Write> Sink for StreamClient<W> {
    fn send(&mut self, message: &IdmefMessage) -> Result<(), IdmefError> {
        if !self.started {
            logger::emit(
                LogLevel::Warn,
                &format!("client '{}' sending before start", self.profile),
            );
        }
        message.write(&mut self.stream)?;
        logger::emit(LogLevel::Debug, &format!("client '{}' sent one message", self.profile));
        Ok(())
    }
}
