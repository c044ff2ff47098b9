//! Leveled diagnostic events with a caller-registered callback.
//!
//! One callback is active process-wide at a time; [`set_callback`] replaces
//! any previous one and [`clear_callback`] restores the default route, the
//! [`log`] crate facade. The library never formats user-facing output itself.

use std::fmt;
use std::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        })
    }
}

type Callback = Box<dyn Fn(LogLevel, &str) + Send + Sync>;

static CALLBACK: RwLock<Option<Callback>> = RwLock::new(None);

/// Register the active diagnostic callback, replacing any previous one.
pub fn set_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    // The slot is plain data, so a poisoned guard is recovered rather than
    // letting one panicking callback silence all later diagnostics.
    let mut slot = CALLBACK.write().unwrap_or_else(|e| e.into_inner());
    *slot = Some(Box::new(callback));
}

/// Remove the active callback; diagnostics fall back to the `log` facade.
pub fn clear_callback() {
    let mut slot = CALLBACK.write().unwrap_or_else(|e| e.into_inner());
    *slot = None;
}

/// Raise one diagnostic event.
pub fn emit(level: LogLevel, message: &str) {
    {
        let slot = CALLBACK.read().unwrap_or_else(|e| e.into_inner());
        if let Some(callback) = slot.as_ref() {
            callback(level, message);
            return;
        }
    }
    match level {
        LogLevel::Debug => log::debug!("{message}"),
        LogLevel::Info => log::info!("{message}"),
        LogLevel::Warn => log::warn!("{message}"),
        LogLevel::Error => log::error!("{message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_callback_lifecycle_survives_poisoning() {
        // Poison the lock up front; every accessor recovers the guard, so
        // the whole lifecycle below still works.
        let _ = std::thread::spawn(|| {
            let _guard = CALLBACK.write();
            panic!("poisoning the callback lock");
        })
        .join();

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        set_callback(move |level, message| {
            if let Ok(mut log) = sink.lock() {
                log.push((level, message.to_owned()));
            }
        });

        emit(LogLevel::Info, "logger-test: ready");
        emit(LogLevel::Debug, "logger-test: sent");

        clear_callback();
        emit(LogLevel::Info, "logger-test: not captured");

        // Other tests in this binary may emit concurrently; only look at ours.
        let log = seen.lock().unwrap();
        let ours: Vec<_> =
            log.iter().filter(|(_, m)| m.starts_with("logger-test:")).cloned().collect();
        assert_eq!(
            ours,
            vec![
                (LogLevel::Info, "logger-test: ready".to_owned()),
                (LogLevel::Debug, "logger-test: sent".to_owned()),
            ]
        );
    }
}
