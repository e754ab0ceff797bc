//! Debug hooks passed explicitly to each pipeline component
//!
//! Components never reach for a global logger: they receive an
//! `Arc<dyn DebugHook>` at construction. The library default is
//! [`NoopHook`]; the CLI installs [`TracingHook`].

use std::sync::Arc;

/// Receiver for diagnostic events emitted while building a diagram.
pub trait DebugHook: Send + Sync {
    /// Report an event with key/value context
    fn debug(&self, msg: &str, fields: &[(&str, &dyn std::fmt::Display)]);
}

/// Hook that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHook;

impl DebugHook for NoopHook {
    fn debug(&self, _msg: &str, _fields: &[(&str, &dyn std::fmt::Display)]) {}
}

/// Hook that forwards events to `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingHook;

impl DebugHook for TracingHook {
    fn debug(&self, msg: &str, fields: &[(&str, &dyn std::fmt::Display)]) {
        if fields.is_empty() {
            tracing::debug!("{}", msg);
            return;
        }
        let context = fields
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join(" ");
        tracing::debug!("{} {}", msg, context);
    }
}

/// Shared handle to the no-op hook
pub fn noop() -> Arc<dyn DebugHook> {
    Arc::new(NoopHook)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Hook that records messages, for asserting on emitted events
    #[derive(Default)]
    pub(crate) struct RecordingHook {
        pub(crate) events: Mutex<Vec<String>>,
    }

    impl DebugHook for RecordingHook {
        fn debug(&self, msg: &str, fields: &[(&str, &dyn std::fmt::Display)]) {
            let mut line = msg.to_string();
            for (key, value) in fields {
                line.push_str(&format!(" {}={}", key, value));
            }
            self.events.lock().unwrap().push(line);
        }
    }

    #[test]
    fn test_recording_hook_formats_fields() {
        let hook = RecordingHook::default();
        hook.debug("parsed", &[("tables", &2), ("name", &"users")]);
        let events = hook.events.lock().unwrap();
        assert_eq!(events.as_slice(), ["parsed tables=2 name=users"]);
    }

    #[test]
    fn test_noop_hook_accepts_events() {
        noop().debug("ignored", &[("n", &1)]);
        TracingHook.debug("forwarded", &[]);
    }
}
