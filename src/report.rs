//! Diagnostics emitted by the cleaning phases.
//!
//! Components never talk to a logger directly; they notify an injected
//! [`DiagnosticSink`]. The binary wires in [`TracingSink`], tests capture
//! notifications with [`MemorySink`].

use tracing::{error, info, warn};

/// Severity of a single notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warn,
    Error,
}

/// One notification produced during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

/// Receiver for notifications emitted by the cleaning phases.
pub trait DiagnosticSink {
    /// Progress notes, applied corrections, discrepancy summaries.
    fn info(&mut self, message: String);

    /// Rejected rows and other recoverable oddities.
    fn warn(&mut self, message: String);

    /// Phase-level load or write failures.
    fn error(&mut self, message: String);
}

/// Production sink forwarding every notification to the tracing macros.
#[derive(Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn info(&mut self, message: String) {
        info!("{message}");
    }

    fn warn(&mut self, message: String) {
        warn!("{message}");
    }

    fn error(&mut self, message: String) {
        error!("{message}");
    }
}

/// Sink that records notifications in memory so tests can assert on them.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub notices: Vec<Notice>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages recorded at the given severity, in emission order.
    pub fn messages(&self, severity: Severity) -> Vec<&str> {
        self.notices
            .iter()
            .filter(|notice| notice.severity == severity)
            .map(|notice| notice.message.as_str())
            .collect()
    }

    /// True when any message of the given severity contains `needle`.
    pub fn contains(&self, severity: Severity, needle: &str) -> bool {
        self.messages(severity)
            .iter()
            .any(|message| message.contains(needle))
    }
}

impl DiagnosticSink for MemorySink {
    fn info(&mut self, message: String) {
        self.notices.push(Notice {
            severity: Severity::Info,
            message,
        });
    }

    fn warn(&mut self, message: String) {
        self.notices.push(Notice {
            severity: Severity::Warn,
            message,
        });
    }

    fn error(&mut self, message: String) {
        self.notices.push(Notice {
            severity: Severity::Error,
            message,
        });
    }
}
