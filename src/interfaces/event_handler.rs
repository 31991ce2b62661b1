// ============================================================================
// Event Handler Interface
// Defines the contract for observing calculator activity
// ============================================================================

use crate::domain::{Operation, SessionId};
use crate::numeric::{format_fixed, CalcError, Radix, RadixRenderings};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the conversion calculator
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculatorEvent {
    /// First operand of a session stored in the accumulator
    ValueEntered {
        session_id: SessionId,
        value: f64,
        renderings: RadixRenderings,
        timestamp: DateTime<Utc>,
    },

    /// Arithmetic operation applied to the accumulator
    OperationApplied {
        session_id: SessionId,
        operation: Operation,
        operand: f64,
        result: f64,
        renderings: RadixRenderings,
        timestamp: DateTime<Utc>,
    },

    /// Operation refused; the accumulator is unchanged
    OperationRejected {
        session_id: SessionId,
        operation: Operation,
        operand: String,
        reason: CalcError,
        timestamp: DateTime<Utc>,
    },

    /// Active input/display radix switched
    RadixChanged {
        session_id: SessionId,
        from: Radix,
        to: Radix,
        timestamp: DateTime<Utc>,
    },

    /// Accumulator cleared
    Reset {
        session_id: SessionId,
        timestamp: DateTime<Utc>,
    },
}

impl CalculatorEvent {
    pub fn session_id(&self) -> SessionId {
        match self {
            CalculatorEvent::ValueEntered { session_id, .. }
            | CalculatorEvent::OperationApplied { session_id, .. }
            | CalculatorEvent::OperationRejected { session_id, .. }
            | CalculatorEvent::RadixChanged { session_id, .. }
            | CalculatorEvent::Reset { session_id, .. } => *session_id,
        }
    }
}

/// Event handler trait for processing calculator events
/// Implementations can handle logging, history files, UI updates, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculator event
    fn on_event(&self, event: CalculatorEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<CalculatorEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalculatorEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalculatorEvent) {
        tracing::debug!("Calculator event: {:?}", event);
    }
}

/// Append-only history of applied operations.
///
/// One UTF-8 line per `OperationApplied` event; other events are ignored.
/// Write failures are logged and never reach the calculator.
pub struct HistoryFileHandler {
    path: PathBuf,
    file: Mutex<File>,
}

impl HistoryFileHandler {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        tracing::debug!(path = %path.display(), "history file opened");
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// History line for one applied operation, e.g.
    /// `Operation: addition, Number: 5.00, Result: 15.00 (BIN: 1111, OCT: 17, DEC: 15, HEX: F)`
    pub fn format_line(
        operation: Operation,
        operand: f64,
        result: f64,
        renderings: &RadixRenderings,
    ) -> String {
        let radixes = renderings
            .iter()
            .map(|(radix, text)| format!("{}: {}", radix.label(), text))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "Operation: {}, Number: {}, Result: {} ({})",
            operation.name(),
            format_fixed(operand, 2),
            format_fixed(result, 2),
            radixes
        )
    }

    fn append(&self, line: &str) -> io::Result<()> {
        let mut file = self.file.lock();
        file.write_all(line.as_bytes())?;
        file.write_all(b"\n")?;
        file.flush()
    }
}

impl EventHandler for HistoryFileHandler {
    fn on_event(&self, event: CalculatorEvent) {
        if let CalculatorEvent::OperationApplied {
            operation,
            operand,
            result,
            renderings,
            ..
        } = event
        {
            let line = Self::format_line(operation, operand, result, &renderings);
            if let Err(err) = self.append(&line) {
                tracing::warn!(path = %self.path.display(), error = %err, "failed to write history line");
            }
        }
    }
}

/// Forwards every event to several handlers in order.
pub struct CompositeEventHandler {
    handlers: Vec<Box<dyn EventHandler>>,
}

impl CompositeEventHandler {
    pub fn new(handlers: Vec<Box<dyn EventHandler>>) -> Self {
        Self { handlers }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl EventHandler for CompositeEventHandler {
    fn on_event(&self, event: CalculatorEvent) {
        if let Some((last, rest)) = self.handlers.split_last() {
            for handler in rest {
                handler.on_event(event.clone());
            }
            last.on_event(event);
        }
    }
}
