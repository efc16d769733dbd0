//! Errors produced while dumping a tree.

use thiserror::Error;

/// Failure reported by a [`LineSink`](crate::LineSink).
#[derive(Debug, Error)]
pub enum SinkError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),
    /// The sink accepts no further lines.
    #[error("sink is closed")]
    Closed,
}

#[derive(Debug, Error)]
pub enum DumpError {
    /// The sink rejected a line. `line` counts the lines written before it.
    #[error("failed to write dump line {line}")]
    Write {
        line: usize,
        #[source]
        source: SinkError,
    },
    /// Every line was accepted but the sink failed to flush.
    #[error("failed to flush dump output")]
    Flush(#[source] SinkError),
}
