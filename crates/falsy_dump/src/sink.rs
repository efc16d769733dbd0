//! Line-oriented output sinks.
//!
//! A sink receives one complete line per call, without its terminator, and
//! is responsible for terminating it. Sinks are borrowed for the length of a
//! dump and never closed by it.

use crate::error::SinkError;
use std::fmt;
use std::io;

pub trait LineSink {
    fn write_line(&mut self, line: &str) -> Result<(), SinkError>;
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    #[inline]
    fn write_line(&mut self, line: &str) -> Result<(), SinkError> {
        (**self).write_line(line)
    }
}

/// Collects each line as its own string.
impl LineSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> Result<(), SinkError> {
        self.push(line.to_string());
        Ok(())
    }
}

/// Appends each line followed by `\n`.
impl LineSink for String {
    fn write_line(&mut self, line: &str) -> Result<(), SinkError> {
        self.push_str(line);
        self.push('\n');
        Ok(())
    }
}

/// Adapts any [`io::Write`], e.g. a locked stdout or a file.
#[derive(Debug)]
pub struct IoSink<W: io::Write> {
    inner: W,
}

impl<W: io::Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn flush(&mut self) -> Result<(), SinkError> {
        self.inner.flush().map_err(SinkError::from)
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> LineSink for IoSink<W> {
    fn write_line(&mut self, line: &str) -> Result<(), SinkError> {
        self.inner.write_all(line.as_bytes())?;
        self.inner.write_all(b"\n")?;
        Ok(())
    }
}

/// Adapts any [`fmt::Write`], e.g. a `Formatter` inside a `Display` impl.
#[derive(Debug)]
pub struct FmtSink<W: fmt::Write> {
    inner: W,
}

impl<W: fmt::Write> FmtSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: fmt::Write> LineSink for FmtSink<W> {
    fn write_line(&mut self, line: &str) -> Result<(), SinkError> {
        self.inner.write_str(line)?;
        self.inner.write_char('\n')?;
        Ok(())
    }
}
