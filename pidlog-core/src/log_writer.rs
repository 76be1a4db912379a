use std::{
    any::Any,
    io::{self, LineWriter, Write},
};

/// Whether closing the logger also closes the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// The stream is flushed and dropped on close.
    Owned,
    /// The stream is flushed and handed back to the caller on close.
    Borrowed,
}

pub trait LogWriter {
    /// Writes one complete line, trailing newline included.
    fn regular(&mut self, line: &str) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
}

/// The process standard error stream. Never closed.
#[derive(Debug, Default)]
pub struct LogStderr;

impl LogWriter for LogStderr {
    fn regular(&mut self, line: &str) -> io::Result<()> {
        io::stderr().lock().write_all(line.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

/// Type-erased caller stream that can still be downcast after release.
pub trait Stream: Write + Send + 'static {
    fn into_write(self: Box<Self>) -> Box<dyn Write + Send>;
    fn into_any(self: Box<Self>) -> Box<dyn Any + Send>;
}

impl<W: Write + Send + 'static> Stream for W {
    fn into_write(self: Box<Self>) -> Box<dyn Write + Send> {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any + Send> {
        self
    }
}

/// A caller supplied stream, line buffered.
pub struct LogStream {
    writer: LineWriter<Box<dyn Stream>>,
    ownership: Ownership,
}

impl LogStream {
    pub fn new<W: Write + Send + 'static>(writer: W, ownership: Ownership) -> Self {
        let writer: Box<dyn Stream> = Box::new(writer);
        Self {
            writer: LineWriter::new(writer),
            ownership,
        }
    }

    /// Flushes the stream, then closes it if owned or returns it if borrowed.
    pub fn release(self) -> io::Result<Option<Box<dyn Stream>>> {
        let mut inner = self.writer.into_inner().map_err(|e| e.into_error())?;
        inner.flush()?;
        match self.ownership {
            Ownership::Owned => Ok(None),
            Ownership::Borrowed => Ok(Some(inner)),
        }
    }
}

impl LogWriter for LogStream {
    fn regular(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Destination of a logger's lines.
pub enum Sink {
    Stderr(LogStderr),
    Stream(LogStream),
}

impl Sink {
    pub fn release(self) -> io::Result<Option<Box<dyn Stream>>> {
        match self {
            Sink::Stderr(mut w) => {
                w.flush()?;
                Ok(None)
            }
            Sink::Stream(w) => w.release(),
        }
    }
}

impl LogWriter for Sink {
    fn regular(&mut self, line: &str) -> io::Result<()> {
        match self {
            Sink::Stderr(w) => w.regular(line),
            Sink::Stream(w) => w.regular(line),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::Stderr(w) => w.flush(),
            Sink::Stream(w) => w.flush(),
        }
    }
}
