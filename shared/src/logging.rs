//! `tracing` output for hosts without a usable stdout, such as the browser.
//! Each formatted event is handed to a sink as one line with its level.

use std::{io, sync::Arc};

use tracing::{Level, Metadata, Subscriber};
use tracing_subscriber::fmt::MakeWriter;

type Sink = Arc<dyn Fn(Level, &str) + Send + Sync>;

/// Hands every formatted event to a sink function.
#[derive(Clone)]
pub struct LineMakeWriter {
    sink: Sink,
}

impl LineMakeWriter {
    /// `sink` receives the event's level and its line, without the trailing
    /// newline.
    pub fn new(sink: impl Fn(Level, &str) + Send + Sync + 'static) -> Self {
        Self {
            sink: Arc::new(sink),
        }
    }
}

/// Buffers one event and passes it on when dropped.
pub struct LineWriter {
    level: Level,
    buffer: Vec<u8>,
    sink: Sink,
}

impl io::Write for LineWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for LineWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buffer);
        let line = line.trim_end();
        if !line.is_empty() {
            (self.sink)(self.level, line);
        }
    }
}

impl<'a> MakeWriter<'a> for LineMakeWriter {
    type Writer = LineWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.writer(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        self.writer(*meta.level())
    }
}

impl LineMakeWriter {
    fn writer(&self, level: Level) -> LineWriter {
        LineWriter {
            level,
            buffer: Vec::new(),
            sink: Arc::clone(&self.sink),
        }
    }
}

/// Plain-text subscriber (no timestamps, no ANSI colours) writing through
/// `writer`, keeping events at `max_level` and above.
pub fn line_subscriber(writer: LineMakeWriter, max_level: Level) -> impl Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .without_time()
        .with_ansi(false)
        .with_writer(writer)
        .finish()
}
