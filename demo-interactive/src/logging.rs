//! Log sink that stays off the terminal while the dashboard is drawn
//!
//! The dashboard and stderr share one tty. While [`DeferredLog::hold`] is in
//! effect, formatted log lines are kept in memory; [`DeferredLog::release`]
//! writes them to stderr once the terminal has been restored.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Debug, Default)]
struct Sink {
    holding: bool,
    buffer: Vec<u8>,
}

/// Shared handle passed to `tracing_subscriber::fmt().with_writer(..)`
#[derive(Debug, Clone, Default)]
pub struct DeferredLog {
    sink: Arc<Mutex<Sink>>,
}

impl DeferredLog {
    fn lock(&self) -> MutexGuard<'_, Sink> {
        // A panic mid-write leaves at worst a partial line
        self.sink.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start buffering instead of writing to stderr
    pub fn hold(&self) {
        self.lock().holding = true;
    }

    /// Stop buffering and write everything held so far to stderr
    ///
    /// # Errors
    /// Returns error if stderr cannot be written
    pub fn release(&self) -> io::Result<()> {
        self.release_to(&mut io::stderr().lock())
    }

    fn release_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let held = {
            let mut sink = self.lock();
            sink.holding = false;
            std::mem::take(&mut sink.buffer)
        };
        out.write_all(&held)?;
        out.flush()
    }
}

/// Writer handed out per log event
pub struct LogWriter {
    log: DeferredLog,
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut sink = self.log.lock();
        if sink.holding {
            sink.buffer.extend_from_slice(buf);
            return Ok(buf.len());
        }
        drop(sink);
        io::stderr().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

impl<'a> MakeWriter<'a> for DeferredLog {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter { log: self.clone() }
    }
}
