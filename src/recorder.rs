use std::io::{self, Write};

use chrono::{DateTime, SecondsFormat, Utc};
use log::{debug, warn};

use crate::clock::{Clock, SystemClock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecorderState {
    Stopped,
    Started,
}

/// The transition a single toggle produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leap {
    Started {
        start: DateTime<Utc>,
    },
    Stopped {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

/// Formats one completed interval as a log line, newline included.
pub fn format_leap(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    format!(
        "{}, {}\n",
        start.to_rfc3339_opts(SecondsFormat::Secs, true),
        end.to_rfc3339_opts(SecondsFormat::Secs, true)
    )
}

/// Two-state stopwatch. Every stop appends the finished interval to `sink`.
///
/// `end` is only meaningful while stopped. An interval still open when the
/// recorder is finished is dropped without a line.
pub struct EventRecorder<W: Write, C: Clock = SystemClock> {
    state: RecorderState,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    sink: W,
    clock: C,
}

impl<W: Write> EventRecorder<W> {
    pub fn new(sink: W) -> Self {
        Self::with_clock(sink, SystemClock)
    }
}

impl<W: Write, C: Clock> EventRecorder<W, C> {
    pub fn with_clock(sink: W, mut clock: C) -> Self {
        let now = clock.now();
        Self {
            state: RecorderState::Stopped,
            start: now,
            end: now,
            sink,
            clock,
        }
    }

    pub fn state(&self) -> RecorderState {
        self.state
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Starts a new interval or closes the open one.
    ///
    /// Closing writes the interval to the sink. A failed write is logged and
    /// otherwise ignored so the stopwatch keeps running.
    pub fn toggle(&mut self) -> Leap {
        match self.state {
            RecorderState::Stopped => {
                self.start = self.clock.now();
                self.state = RecorderState::Started;
                debug!("started at {}", self.start);
                Leap::Started { start: self.start }
            }
            RecorderState::Started => {
                self.end = self.clock.now();
                self.state = RecorderState::Stopped;
                debug!("stopped at {}", self.end);
                if let Err(e) = self.record() {
                    warn!("failed to write interval: {e}");
                }
                Leap::Stopped {
                    start: self.start,
                    end: self.end,
                }
            }
        }
    }

    /// Writes the just-closed `start`/`end` pair as one log line.
    /// `end` is stale while an interval is open, so this only runs after a stop.
    fn record(&mut self) -> io::Result<()> {
        debug_assert_eq!(self.state, RecorderState::Stopped);
        self.sink
            .write_all(format_leap(self.start, self.end).as_bytes())
    }

    /// Flushes buffered lines and hands the sink back.
    pub fn finish(mut self) -> io::Result<W> {
        if self.state == RecorderState::Started {
            debug!("discarding open interval started at {}", self.start);
        }
        self.sink.flush()?;
        Ok(self.sink)
    }
}
