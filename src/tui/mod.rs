pub mod event;

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::event::{self as ct_event, Event};
use crossterm::terminal;
use log::{debug, warn};

use crate::clock::Clock;
use crate::recorder::{EventRecorder, Leap};
use event::KeyAction;

/// Keeps the terminal in raw mode for as long as it is alive.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode().context("failed to initialize terminal input")?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Runs the recorder against the real terminal until the quit key.
/// Returns the number of intervals closed during the session.
pub fn run<W: Write, C: Clock>(recorder: &mut EventRecorder<W, C>) -> Result<usize> {
    let _raw = RawModeGuard::enable()?;
    let mut stdout = io::stdout().lock();
    run_events(recorder, std::iter::repeat_with(ct_event::read), &mut stdout)
}

/// Feeds terminal events to the recorder in order, echoing each transition
/// to `display`. Stops on the quit key or when `events` runs dry.
pub fn run_events<W, C, I, D>(
    recorder: &mut EventRecorder<W, C>,
    events: I,
    display: &mut D,
) -> Result<usize>
where
    W: Write,
    C: Clock,
    I: IntoIterator<Item = io::Result<Event>>,
    D: Write,
{
    let mut completed = 0;
    for ev in events {
        let Event::Key(key) = ev.context("failed to read terminal event")? else {
            continue;
        };
        match event::classify(key) {
            KeyAction::Quit => break,
            KeyAction::Toggle => {
                let leap = recorder.toggle();
                if matches!(leap, Leap::Stopped { .. }) {
                    completed += 1;
                }
                if let Err(e) = show_leap(display, &leap) {
                    warn!("failed to update display: {e}");
                }
            }
            KeyAction::Ignore => debug!("ignoring key {:?}", key.code),
        }
    }
    Ok(completed)
}

/// Writes the progress indicator: `<start> -> ` when an interval opens and
/// `<end>` plus a line break when it closes.
fn show_leap<D: Write>(display: &mut D, leap: &Leap) -> io::Result<()> {
    match leap {
        Leap::Started { start } => write!(display, "{start} -> ")?,
        // Raw mode turns off output post-processing, so `\n` alone would not
        // return the cursor to column 0.
        Leap::Stopped { end, .. } => write!(display, "{end}\r\n")?,
    }
    display.flush()
}
