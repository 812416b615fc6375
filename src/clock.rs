use std::collections::VecDeque;

use chrono::{DateTime, Utc};

/// Source of wall-clock time for the recorder.
pub trait Clock {
    fn now(&mut self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&mut self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Hands out a fixed sequence of instants, then keeps repeating the last one.
#[derive(Debug, Clone)]
pub struct ScriptedClock {
    times: VecDeque<DateTime<Utc>>,
    last: DateTime<Utc>,
}

impl ScriptedClock {
    pub fn new(times: impl IntoIterator<Item = DateTime<Utc>>) -> Self {
        let times: VecDeque<_> = times.into_iter().collect();
        let last = times.front().copied().unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
        Self { times, last }
    }
}

impl Clock for ScriptedClock {
    fn now(&mut self) -> DateTime<Utc> {
        if let Some(t) = self.times.pop_front() {
            self.last = t;
        }
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn scripted_clock_replays_then_sticks() {
        let a = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2024, 3, 1, 9, 5, 0).unwrap();
        let mut clock = ScriptedClock::new([a, b]);
        assert_eq!(clock.now(), a);
        assert_eq!(clock.now(), b);
        assert_eq!(clock.now(), b);
    }

    #[test]
    fn empty_scripted_clock_is_epoch() {
        let mut clock = ScriptedClock::new([]);
        assert_eq!(clock.now(), DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn system_clock_moves_forward() {
        let mut clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(first <= second);
    }
}
