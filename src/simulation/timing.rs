use std::cell::Cell;
use std::thread;
use std::time::Duration;

use time::precise_time_s;

pub trait Clock {
    fn now(&self) -> f64;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        precise_time_s()
    }
}

#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start: f64) -> ManualClock {
        ManualClock { now: Cell::new(start) }
    }

    pub fn advance(&self, secs: f64) {
        self.now.set(self.now.get() + secs);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

/// Turns successive timestamps into frame deltas. The first tick yields 0,
/// and a clock going backwards yields 0 rather than a negative delta.
#[derive(Debug, Default)]
pub struct DeltaTimer {
    last: Option<f64>,
}

impl DeltaTimer {
    pub fn new() -> DeltaTimer {
        Default::default()
    }

    pub fn tick(&mut self, now: f64) -> f64 {
        if !now.is_finite() {
            warn!("ignoring non-finite timestamp {}", now);
            return 0.0;
        }
        let dt = match self.last {
            Some(last) => (now - last).max(0.0),
            None => 0.0,
        };
        self.last = Some(now);
        dt
    }
}

/// Holds a loop to a target frame rate. Frame `n` is due at
/// `start + n * frame_duration`; a late frame is not made up by sleeping
/// less later, it just runs immediately.
#[derive(Debug)]
pub struct FramePacer {
    frame_duration: Option<f64>,
    start: Option<f64>,
    frames: u64,
}

impl FramePacer {
    pub fn new(frame_duration: Option<f64>) -> FramePacer {
        FramePacer {
            frame_duration,
            start: None,
            frames: 0,
        }
    }

    /// Seconds left until the next frame is due, counting this call as
    /// the end of a frame.
    pub fn remaining(&mut self, now: f64) -> f64 {
        let frame_duration = match self.frame_duration {
            Some(frame_duration) => frame_duration,
            None => return 0.0,
        };
        let start = *self.start.get_or_insert(now);
        self.frames += 1;
        let expected = start + frame_duration * self.frames as f64;
        if now > expected {
            trace!("frame {} late by {:.4}s", self.frames, now - expected);
            self.start = Some(now);
            self.frames = 0;
            0.0
        } else {
            expected - now
        }
    }

    pub fn wait<C: Clock>(&mut self, clock: &C) {
        let remaining = self.remaining(clock.now());
        if remaining > 0.0 {
            thread::sleep(Duration::from_micros((remaining * 1e6) as u64));
        }
    }
}
