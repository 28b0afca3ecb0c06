//! Fixed-cadence frame loop.
//!
//! One frame runs to completion, then the loop sleeps whatever is left of the
//! cadence before starting the next.  Frames never overlap.  The only way to
//! end the loop is the [`StopFlag`]: once it is cleared, the next frame does
//! not run.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Shared "keep running" flag.  Clones observe the same flag.
#[derive(Clone, Debug)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    pub fn new() -> Self {
        StopFlag(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_running(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn stop(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl Default for StopFlag {
    fn default() -> Self {
        StopFlag::new()
    }
}

/// What the frame callback learns about the frame it is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameTick {
    /// 1-based frame number.
    pub index: u64,
    /// Wall-clock time since the previous frame started (the cadence for
    /// the first frame).
    pub delta: Duration,
}

#[derive(Clone, Debug)]
pub struct FrameScheduler {
    cadence: Duration,
    stop: StopFlag,
}

impl FrameScheduler {
    pub fn new(cadence: Duration) -> Self {
        FrameScheduler {
            cadence,
            stop: StopFlag::new(),
        }
    }

    pub fn cadence(&self) -> Duration {
        self.cadence
    }

    /// Handle for stopping the loop from the frame callback or elsewhere.
    pub fn stop_flag(&self) -> StopFlag {
        self.stop.clone()
    }

    /// Run `frame` on the cadence until the stop flag is cleared or the
    /// callback fails.  Returns the number of frames that ran.
    pub fn run<F, E>(&self, mut frame: F) -> Result<u64, E>
    where
        F: FnMut(FrameTick) -> Result<(), E>,
    {
        let mut index = 0;
        let mut previous: Option<Instant> = None;

        while self.stop.is_running() {
            let started = Instant::now();
            let delta = previous.map_or(self.cadence, |p| started.duration_since(p));
            previous = Some(started);
            index += 1;

            frame(FrameTick { index, delta })?;

            let elapsed = started.elapsed();
            if elapsed < self.cadence && self.stop.is_running() {
                thread::sleep(self.cadence - elapsed);
            }
        }
        Ok(index)
    }
}
