// MPU6050 Step Counter — Shared Sample Store
//
// One `MotionState` for the whole process, guarded by a mutex.  The sampler
// task, the read accessors, and nothing else mutate it; the interrupt path
// never goes near the lock.

use std::sync::Mutex;

/// One synchronous triple of axis readings, in the sensor's native signed
/// 16-bit range.  Immutable once captured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

/// Axis selector for the accessor surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }

    pub fn of(self, sample: Sample) -> i16 {
        match self {
            Axis::X => sample.x,
            Axis::Y => sample.y,
            Axis::Z => sample.z,
        }
    }
}

/// Latest and previous samples plus the cumulative crossing counter.
///
/// `previous` always holds the value `current` had before the most recent
/// successful refresh — a one-step history, not a log.  `steps` counts raw
/// threshold crossings; external readers see it halved.
#[derive(Debug, Clone, Copy, Default)]
pub struct MotionState {
    pub current: Sample,
    pub previous: Sample,
    pub steps: u32,
}

/// Mutex guard around the single `MotionState` instance.
///
/// Two access paths, picked per caller: the sampler uses the non-blocking one
/// (a contended cycle is simply skipped), the accessors use the blocking one.
#[derive(Debug, Default)]
pub struct SampleStore {
    inner: Mutex<MotionState>,
}

impl SampleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block until the lock is free, then run `f` with exclusive access.
    /// The lock is released on every exit path, including a panic in `f`.
    pub fn with_exclusive_access<T>(&self, f: impl FnOnce(&mut MotionState) -> T) -> T {
        let mut state = self.inner.lock().unwrap();
        f(&mut state)
    }

    /// Non-blocking variant: returns `None` ("busy") when the lock is held
    /// instead of running `f`.
    pub fn try_exclusive_access<T>(&self, f: impl FnOnce(&mut MotionState) -> T) -> Option<T> {
        match self.inner.try_lock() {
            Ok(mut state) => Some(f(&mut state)),
            Err(_) => None,
        }
    }

    /// Copy of the state for diagnostics and tests.
    pub fn snapshot(&self) -> MotionState {
        self.with_exclusive_access(|state| *state)
    }
}
