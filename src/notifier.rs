// MPU6050 Step Counter — Motion-Edge Notifier
//
// The interrupt line fires on a rising edge whenever the sensor's own motion
// engine trips, independent of the 800 ms polling cadence.  The handler runs
// in an interrupt-latency-sensitive context, so it only posts into atomics:
// no locks, no allocation, no bus traffic, no logging.  The sampler drains
// the flag on its own thread and emits the diagnostic there.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

#[derive(Debug, Default)]
pub struct MotionNotifier {
    pending: AtomicBool,
    edges: AtomicU32,
}

impl MotionNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one motion edge.  Safe to call from interrupt context and
    /// reentrant with respect to an in-progress sampler cycle.
    pub fn on_motion_edge(&self) {
        self.edges.fetch_add(1, Ordering::Relaxed);
        self.pending.store(true, Ordering::Release);
    }

    /// Consume the pending flag; `true` if at least one edge arrived since
    /// the last drain.
    pub fn take_pending(&self) -> bool {
        self.pending.swap(false, Ordering::Acquire)
    }

    /// Lifetime edge count, for diagnostics.
    pub fn edge_count(&self) -> u32 {
        self.edges.load(Ordering::Relaxed)
    }
}
