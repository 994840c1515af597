// MPU6050 Step Counter — Read Accessors
//
// The four read-only textual endpoints exposed to the reporting layer:
// `accel_x`, `accel_y`, `accel_z`, and `steps`.  Each axis read triggers a
// full refresh-and-detect cycle so callers always see a sample no older than
// their own request; `steps` reads the counter as-is.
//
// The axis accessors take the store's blocking lock for the whole refresh,
// so an accessor and the sampler cannot interleave their archive/write steps
// and corrupt `previous`.  With the sampler on the non-blocking path, a
// reader holding the lock costs at most one skipped polling cycle.

use crate::bus::BusChannel;
use crate::config::CROSSINGS_PER_STEP;
use crate::core::MotionCore;
use crate::store::Axis;

impl<B: BusChannel> MotionCore<B> {
    /// Latest reading on one axis, as a decimal signed integer plus newline.
    ///
    /// On a failed refresh (unbound device, bus error) the last-known value
    /// is returned unchanged and the failure is logged.
    pub fn read_accel_axis(&self, axis: Axis) -> String {
        self.store().with_exclusive_access(|state| {
            if let Err(e) = self.refresh_and_detect(state) {
                log::warn!("accel_{} read: refresh failed: {}", axis.name(), e);
            }
            format!("{}\n", axis.of(state.current))
        })
    }

    /// Reported step count (crossing counter halved, floor division), as a
    /// decimal non-negative integer plus newline.  Does not refresh.
    pub fn read_steps(&self) -> String {
        self.store()
            .with_exclusive_access(|state| format!("{}\n", state.steps / CROSSINGS_PER_STEP))
    }
}
