// MPU6050 Step Counter — Core State & Refresh Cycle
//
// `MotionCore` is the single long-lived instance threaded through the sampler
// task, the read accessors, and the interrupt callback.  It owns the device
// handle (an optional bound bus), the guarded sample store, and the motion
// notifier.
//
// Every refresh-and-detect cycle runs with the store held exclusively and
// keeps its three steps in order: archive the previous sample, write the new
// one, run detection.  A failed bus read aborts the cycle before any of the
// three, so `current`/`previous`/`steps` are retained intact.

use std::sync::Mutex;

use crate::bus::{self, BusChannel};
use crate::detector;
use crate::error::Error;
use crate::notifier::MotionNotifier;
use crate::store::{MotionState, Sample, SampleStore};

pub struct MotionCore<B> {
    /// Device handle: `None` while unbound.  Guarded separately from the
    /// store so unbinding is observable mid-flight without holding up
    /// readers of the last-known samples.
    bus: Mutex<Option<B>>,
    store: SampleStore,
    motion: MotionNotifier,
}

impl<B> Default for MotionCore<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> MotionCore<B> {
    /// Fresh, unbound core with zeroed state.
    pub fn new() -> Self {
        Self {
            bus: Mutex::new(None),
            store: SampleStore::new(),
            motion: MotionNotifier::new(),
        }
    }

    pub fn store(&self) -> &SampleStore {
        &self.store
    }

    pub fn notifier(&self) -> &MotionNotifier {
        &self.motion
    }

    pub fn is_bound(&self) -> bool {
        self.bus.lock().unwrap().is_some()
    }
}

impl<B: BusChannel> MotionCore<B> {
    /// Identify and configure the sensor, then take ownership of the bus.
    /// On any failure the handle stays unbound and refreshes keep failing
    /// cleanly with [`Error::DeviceUnbound`].
    pub fn bind(&self, mut bus: B) -> Result<(), Error> {
        let who = bus::identify(&mut bus).map_err(Error::Transport)?;
        if who != bus::WHO_AM_I_EXPECTED {
            return Err(Error::WrongDevice {
                expected: bus::WHO_AM_I_EXPECTED,
                found: who,
            });
        }
        log::info!("mpu6050 found, WHO_AM_I = 0x{:02X}", who);

        bus::setup_device(&mut bus).map_err(Error::Transport)?;
        *self.bus.lock().unwrap() = Some(bus);
        log::info!("mpu6050 bound and configured");
        Ok(())
    }

    /// Release the device: deconfigure it on a best-effort basis and drop
    /// the bus.  Idempotent; unbinding an unbound core is a no-op.
    pub fn unbind(&self) {
        let Some(mut bus) = self.bus.lock().unwrap().take() else {
            return;
        };
        if let Err(e) = bus::teardown_device(&mut bus) {
            log::warn!("device teardown incomplete: {}", e);
        }
        log::info!("mpu6050 unbound");
    }

    /// One refresh-and-detect cycle over already-acquired state.
    ///
    /// Reads all three axes first; only a fully successful read mutates the
    /// state.  Callers hold the store exclusively for the whole call (the
    /// sampler via the non-blocking path, the accessors via the blocking
    /// one), so archive → write → detect never interleaves.
    pub fn refresh_and_detect(&self, state: &mut MotionState) -> Result<(), Error> {
        let mut handle = self.bus.lock().unwrap();
        let bus = handle.as_mut().ok_or(Error::DeviceUnbound)?;

        let sample = Sample {
            x: bus.read_signed_word(bus::REG_ACCEL_XOUT_H).map_err(Error::Transport)?,
            y: bus.read_signed_word(bus::REG_ACCEL_YOUT_H).map_err(Error::Transport)?,
            z: bus.read_signed_word(bus::REG_ACCEL_ZOUT_H).map_err(Error::Transport)?,
        };
        drop(handle);

        state.previous = state.current;
        state.current = sample;
        state.steps = detector::detect(state.current, state.previous, state.steps);

        log::debug!(
            "ACCEL[X,Y,Z] = [{}, {}, {}], STEPS = {}",
            state.current.x,
            state.current.y,
            state.current.z,
            state.steps / crate::config::CROSSINGS_PER_STEP
        );
        Ok(())
    }
}
