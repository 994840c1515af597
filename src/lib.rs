// MPU6050 Step Counter — Sampling & Detection Core
//
// Polls a 3-axis MPU6050 accelerometer over a register-oriented bus, keeps
// the latest and previous samples plus a cumulative step counter, and exposes
// the four textual read endpoints (`accel_x`, `accel_y`, `accel_z`, `steps`)
// together with an edge-triggered "device moved" notification.
//
// The platform layer supplies the two hardware seams — a `BusChannel` for
// register transactions and an `InterruptLine` for the motion edge — and the
// core provides everything between: the guarded sample store, the threshold
// step heuristic, the 800 ms background sampler, and module lifecycle.

pub mod accessors;
pub mod bus;
pub mod config;
pub mod core;
pub mod detector;
pub mod error;
pub mod lifecycle;
pub mod notifier;
pub mod sampler;
pub mod store;

#[cfg(test)]
pub(crate) mod testutil;

pub use crate::bus::BusChannel;
pub use crate::core::MotionCore;
pub use crate::error::Error;
pub use crate::lifecycle::{InterruptLine, StepModule};
pub use crate::sampler::SamplerHandle;
pub use crate::store::{Axis, MotionState, Sample, SampleStore};
