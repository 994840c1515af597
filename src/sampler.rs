// MPU6050 Step Counter — Sampler Task
//
// Single long-lived background thread driving the 800 ms polling cadence.
// Each cycle tries the store without blocking: if an accessor holds it, the
// whole cycle is skipped and retried next period.  Refresh failures are
// logged and never escalated.  Termination is cooperative, checked once per
// cycle boundary.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::bus::BusChannel;
use crate::config::{SAMPLER_TASK_NAME, SAMPLE_INTERVAL_MS, STACK_SAMPLER};
use crate::core::MotionCore;

/// Handle to the running sampler thread.  [`SamplerHandle::stop`] requests a
/// cooperative exit and joins; the thread notices the flag at its next cycle
/// boundary, so stopping can take up to one polling interval.
pub struct SamplerHandle {
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl SamplerHandle {
    pub fn stop(mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                log::error!("sampler task panicked");
            }
        }
    }
}

/// Spawn the sampler task over a shared core.
pub fn spawn<B>(core: Arc<MotionCore<B>>) -> anyhow::Result<SamplerHandle>
where
    B: BusChannel + Send + 'static,
{
    let stop = Arc::new(AtomicBool::new(false));
    let stop_flag = Arc::clone(&stop);
    let thread = thread::Builder::new()
        .name(SAMPLER_TASK_NAME.into())
        .stack_size(STACK_SAMPLER)
        .spawn(move || sampler_loop(core, stop_flag))?;
    Ok(SamplerHandle {
        stop,
        thread: Some(thread),
    })
}

fn sampler_loop<B: BusChannel>(core: Arc<MotionCore<B>>, stop: Arc<AtomicBool>) {
    log::info!("sampler task started");

    let interval = Duration::from_millis(SAMPLE_INTERVAL_MS);

    while !stop.load(Ordering::SeqCst) {
        // Deferred half of the interrupt path: the edge handler only posted a
        // flag, the diagnostic is emitted here on our own thread.
        if core.notifier().take_pending() {
            log::info!(
                "device moved! motion interrupt received (edge #{})",
                core.notifier().edge_count()
            );
        }

        let ran = core.store().try_exclusive_access(|state| {
            if let Err(e) = core.refresh_and_detect(state) {
                log::warn!("sample refresh failed: {}", e);
            }
        });
        if ran.is_none() {
            // Store busy (an accessor is refreshing) — skip this cycle.
            log::debug!("sample store busy, skipping cycle");
        }

        thread::sleep(interval);
    }

    log::info!("sampler task stopped");
}
