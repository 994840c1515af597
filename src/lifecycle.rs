// MPU6050 Step Counter — Module Lifecycle
//
// Wires the pieces together the way the driver's load/unload hooks do:
// spawn the sampler, register the rising-edge motion callback, and on
// shutdown release everything in reverse order.  Startup and teardown must
// both succeed even when the sensor was never bound — the module stays
// loaded and serviceable with every refresh failing cleanly.

use std::sync::Arc;

use crate::bus::BusChannel;
use crate::core::MotionCore;
use crate::sampler::{self, SamplerHandle};

/// Rising-edge interrupt registration, provided by the platform layer.
pub trait InterruptLine {
    fn register(&mut self, callback: Box<dyn Fn() + Send + Sync>) -> anyhow::Result<()>;
    fn unregister(&mut self);
}

/// The assembled module: shared core, running sampler, registered interrupt.
pub struct StepModule<B, L: InterruptLine> {
    core: Arc<MotionCore<B>>,
    sampler: Option<SamplerHandle>,
    line: L,
}

impl<B, L> StepModule<B, L>
where
    B: BusChannel + Send + 'static,
    L: InterruptLine,
{
    /// Bring the module up over an already-constructed core (bound or not).
    pub fn start(core: Arc<MotionCore<B>>, mut line: L) -> anyhow::Result<Self> {
        let sampler = sampler::spawn(Arc::clone(&core))?;

        let edge_core = Arc::clone(&core);
        if let Err(e) = line.register(Box::new(move || edge_core.notifier().on_motion_edge())) {
            sampler.stop();
            return Err(e.context("failed to register motion interrupt"));
        }

        log::info!("step counter module loaded");
        Ok(Self {
            core,
            sampler: Some(sampler),
            line,
        })
    }

    pub fn core(&self) -> &Arc<MotionCore<B>> {
        &self.core
    }

    /// Stop the sampler, drop the interrupt registration, and unbind the
    /// device.  Safe to call whether or not a device was ever bound.
    pub fn shutdown(mut self) {
        if let Some(sampler) = self.sampler.take() {
            sampler.stop();
        }
        self.line.unregister();
        self.core.unbind();
        log::info!("step counter module unloaded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::testutil::MockBus;

    #[derive(Default)]
    struct LineState {
        callback: Option<Box<dyn Fn() + Send + Sync>>,
        registered: bool,
    }

    #[derive(Clone, Default)]
    struct MockLine {
        state: Arc<Mutex<LineState>>,
    }

    impl MockLine {
        fn fire(&self) {
            let state = self.state.lock().unwrap();
            if let Some(callback) = state.callback.as_ref() {
                callback();
            }
        }

        fn registered(&self) -> bool {
            self.state.lock().unwrap().registered
        }
    }

    impl InterruptLine for MockLine {
        fn register(&mut self, callback: Box<dyn Fn() + Send + Sync>) -> anyhow::Result<()> {
            let mut state = self.state.lock().unwrap();
            state.callback = Some(callback);
            state.registered = true;
            Ok(())
        }

        fn unregister(&mut self) {
            let mut state = self.state.lock().unwrap();
            state.callback = None;
            state.registered = false;
        }
    }

    #[test]
    fn edge_callback_posts_into_the_notifier() {
        let core = Arc::new(MotionCore::new());
        let bus = MockBus::new();
        core.bind(bus).unwrap();

        let line = MockLine::default();
        let module = StepModule::start(Arc::clone(&core), line.clone()).unwrap();
        assert!(line.registered());

        line.fire();
        line.fire();
        assert!(core.notifier().edge_count() >= 2);

        module.shutdown();
        assert!(!line.registered());
        assert!(!core.is_bound());
    }

    #[test]
    fn lifecycle_survives_a_device_that_never_bound() {
        let core: Arc<MotionCore<MockBus>> = Arc::new(MotionCore::new());
        let line = MockLine::default();

        let module = StepModule::start(Arc::clone(&core), line.clone()).unwrap();
        // Interrupt still delivers while unbound.
        line.fire();
        assert_eq!(core.notifier().edge_count(), 1);

        module.shutdown();
        assert!(!line.registered());
    }

    #[test]
    fn failed_interrupt_registration_stops_the_sampler() {
        struct BrokenLine;
        impl InterruptLine for BrokenLine {
            fn register(&mut self, _: Box<dyn Fn() + Send + Sync>) -> anyhow::Result<()> {
                anyhow::bail!("irq line already claimed")
            }
            fn unregister(&mut self) {}
        }

        let core: Arc<MotionCore<MockBus>> = Arc::new(MotionCore::new());
        let err = StepModule::start(core, BrokenLine)
            .err()
            .expect("start must fail when the irq line cannot be claimed");
        assert!(err.to_string().contains("failed to register motion interrupt"));
    }
}
