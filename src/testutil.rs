// MPU6050 Step Counter — Scripted Mock Bus (tests only)

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use anyhow::{bail, Result};

use crate::bus::{
    BusChannel, REG_ACCEL_XOUT_H, REG_ACCEL_YOUT_H, REG_ACCEL_ZOUT_H, REG_WHO_AM_I,
    WHO_AM_I_EXPECTED,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailMode {
    None,
    ReadsFail,
}

#[derive(Debug)]
struct Inner {
    who_am_i: u8,
    queued: VecDeque<(i16, i16, i16)>,
    latched: (i16, i16, i16),
    fail: FailMode,
}

/// Scripted register-level stand-in for the sensor.  Clones share state, so
/// tests can keep a handle for scripting after the core takes the bus.
///
/// A read of ACCEL_XOUT_H latches the next queued sample (or repeats the last
/// one when the queue runs dry); Y/Z reads return the latched triple.
#[derive(Debug, Clone)]
pub struct MockBus {
    inner: Arc<Mutex<Inner>>,
    writes: Arc<Mutex<Vec<(u8, u8)>>>,
}

impl MockBus {
    pub fn new() -> Self {
        Self::with_who_am_i(WHO_AM_I_EXPECTED)
    }

    pub fn with_who_am_i(who_am_i: u8) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                who_am_i,
                queued: VecDeque::new(),
                latched: (0, 0, 0),
                fail: FailMode::None,
            })),
            writes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn push_sample(&self, x: i16, y: i16, z: i16) {
        self.inner.lock().unwrap().queued.push_back((x, y, z));
    }

    pub fn set_fail_mode(&self, mode: FailMode) {
        self.inner.lock().unwrap().fail = mode;
    }

    /// Shared log of every `write_byte`, in order.
    pub fn writes(&self) -> Arc<Mutex<Vec<(u8, u8)>>> {
        Arc::clone(&self.writes)
    }
}

impl Default for MockBus {
    fn default() -> Self {
        Self::new()
    }
}

impl BusChannel for MockBus {
    fn read_signed_word(&mut self, reg: u8) -> Result<i16> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail == FailMode::ReadsFail {
            bail!("i2c read of 0x{:02X} failed", reg);
        }
        match reg {
            REG_WHO_AM_I => Ok(((inner.who_am_i as u16) << 8) as i16),
            REG_ACCEL_XOUT_H => {
                if let Some(next) = inner.queued.pop_front() {
                    inner.latched = next;
                }
                Ok(inner.latched.0)
            }
            REG_ACCEL_YOUT_H => Ok(inner.latched.1),
            REG_ACCEL_ZOUT_H => Ok(inner.latched.2),
            _ => bail!("unexpected read of register 0x{:02X}", reg),
        }
    }

    fn write_byte(&mut self, reg: u8, value: u8) -> Result<()> {
        self.writes.lock().unwrap().push((reg, value));
        Ok(())
    }
}
