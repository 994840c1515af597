// MPU6050 Step Counter — Bus Contract & Register Map
//
// The core never talks to hardware directly; it drives a `BusChannel`
// implemented by the platform layer (I2C on real hardware, a scripted mock in
// tests).  Register-level sequencing lives here so the rest of the core only
// deals in samples.

use anyhow::Result;

// MPU6050 register addresses
pub const REG_CONFIG: u8 = 0x1A;
pub const REG_ACCEL_CONFIG: u8 = 0x1C;
pub const REG_MOT_THR: u8 = 0x1F;
pub const REG_MOT_DUR: u8 = 0x20;
pub const REG_FIFO_EN: u8 = 0x23;
pub const REG_INT_PIN_CFG: u8 = 0x37;
pub const REG_INT_ENABLE: u8 = 0x38;
pub const REG_ACCEL_XOUT_H: u8 = 0x3B;
pub const REG_ACCEL_YOUT_H: u8 = 0x3D;
pub const REG_ACCEL_ZOUT_H: u8 = 0x3F;
pub const REG_MOT_DETECT_CTRL: u8 = 0x69;
pub const REG_USER_CTRL: u8 = 0x6A;
pub const REG_PWR_MGMT_1: u8 = 0x6B;
pub const REG_PWR_MGMT_2: u8 = 0x6C;
pub const REG_WHO_AM_I: u8 = 0x75;

pub const WHO_AM_I_EXPECTED: u8 = 0x68;

/// Register-oriented transport to the sensor.  Both operations may fail with
/// a transport error; the core treats any failure as "no update this cycle".
pub trait BusChannel {
    /// Read a big-endian signed 16-bit word starting at `reg`.
    fn read_signed_word(&mut self, reg: u8) -> Result<i16>;

    /// Write a single byte to `reg`.
    fn write_byte(&mut self, reg: u8, value: u8) -> Result<()>;
}

/// Read back the WHO_AM_I register (high byte of the big-endian word read
/// starting at 0x75).
pub fn identify<B: BusChannel>(bus: &mut B) -> Result<u8> {
    Ok((bus.read_signed_word(REG_WHO_AM_I)? as u16 >> 8) as u8)
}

/// Device setup performed at bind time: everything to defaults, then the
/// motion-detect engine armed (threshold 0x14, duration 1, decrement ctrl).
pub fn setup_device<B: BusChannel>(bus: &mut B) -> Result<()> {
    bus.write_byte(REG_CONFIG, 0)?;
    bus.write_byte(REG_ACCEL_CONFIG, 0)?;
    bus.write_byte(REG_FIFO_EN, 0)?;
    bus.write_byte(REG_INT_PIN_CFG, 0)?;
    bus.write_byte(REG_INT_ENABLE, 0)?;
    bus.write_byte(REG_USER_CTRL, 0)?;
    bus.write_byte(REG_PWR_MGMT_1, 0)?;
    bus.write_byte(REG_PWR_MGMT_2, 0)?;
    bus.write_byte(REG_MOT_THR, 0x14)?;
    bus.write_byte(REG_MOT_DUR, 0x01)?;
    bus.write_byte(REG_MOT_DETECT_CTRL, 0x15)?;
    Ok(())
}

/// Device teardown performed at unbind time.  Errors are the caller's to
/// ignore — a device that is already gone cannot be deconfigured.
pub fn teardown_device<B: BusChannel>(bus: &mut B) -> Result<()> {
    bus.write_byte(REG_INT_PIN_CFG, 0)?;
    bus.write_byte(REG_ACCEL_CONFIG, 0)?;
    bus.write_byte(REG_MOT_THR, 0)?;
    bus.write_byte(REG_MOT_DUR, 0)?;
    bus.write_byte(REG_MOT_DETECT_CTRL, 0)?;
    bus.write_byte(REG_INT_ENABLE, 0)?;
    Ok(())
}
