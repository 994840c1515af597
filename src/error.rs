// MPU6050 Step Counter — Core Error Taxonomy
//
// Refresh failures are recoverable by design: a failed cycle is "no update",
// never a fatal fault.  Callers that need to tell an absent device apart from
// a flaky bus match on this enum; everything else just logs and moves on.

use std::fmt;

/// Error produced by a refresh-and-detect cycle.
#[derive(Debug)]
pub enum Error {
    /// No live bus connection is bound; refresh cannot run at all.
    DeviceUnbound,
    /// The device identified as something other than an MPU6050.
    WrongDevice { expected: u8, found: u8 },
    /// A bus read/write failed mid-cycle; prior state is retained.
    Transport(anyhow::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DeviceUnbound => write!(f, "no sensor bound"),
            Error::WrongDevice { expected, found } => write!(
                f,
                "wrong i2c device found: expected 0x{:02X}, found 0x{:02X}",
                expected, found
            ),
            Error::Transport(e) => write!(f, "bus transport error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Transport(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}
