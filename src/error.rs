use i2cdev::linux::LinuxI2CError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("unable to open I2C device {path} at address {address:#04x}")]
    DeviceUnavailable {
        path: String,
        address: u16,
        #[source]
        source: LinuxI2CError,
    },

    #[error("short write: {written} of {expected} bytes transferred")]
    ShortWrite { expected: usize, written: usize },

    #[error("short read: {received} of {expected} bytes received")]
    ShortRead { expected: usize, received: usize },

    #[error("I2C bus error")]
    Bus(#[from] nix::Error),

    #[error("humidity checksum mismatch: computed {expected:#04x}, received {received:#04x}")]
    ChecksumMismatch { expected: u8, received: u8 },
}

impl Error {
    /// True for failures of the bus transfer itself. The sensor state is
    /// unknown after one of these and the operation must not continue.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::ShortWrite { .. } | Error::ShortRead { .. } | Error::Bus(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
