use std::os::unix::io::AsRawFd;
use std::path::Path;
use std::thread;
use std::time::Duration;

use i2cdev::linux::LinuxI2CDevice;

use crate::error::{Error, Result};

/// Byte-oriented channel to a single, already addressed, bus peer.
///
/// `send` and `recv` return the number of bytes actually transferred; the
/// driver decides what a short transfer means. Can be replaced with
/// `MockTransport` for testing.
pub trait Transport {
    fn send(&mut self, bytes: &[u8]) -> Result<usize>;

    fn recv(&mut self, buf: &mut [u8]) -> Result<usize>;

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Opens the i2c-dev adapter at `path` and selects `address` as the slave.
pub fn open<P: AsRef<Path>>(path: P, address: u16) -> Result<LinuxI2CDevice> {
    let path = path.as_ref();
    LinuxI2CDevice::new(path, address).map_err(|source| Error::DeviceUnavailable {
        path: path.display().to_string(),
        address,
        source,
    })
}

// Plain read(2)/write(2) on the adapter so the transferred byte count is
// visible, unlike I2CDevice::read/write which discard it.
impl Transport for LinuxI2CDevice {
    fn send(&mut self, bytes: &[u8]) -> Result<usize> {
        Ok(nix::unistd::write(self.as_raw_fd(), bytes)?)
    }

    fn recv(&mut self, buf: &mut [u8]) -> Result<usize> {
        Ok(nix::unistd::read(self.as_raw_fd(), buf)?)
    }
}


#[cfg(test)]
mod tests {
    use super::mock::MockTransport;
    use super::*;

    #[test]
    fn test_open_missing_adapter() {
        match open("/dev/i2c-does-not-exist", 0x40) {
            Err(Error::DeviceUnavailable { path, address, .. }) => {
                assert_eq!(path, "/dev/i2c-does-not-exist");
                assert_eq!(address, 0x40);
            }
            other => panic!("expected DeviceUnavailable, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_mock_short_read() {
        let mut t = MockTransport::new();
        t.schedule_read(&[0x01]);
        let mut buf = [0u8; 2];
        assert_eq!(t.recv(&mut buf).unwrap(), 1);
        assert_eq!(buf, [0x01, 0x00]);
        assert!(t.recv(&mut buf).is_err());
    }
}
