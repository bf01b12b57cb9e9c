use std::time::Duration;

use log::{debug, trace, warn};

use crate::command::Command;
use crate::conversion::*;
use crate::crc;
use crate::error::{Error, Result};
use crate::register::*;
use crate::transport::Transport;
use crate::utils::*;

/// Default I2C slave address (AD0 tied to GND).
pub const SI7013_DEFAULT_ADDRESS: u16 = 0x40;

/// tCONV(RH) + tCONV(T) = 12 ms + 10.8 ms, rounded up.
pub const DEFAULT_CONVERSION_TIME: Duration = Duration::from_millis(25);

#[derive(Clone, Debug)]
pub struct Config {
    /// Wait between the hold-mode humidity command and reading its result.
    pub conversion_time: Duration,
    /// Fail the measurement on a humidity CRC mismatch instead of flagging it.
    pub strict_checksum: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            conversion_time: DEFAULT_CONVERSION_TIME,
            strict_checksum: false,
        }
    }
}

/// One humidity measurement and the temperature taken during it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    pub humidity: f32,
    pub temperature: f32,
    pub humidity_code: u16,
    pub temperature_code: u16,
    pub checksum_received: u8,
    pub checksum_computed: u8,
    pub checksum_valid: bool,
}

impl Measurement {
    pub fn fahrenheit(&self) -> f32 {
        fahrenheit_from_celsius(self.temperature)
    }

    /// False when the humidity bytes did not match their checksum. The
    /// humidity value is reported unchanged either way.
    pub fn checksum_ok(&self) -> bool {
        self.checksum_valid
    }
}

pub struct Si7013<T> {
    transport: T,
    config: Config,
}

impl<T: Transport> Si7013<T> {
    pub fn new(transport: T, config: Config) -> Si7013<T> {
        Si7013 { transport, config }
    }

    /// Gives the transport back.
    pub fn release(self) -> T {
        self.transport
    }

    fn send_command(&mut self, command: Command) -> Result<()> {
        let frame = command.frame();
        let bytes = frame.as_bytes();
        debug!("-> {:?} {:02X?}", command, bytes);
        let written = self.transport.send(bytes)?;
        if written != bytes.len() {
            return Err(Error::ShortWrite {
                expected: bytes.len(),
                written,
            });
        }
        Ok(())
    }

    // The sensor has no ready signal on this interface, so the full
    // conversion time is always waited out.
    fn await_conversion(&mut self, command: Command) {
        let wait = command.conversion_time(self.config.conversion_time);
        if wait > Duration::from_millis(0) {
            trace!("waiting {:?} for conversion", wait);
            self.transport.sleep(wait);
        }
    }

    fn receive_response<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        let received = self.transport.recv(&mut buf)?;
        if received != N {
            return Err(Error::ShortRead {
                expected: N,
                received,
            });
        }
        debug!("<- {:02X?}", buf);
        Ok(buf)
    }

    fn transaction<const N: usize>(&mut self, command: Command) -> Result<[u8; N]> {
        debug_assert_eq!(command.response_len(), N);
        self.send_command(command)?;
        self.await_conversion(command);
        self.receive_response()
    }

    /// Measures relative humidity, then reads the temperature taken during
    /// that same conversion.
    pub fn measure(&mut self) -> Result<Measurement> {
        let [msb, lsb, checksum_received] = self.transaction::<3>(Command::MeasureHumidity)?;
        let humidity_code = word(msb, lsb);
        let checksum_computed = crc::compute_checksum(msb, lsb);
        let checksum_valid = crc::validate(msb, lsb, checksum_received);
        if !checksum_valid {
            if self.config.strict_checksum {
                return Err(Error::ChecksumMismatch {
                    expected: checksum_computed,
                    received: checksum_received,
                });
            }
            warn!(
                "humidity checksum mismatch: computed {:#04x}, received {:#04x}",
                checksum_computed, checksum_received
            );
        }

        // must directly follow the humidity measurement
        let [msb, lsb] = self.transaction::<2>(Command::ReadTemperature)?;
        let temperature_code = word(msb, lsb);

        Ok(Measurement {
            humidity: humidity_from_code(humidity_code),
            temperature: celsius_from_code(temperature_code),
            humidity_code,
            temperature_code,
            checksum_received,
            checksum_computed,
            checksum_valid,
        })
    }

    pub fn read_register(&mut self, register: Register) -> Result<u8> {
        let [value] = self.transaction::<1>(Command::ReadRegister(register))?;
        Ok(value)
    }

    pub fn write_register(&mut self, register: Register, value: u8) -> Result<()> {
        self.send_command(Command::WriteRegister(register, value))
    }

    fn modify_register<F>(&mut self, register: Register, f: F) -> Result<u8>
    where
        F: FnOnce(u8) -> u8,
    {
        let value = f(self.read_register(register)?);
        self.write_register(register, value)?;
        debug!("user register {} <- 0b{:08b}", register.number(), value);
        Ok(value)
    }

    /// Sets or clears the heater enable bit of user register 1, returning
    /// the value written.
    pub fn set_heater_enable(&mut self, enabled: bool) -> Result<u8> {
        self.modify_register(Register::Measurement, |v| with_heater_enabled(v, enabled))
    }

    /// Sets the heater current field of user register 3, returning the value
    /// written. Levels above 15 leave the field cleared.
    pub fn set_heater_current(&mut self, level: u8) -> Result<u8> {
        self.modify_register(Register::Heater, |v| with_heater_current(v, level))
    }

    pub fn set_heater(&mut self, enabled: bool, current_level: u8) -> Result<HeaterUpdate> {
        Ok(HeaterUpdate {
            user_register_1: self.set_heater_enable(enabled)?,
            user_register_3: self.set_heater_current(current_level)?,
        })
    }

    pub fn heater_config(&mut self) -> Result<HeaterConfig> {
        let reg1 = self.read_register(Register::Measurement)?;
        let reg3 = self.read_register(Register::Heater)?;
        Ok(HeaterConfig::from_registers(reg1, reg3))
    }

    pub fn read_firmware_revision(&mut self) -> Result<FirmwareRevision> {
        let [revision, _] = self.transaction::<2>(Command::ReadFirmwareRevision)?;
        Ok(FirmwareRevision(revision))
    }

    pub fn dump_diagnostics(&mut self) -> Result<Diagnostics> {
        Ok(Diagnostics {
            user_register_1: self.read_register(Register::Measurement)?,
            user_register_2: self.read_register(Register::Voltage)?,
            user_register_3: self.read_register(Register::Heater)?,
            firmware_revision: self.read_firmware_revision()?,
        })
    }

    pub fn read_electronic_id(&mut self) -> Result<ElectronicId> {
        let first = self.transaction::<8>(Command::ReadElectronicId1)?;
        let second = self.transaction::<6>(Command::ReadElectronicId2)?;
        Ok(ElectronicId::from_responses(first, second))
    }
}
