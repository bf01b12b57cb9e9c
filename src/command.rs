use std::time::Duration;

use crate::register::Register;

// Opcodes, bit-exact per the Si7013-A20 datasheet.
pub const MEASURE_RH_HOLD: u8 = 0xE5;
pub const READ_TEMP_FROM_PREVIOUS_RH: u8 = 0xE0;
pub const WRITE_USER_REG_1: u8 = 0xE6;
pub const WRITE_USER_REG_2: u8 = 0x50;
pub const WRITE_USER_REG_3: u8 = 0x51;
pub const READ_USER_REG_1: u8 = 0xE7;
pub const READ_USER_REG_2: u8 = 0x10;
pub const READ_USER_REG_3: u8 = 0x11;
pub const READ_FIRMWARE_HIGH: u8 = 0x84;
pub const READ_FIRMWARE_LOW: u8 = 0xB8;
pub const READ_ID_1_HIGH: u8 = 0xFA;
pub const READ_ID_1_LOW: u8 = 0x0F;
pub const READ_ID_2_HIGH: u8 = 0xFC;
pub const READ_ID_2_LOW: u8 = 0xC9;

/// A single sensor transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    MeasureHumidity,
    ReadTemperature,
    ReadRegister(Register),
    WriteRegister(Register, u8),
    ReadFirmwareRevision,
    ReadElectronicId1,
    ReadElectronicId2,
}

/// Command bytes as they go on the wire, one or two of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    bytes: [u8; 2],
    len: usize,
}

impl Frame {
    fn byte(opcode: u8) -> Frame {
        Frame {
            bytes: [opcode, 0],
            len: 1,
        }
    }

    fn word(high: u8, low: u8) -> Frame {
        Frame {
            bytes: [high, low],
            len: 2,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl Command {
    pub fn frame(&self) -> Frame {
        match *self {
            Command::MeasureHumidity => Frame::byte(MEASURE_RH_HOLD),
            Command::ReadTemperature => Frame::byte(READ_TEMP_FROM_PREVIOUS_RH),
            Command::ReadRegister(reg) => Frame::byte(reg.read_opcode()),
            Command::WriteRegister(reg, value) => Frame::word(reg.write_opcode(), value),
            Command::ReadFirmwareRevision => Frame::word(READ_FIRMWARE_HIGH, READ_FIRMWARE_LOW),
            Command::ReadElectronicId1 => Frame::word(READ_ID_1_HIGH, READ_ID_1_LOW),
            Command::ReadElectronicId2 => Frame::word(READ_ID_2_HIGH, READ_ID_2_LOW),
        }
    }

    /// Number of bytes the sensor answers with.
    pub fn response_len(&self) -> usize {
        match *self {
            Command::MeasureHumidity => 3,
            Command::ReadTemperature => 2,
            Command::ReadRegister(_) => 1,
            Command::WriteRegister(..) => 0,
            Command::ReadFirmwareRevision => 2,
            Command::ReadElectronicId1 => 8,
            Command::ReadElectronicId2 => 6,
        }
    }

    /// How long to wait after sending before the response can be read.
    /// Only a humidity measurement starts a conversion.
    pub fn conversion_time(&self, measurement: Duration) -> Duration {
        match *self {
            Command::MeasureHumidity => measurement,
            _ => Duration::from_millis(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_byte_frames() {
        assert_eq!(Command::MeasureHumidity.frame().as_bytes(), &[0xE5]);
        assert_eq!(Command::ReadTemperature.frame().as_bytes(), &[0xE0]);
        assert_eq!(
            Command::ReadRegister(Register::Measurement).frame().as_bytes(),
            &[0xE7]
        );
        assert_eq!(
            Command::ReadRegister(Register::Voltage).frame().as_bytes(),
            &[0x10]
        );
        assert_eq!(
            Command::ReadRegister(Register::Heater).frame().as_bytes(),
            &[0x11]
        );
    }

    #[test]
    fn test_two_byte_frames() {
        assert_eq!(
            Command::WriteRegister(Register::Measurement, 0x3A).frame().as_bytes(),
            &[0xE6, 0x3A]
        );
        assert_eq!(
            Command::WriteRegister(Register::Voltage, 0x01).frame().as_bytes(),
            &[0x50, 0x01]
        );
        assert_eq!(
            Command::WriteRegister(Register::Heater, 0x05).frame().as_bytes(),
            &[0x51, 0x05]
        );
        assert_eq!(Command::ReadFirmwareRevision.frame().as_bytes(), &[0x84, 0xB8]);
        assert_eq!(Command::ReadElectronicId1.frame().as_bytes(), &[0xFA, 0x0F]);
        assert_eq!(Command::ReadElectronicId2.frame().as_bytes(), &[0xFC, 0xC9]);
    }

    #[test]
    fn test_conversion_time() {
        let t = Duration::from_millis(25);
        assert_eq!(Command::MeasureHumidity.conversion_time(t), t);
        assert_eq!(
            Command::ReadRegister(Register::Heater).conversion_time(t),
            Duration::from_millis(0)
        );
        assert_eq!(Command::ReadTemperature.conversion_time(t), Duration::from_millis(0));
    }
}
