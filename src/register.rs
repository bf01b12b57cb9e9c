//! User registers and the heater bit fields inside them.

use std::fmt;

use log::warn;

use crate::command::*;

/// Heater enable, bit 2 of user register 1.
pub const HEATER_ENABLE_BIT: u8 = 2;
/// Heater current level, bits 3:0 of user register 3.
pub const HEATER_CURRENT_MASK: u8 = 0x0F;
pub const HEATER_CURRENT_MAX: u8 = 15;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Register {
    /// User register 1, RH/T measurement setup.
    Measurement,
    /// User register 2, voltage measurement setup.
    Voltage,
    /// User register 3, heater setup.
    Heater,
}

impl Register {
    pub fn number(&self) -> u8 {
        match *self {
            Register::Measurement => 1,
            Register::Voltage => 2,
            Register::Heater => 3,
        }
    }

    pub fn read_opcode(&self) -> u8 {
        match *self {
            Register::Measurement => READ_USER_REG_1,
            Register::Voltage => READ_USER_REG_2,
            Register::Heater => READ_USER_REG_3,
        }
    }

    pub fn write_opcode(&self) -> u8 {
        match *self {
            Register::Measurement => WRITE_USER_REG_1,
            Register::Voltage => WRITE_USER_REG_2,
            Register::Heater => WRITE_USER_REG_3,
        }
    }
}

pub fn with_heater_enabled(reg1: u8, enabled: bool) -> u8 {
    if enabled {
        reg1 | (1 << HEATER_ENABLE_BIT)
    } else {
        reg1 & !(1 << HEATER_ENABLE_BIT)
    }
}

/// Clears the current field and puts `level` into it. A level above 15 is
/// ignored, leaving the field cleared.
pub fn with_heater_current(reg3: u8, level: u8) -> u8 {
    let cleared = reg3 & !HEATER_CURRENT_MASK;
    if level <= HEATER_CURRENT_MAX {
        cleared | level
    } else {
        warn!(
            "heater current level {} out of range 0..={}, leaving field cleared",
            level, HEATER_CURRENT_MAX
        );
        cleared
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaterConfig {
    pub enabled: bool,
    pub current_level: u8,
}

impl HeaterConfig {
    pub fn from_registers(reg1: u8, reg3: u8) -> HeaterConfig {
        HeaterConfig {
            enabled: reg1 & (1 << HEATER_ENABLE_BIT) != 0,
            current_level: reg3 & HEATER_CURRENT_MASK,
        }
    }
}

impl fmt::Display for HeaterConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Heater              {} (current level {})",
            if self.enabled { "on" } else { "off" },
            self.current_level
        )
    }
}

/// Register values written back by a heater update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaterUpdate {
    pub user_register_1: u8,
    pub user_register_3: u8,
}

impl fmt::Display for HeaterUpdate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Updated User Register #1   0b{:08b}", self.user_register_1)?;
        write!(f, "Updated User Register #3   0b{:08b}", self.user_register_3)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FirmwareRevision(pub u8);

impl fmt::Display for FirmwareRevision {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            0xFF => write!(f, "1.0 (0xFF)"),
            0x20 => write!(f, "2.0 (0x20)"),
            code => write!(f, "unknown (0x{:02X})", code),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Diagnostics {
    pub user_register_1: u8,
    pub user_register_2: u8,
    pub user_register_3: u8,
    pub firmware_revision: FirmwareRevision,
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "User Register #1    0b{:08b}", self.user_register_1)?;
        writeln!(f, "User Register #2    0b{:08b}", self.user_register_2)?;
        writeln!(f, "User Register #3    0b{:08b}", self.user_register_3)?;
        write!(f, "Firmware Revision   {}", self.firmware_revision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heater_enable_bit() {
        assert_eq!(with_heater_enabled(0b0000_0000, true), 0b0000_0100);
        assert_eq!(with_heater_enabled(0b0000_0100, false), 0b0000_0000);
        assert_eq!(with_heater_enabled(0b0011_1010, true), 0b0011_1110);
        assert_eq!(with_heater_enabled(0b1111_1111, false), 0b1111_1011);
    }

    #[test]
    fn test_heater_current_field() {
        assert_eq!(with_heater_current(0b0000_1111, 5), 0b0000_0101);
        assert_eq!(with_heater_current(0b1010_0000, 15), 0b1010_1111);
        assert_eq!(with_heater_current(0b1010_0011, 0), 0b1010_0000);
    }

    #[test]
    fn test_heater_current_out_of_range() {
        assert_eq!(with_heater_current(0b0000_1111, 20), 0b0000_0000);
        assert_eq!(with_heater_current(0b1100_1111, 16), 0b1100_0000);
    }

    #[test]
    fn test_heater_config_view() {
        let config = HeaterConfig::from_registers(0b0011_1110, 0b0000_1010);
        assert_eq!(
            config,
            HeaterConfig {
                enabled: true,
                current_level: 10
            }
        );
        assert!(!HeaterConfig::from_registers(0b0011_1010, 0).enabled);
    }

    #[test]
    fn test_diagnostics_display() {
        let d = Diagnostics {
            user_register_1: 0x3A,
            user_register_2: 0x01,
            user_register_3: 0x00,
            firmware_revision: FirmwareRevision(0x20),
        };
        let text = d.to_string();
        assert!(text.contains("User Register #1    0b00111010"));
        assert!(text.contains("User Register #2    0b00000001"));
        assert!(text.contains("Firmware Revision   2.0 (0x20)"));
    }
}
