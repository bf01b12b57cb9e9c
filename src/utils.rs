use std::fmt;

pub fn word(high: u8, low: u8) -> u16 {
    ((high as u16) << 8) | low as u16
}

/// Factory-programmed 64-bit serial number and the part it identifies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElectronicId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Device {
    EngineeringSample,
    Si7013,
    Si7020,
    Si7021,
    Unknown(u8),
}

impl ElectronicId {
    /// Assembles the serial from the two ID reads. The first response holds
    /// SNA_3..SNA_0 at even offsets, each followed by a CRC byte; the second
    /// holds SNB_3, SNB_2, CRC, SNB_1, SNB_0, CRC.
    pub fn from_responses(first: [u8; 8], second: [u8; 6]) -> ElectronicId {
        let bytes = [
            first[0], first[2], first[4], first[6], second[0], second[1], second[3], second[4],
        ];
        ElectronicId(u64::from_be_bytes(bytes))
    }

    pub fn device(&self) -> Device {
        match (self.0 >> 24) as u8 {
            0x00 | 0xFF => Device::EngineeringSample,
            0x0D => Device::Si7013,
            0x14 => Device::Si7020,
            0x15 => Device::Si7021,
            other => Device::Unknown(other),
        }
    }
}

impl fmt::Display for ElectronicId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Electronic ID       0x{:016X} ({:?})", self.0, self.device())
    }
}
