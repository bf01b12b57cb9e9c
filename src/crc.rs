//! CRC-8 used by the sensor to protect humidity readings.
//!
//! Polynomial x^8 + x^5 + x^4 + 1 (0x131), initial value 0, no reflection
//! and no final XOR.

/// Low byte of the 0x131 polynomial; the x^8 term falls off the shift.
const POLYNOMIAL: u8 = 0x31;

pub fn compute_checksum(byte0: u8, byte1: u8) -> u8 {
    let mut crc: u8 = 0;
    for &byte in [byte0, byte1].iter() {
        crc ^= byte;
        for _ in 0..8 {
            if crc & 0x80 != 0 {
                crc = (crc << 1) ^ POLYNOMIAL;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

pub fn validate(byte0: u8, byte1: u8, received: u8) -> bool {
    compute_checksum(byte0, byte1) == received
}
