//! Transfer functions from raw 16-bit codes to physical units.
//!
//! Results are not clamped: the sensor can report slightly outside 0..100 %RH
//! at the extremes.

pub fn humidity_from_code(code: u16) -> f32 {
    125.0 * code as f32 / 65536.0 - 6.0
}

pub fn celsius_from_code(code: u16) -> f32 {
    175.72 * code as f32 / 65536.0 - 46.85
}

pub fn fahrenheit_from_celsius(celsius: f32) -> f32 {
    celsius * 1.8 + 32.0
}
