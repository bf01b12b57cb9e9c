//! # si7013-rs
//!
//! This crate provides you a way to access the Si7013-A20 humidity and
//! temperature sensor via the Linux I2C interface.
//!
//! # Examples
//! ```no_run
//! use si7013::{transport, Config, Si7013, SI7013_DEFAULT_ADDRESS};
//!
//! let dev = transport::open("/dev/i2c-1", SI7013_DEFAULT_ADDRESS).unwrap();
//! let mut si7013 = Si7013::new(dev, Config::default());
//! let m = si7013.measure().unwrap();
//! println!("{:.2}%", m.humidity);
//! println!("{:.2}°C | {:.2}°F", m.temperature, m.fahrenheit());
//! si7013.set_heater(true, 5).unwrap();
//! println!("{}", si7013.dump_diagnostics().unwrap());
//! ```

pub mod command;
pub mod conversion;
pub mod crc;
mod error;
pub mod register;
mod si7013;
pub mod transport;
mod utils;

pub use crate::error::*;
pub use crate::register::{Diagnostics, FirmwareRevision, HeaterConfig, HeaterUpdate, Register};
pub use crate::si7013::*;
pub use crate::transport::Transport;
pub use crate::utils::{Device, ElectronicId};
