#[macro_use]
extern crate serde_derive;

use std::convert::TryFrom;
use std::error::Error;
use std::process;
use std::time::Duration;

use docopt::Docopt;
use log::debug;

use si7013::{transport, Config, HeaterUpdate, Si7013, Transport, DEFAULT_CONVERSION_TIME};

const USAGE: &'static str = "
Reading Si7013-A20 sensor values

Usage:
  si7013 [options] [read]
  si7013 [options] heater [<state>] [--] [<current>]
  si7013 [options] detail
  si7013 [options] id
  si7013 (-h | --help)
  si7013 (-v | --version)

Commands:
  read      Measure relative humidity and temperature (default).
  heater    Turn the heater on or off (default off) and set its current level 0-15 (default 0).
            A level outside 0-15 leaves the current field cleared; negative
            levels go after `--`, e.g. `heater on -- -1`.
  detail    Show user registers #1-3 and the firmware revision.
  id        Show the electronic ID.

Options:
  -h --help            Show this help text.
  -v --version         Show version.
  --device <dev>       I2C device adapter [default: /dev/i2c-1].
  --address <addr>     I2C device address, decimal or 0x-prefixed hex [default: 0x40].
  --conversion <ms>    Conversion wait in milliseconds [default: 25].
  --strict             Fail on a humidity checksum mismatch.
";

#[derive(Debug, Deserialize)]
struct Args {
    cmd_heater: bool,
    cmd_detail: bool,
    cmd_id: bool,
    arg_state: Option<String>,
    arg_current: Option<i64>,
    flag_device: String,
    flag_address: String,
    flag_conversion: Option<u64>,
    flag_strict: bool,
    flag_version: bool,
}

fn parse_address(s: &str) -> Option<u16> {
    if s.starts_with("0x") || s.starts_with("0X") {
        u16::from_str_radix(&s[2..], 16).ok()
    } else {
        s.parse().ok()
    }
}

// Anything outside 0..=15 still reaches the driver as an out-of-range level,
// so the enable bit is written and the current field is left cleared.
fn heater_level(current: Option<i64>) -> u8 {
    match current {
        None => 0,
        Some(level) => {
            if level < 0 || level > 15 {
                debug!("heater current {} out of range", level);
            }
            u8::try_from(level).unwrap_or(u8::MAX)
        }
    }
}

fn heater<T: Transport>(si7013: &mut Si7013<T>, args: &Args) -> si7013::Result<HeaterUpdate> {
    let enabled = args.arg_state.as_ref().map_or(false, |s| s == "on");
    si7013.set_heater(enabled, heater_level(args.arg_current))
}

fn run(args: Args, address: u16) -> si7013::Result<()> {
    let config = Config {
        conversion_time: args
            .flag_conversion
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_CONVERSION_TIME),
        strict_checksum: args.flag_strict,
    };

    let dev = transport::open(&args.flag_device, address)?;
    let mut si7013 = Si7013::new(dev, config);

    if args.cmd_heater {
        println!("{}", heater(&mut si7013, &args)?);
    } else if args.cmd_detail {
        println!("{}", si7013.dump_diagnostics()?);
        println!("{}", si7013.heater_config()?);
    } else if args.cmd_id {
        println!("{}", si7013.read_electronic_id()?);
    } else {
        let m = si7013.measure()?;
        println!("RH Code             0x{:04X}", m.humidity_code);
        println!("RH Checksum (RX)    0x{:02X}", m.checksum_received);
        println!("RH Checksum (Calc)  0x{:02X}", m.checksum_computed);
        println!("Relative Humidity   {:.2}%", m.humidity);
        println!();
        println!("Temperature Code    0x{:04X}", m.temperature_code);
        println!(
            "Temperature         {:.2}\u{00B0}C | {:.2}\u{00B0}F",
            m.temperature,
            m.fahrenheit()
        );
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let args: Args = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    if args.flag_version {
        println!("si7013 {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let address = match parse_address(&args.flag_address) {
        Some(address) => address,
        None => {
            eprintln!("Error: invalid I2C address '{}'", args.flag_address);
            process::exit(1);
        }
    };

    if let Err(e) = run(args, address) {
        debug!("{:?}", e);
        eprintln!("Error: {}", e);
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        process::exit(1);
    }
}
