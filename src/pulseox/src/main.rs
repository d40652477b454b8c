#[macro_use]
extern crate log;

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use clap::Parser;
use dotenv::dotenv;
use pulseox::{BusErrorPolicy, SamplingLoop, constants};

#[derive(Parser)]
#[command(about = "Heart rate and SpO2 from a MAX30102, shown on an SSD1306 OLED")]
pub struct PulseOxCli {
    #[arg(env, long, default_value = constants::DEFAULT_I2C_BUS)]
    pub i2c_bus: String,
    #[arg(env, long, default_value = "0x57", value_parser = parse_address)]
    pub sensor_address: u8,
    #[arg(env, long, default_value = "0x3C", value_parser = parse_address)]
    pub display_address: u8,
    ///
    /// Time slept after each cycle
    ///
    #[arg(env, long, default_value_t = 1000)]
    pub period_ms: u64,
    ///
    /// Log sensor read failures and keep sampling instead of exiting
    ///
    #[arg(env, long)]
    pub tolerate_bus_errors: bool,
    ///
    /// Run without the OLED, printing readings only
    ///
    #[arg(env, long)]
    pub headless: bool,
}

impl PulseOxCli {
    fn sampling_loop(&self) -> SamplingLoop {
        let policy = match self.tolerate_bus_errors {
            true => BusErrorPolicy::SkipCycle,
            false => BusErrorPolicy::FailFast,
        };
        SamplingLoop::new(Duration::from_millis(self.period_ms), policy)
    }
}

fn parse_address(s: &str) -> Result<u8, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid I2C address `{s}`: {e}"))
}

fn main() -> anyhow::Result<()> {
    let env_file = dotenv();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(error) = env_file {
        debug!("no .env loaded: {}", error);
    }

    let cli = PulseOxCli::parse();

    let running = Arc::new(AtomicBool::new(true));
    {
        let running = running.clone();
        ctrlc::set_handler(move || running.store(false, Ordering::SeqCst))?;
    }

    if let Err(error) = run(&cli, &running) {
        error!("{:#}", error);
        return Err(error);
    }

    Ok(())
}

#[cfg(target_os = "linux")]
fn run(cli: &PulseOxCli, running: &AtomicBool) -> anyhow::Result<()> {
    use linux_embedded_hal::I2cdev;
    use pulseox::{Headless, I2cRegisterBus, MonotonicClock, OledDisplay, SensorConfig, Session};

    let sensor_bus = I2cRegisterBus::new(I2cdev::new(&cli.i2c_bus)?, cli.sensor_address);
    let mut sampling = cli.sampling_loop();

    if cli.headless {
        let mut session = Session::open(
            sensor_bus,
            Headless,
            MonotonicClock::new(),
            SensorConfig::default(),
        )?;
        sampling.run(&mut session, running)?;
    } else {
        let display = OledDisplay::new(I2cdev::new(&cli.i2c_bus)?, cli.display_address)?;
        let mut session = Session::open(
            sensor_bus,
            display,
            MonotonicClock::new(),
            SensorConfig::default(),
        )?;
        sampling.run(&mut session, running)?;
    }

    Ok(())
}

#[cfg(not(target_os = "linux"))]
fn run(cli: &PulseOxCli, _running: &AtomicBool) -> anyhow::Result<()> {
    Err(anyhow::anyhow!(
        "{} requires Linux i2c-dev support",
        cli.i2c_bus
    ))
}
