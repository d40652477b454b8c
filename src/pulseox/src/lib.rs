#[macro_use]
extern crate log;

mod error;
pub use error::{BusError, DisplayError, PulseOxError};

mod bus;
pub use bus::{I2cRegisterBus, RegisterBus};

mod sensor;
pub use sensor::{Clock, Max30102, MonotonicClock, SampleReader};

mod display;
pub use display::{Headless, OledDisplay, TextDisplay};

mod session;
pub use session::Session;

mod sampling;
pub use sampling::{BusErrorPolicy, SamplingLoop};

pub mod algo {
    pub use pulseox_algos::*;
}

pub use pulseox_codec::{Sample, SensorConfig, constants};

#[cfg(test)]
mod fakes;
