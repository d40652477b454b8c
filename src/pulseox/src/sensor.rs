use std::time::Instant;

use pulseox_codec::{
    Sample, SensorConfig,
    constants::{FIFO_BLOCK_LEN, Register},
};

use crate::{BusError, RegisterBus};

/// MAX30102 pulse oximetry sensor behind a [`RegisterBus`].
pub struct Max30102<B> {
    bus: B,
    config: SensorConfig,
}

impl<B: RegisterBus> Max30102<B> {
    pub fn new(bus: B, config: SensorConfig) -> Self {
        Self { bus, config }
    }

    pub fn configure(&mut self) -> Result<(), BusError> {
        for (reg, value) in self.config.register_writes() {
            self.bus.write_register(reg.as_u8(), value)?;
        }
        info!("MAX30102 configured: {:?}", self.config);
        Ok(())
    }

    pub fn read_fifo(&mut self) -> Result<Vec<u8>, BusError> {
        self.bus
            .read_block(Register::FifoData.as_u8(), FIFO_BLOCK_LEN)
    }

    /// Puts the sensor into power-save; LEDs go dark.
    pub fn shutdown(&mut self) -> Result<(), BusError> {
        let (reg, value) = self.config.shutdown_mode();
        self.bus.write_register(reg.as_u8(), value)
    }
}

pub trait Clock {
    /// Milliseconds since the clock was started. Never decreases.
    fn elapsed_ms(&self) -> f64;
}

pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

/// Pulls one FIFO block per call and stamps it with the elapsed time.
pub struct SampleReader<B, C = MonotonicClock> {
    sensor: Max30102<B>,
    clock: C,
}

impl<B: RegisterBus, C: Clock> SampleReader<B, C> {
    pub fn new(sensor: Max30102<B>, clock: C) -> Self {
        Self { sensor, clock }
    }

    pub fn read(&mut self) -> Result<Sample, BusError> {
        let block = self.sensor.read_fifo()?;
        let timestamp_ms = self.clock.elapsed_ms();
        let sample = Sample::from_fifo_block(&block, timestamp_ms)?;
        debug!(
            "sample red={} ir={} t={:.0}ms",
            sample.red, sample.infrared, sample.timestamp_ms
        );
        Ok(sample)
    }

    pub fn sensor(&mut self) -> &mut Max30102<B> {
        &mut self.sensor
    }
}
