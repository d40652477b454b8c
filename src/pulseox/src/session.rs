use pulseox_algos::Reading;
use pulseox_codec::{Sample, SensorConfig};

use crate::{
    BusError, Clock, DisplayError, Max30102, MonotonicClock, PulseOxError, RegisterBus,
    SampleReader, TextDisplay,
};

/// Where the two readout lines are drawn, in pixels from the top-left.
pub const HEART_RATE_POSITION: (i32, i32) = (10, 10);
pub const SPO2_POSITION: (i32, i32) = (10, 30);

/// Exclusive owner of the sensor and the display for the process lifetime.
///
/// Dropping the session powers both devices down.
pub struct Session<B: RegisterBus, D: TextDisplay, C: Clock = MonotonicClock> {
    reader: SampleReader<B, C>,
    display: D,
}

impl<B: RegisterBus, D: TextDisplay, C: Clock> Session<B, D, C> {
    /// Configures the sensor once and takes ownership of both devices.
    pub fn open(
        bus: B,
        display: D,
        clock: C,
        config: SensorConfig,
    ) -> Result<Self, PulseOxError> {
        let mut sensor = Max30102::new(bus, config);
        sensor.configure()?;

        Ok(Self {
            reader: SampleReader::new(sensor, clock),
            display,
        })
    }

    pub fn read_sample(&mut self) -> Result<Sample, BusError> {
        self.reader.read()
    }

    pub fn render(&mut self, reading: &Reading) -> Result<(), DisplayError> {
        let (hr_x, hr_y) = HEART_RATE_POSITION;
        let (spo2_x, spo2_y) = SPO2_POSITION;

        self.display.clear()?;
        self.display
            .draw_text(hr_x, hr_y, &reading.heart_rate_line())?;
        self.display
            .draw_text(spo2_x, spo2_y, &reading.spo2_line())?;
        self.display.present()
    }
}

impl<B: RegisterBus, D: TextDisplay, C: Clock> Drop for Session<B, D, C> {
    fn drop(&mut self) {
        if let Err(e) = self.reader.sensor().shutdown() {
            warn!("sensor shutdown failed: {e}");
        }
        if let Err(e) = self.display.power_off() {
            warn!("display power off failed: {e}");
        }
        info!("session closed");
    }
}
