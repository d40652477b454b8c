use crate::constants::{
    FIFO_CONFIG, LED_PULSE_AMPLITUDE, MODE_SHUTDOWN, MODE_SPO2, Register, SPO2_CONFIG_18BIT_100HZ,
};

/// Register values written once when the sensor is brought up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorConfig {
    pub mode: u8,
    pub spo2: u8,
    pub red_led: u8,
    pub ir_led: u8,
    pub fifo: u8,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            mode: MODE_SPO2,
            spo2: SPO2_CONFIG_18BIT_100HZ,
            red_led: LED_PULSE_AMPLITUDE,
            ir_led: LED_PULSE_AMPLITUDE,
            fifo: FIFO_CONFIG,
        }
    }
}

impl SensorConfig {
    /// Writes in the order the sensor expects them: mode first, FIFO last.
    pub fn register_writes(&self) -> [(Register, u8); 5] {
        [
            (Register::ModeConfig, self.mode),
            (Register::SpO2Config, self.spo2),
            (Register::Led1PulseAmplitude, self.red_led),
            (Register::Led2PulseAmplitude, self.ir_led),
            (Register::FifoConfig, self.fifo),
        ]
    }

    pub fn shutdown_mode(&self) -> (Register, u8) {
        (Register::ModeConfig, self.mode | MODE_SHUTDOWN)
    }
}
