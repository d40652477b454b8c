//! MAX30102 register map and the fixed values this daemon writes to it.

/// Default 7-bit I2C address of the MAX30102.
pub const SENSOR_ADDRESS: u8 = 0x57;

/// Default 7-bit I2C address of the SSD1306 panel.
pub const DISPLAY_ADDRESS: u8 = 0x3C;

pub const DEFAULT_I2C_BUS: &str = "/dev/i2c-1";

/// Bytes in one FIFO sample: 3 for red, 3 for infrared.
pub const FIFO_BLOCK_LEN: usize = 6;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    FifoData = 0x07,
    FifoConfig = 0x08,
    ModeConfig = 0x09,
    SpO2Config = 0x0A,
    Led1PulseAmplitude = 0x0C,
    Led2PulseAmplitude = 0x0D,
}

impl Register {
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Mode register: red and IR LEDs active.
pub const MODE_SPO2: u8 = 0x03;

/// Mode register SHDN bit.
pub const MODE_SHUTDOWN: u8 = 0x80;

/// 18-bit ADC resolution, 100 samples per second.
pub const SPO2_CONFIG_18BIT_100HZ: u8 = 0x27;

/// Roughly 7 mA per LED.
pub const LED_PULSE_AMPLITUDE: u8 = 0x24;

/// Sample averaging off, FIFO rollover on, almost-full at 15 samples.
pub const FIFO_CONFIG: u8 = 0x4F;
