use embedded_hal::i2c::ErrorKind;
use pulseox_codec::CodecError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BusError {
    #[error("i2c transfer to 0x{address:02X} failed: {kind}")]
    Io { address: u8, kind: ErrorKind },
    #[error("invalid fifo block: {0}")]
    Decode(#[from] CodecError),
}

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("display interface error: {0}")]
    Interface(String),
}

#[derive(Debug, Error)]
pub enum PulseOxError {
    #[error("sensor: {0}")]
    Bus(#[from] BusError),
    #[error("display: {0}")]
    Display(#[from] DisplayError),
}
