mod error;
pub use error::CodecError;

pub mod constants;

mod helpers;

mod sample;
pub use sample::Sample;

mod config;
pub use config::SensorConfig;
