pub(crate) mod window;
pub use window::{RollingWindow, WindowSnapshot};

pub(crate) mod bpm;
pub use bpm::BpmCalculator;

pub(crate) mod spo2;
pub use spo2::SpO2Calculator;

pub(crate) mod reading;
pub use reading::Reading;

pub mod helpers;
