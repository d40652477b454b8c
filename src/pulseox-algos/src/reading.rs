use std::fmt;

use crate::{BpmCalculator, SpO2Calculator, WindowSnapshot};

/// Vital signs derived from one window snapshot. Zero means unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reading {
    pub bpm: u32,
    pub spo2: u8,
}

impl Reading {
    pub fn from_snapshot(snapshot: &WindowSnapshot) -> Self {
        Self {
            bpm: BpmCalculator::calculate(&snapshot.infrared, &snapshot.timestamps_ms),
            spo2: SpO2Calculator::calculate(&snapshot.red, &snapshot.infrared),
        }
    }

    pub fn heart_rate_line(&self) -> String {
        format!("HR: {} BPM", self.bpm)
    }

    pub fn spo2_line(&self) -> String {
        format!("SpO2: {}%", self.spo2)
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BPM: {}, SpO2: {}", self.bpm, self.spo2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RollingWindow;
    use pulseox_codec::Sample;

    fn reference_window() -> RollingWindow {
        let red = [100, 120, 140, 120, 100, 100, 120, 140, 120, 100];
        let ir = [200, 250, 300, 250, 200, 200, 250, 300, 250, 200];

        let mut window = RollingWindow::new();
        for (i, (&r, &ir)) in red.iter().zip(ir.iter()).enumerate() {
            window.push(Sample::new(r, ir, i as f64 * 200.0));
        }
        window
    }

    #[test]
    fn reference_sequence() {
        let reading = Reading::from_snapshot(&reference_window().snapshot());
        assert_eq!(reading, Reading { bpm: 60, spo2: 90 });
    }

    #[test]
    fn snapshot_can_be_read_twice() {
        let snapshot = reference_window().snapshot();
        assert_eq!(
            Reading::from_snapshot(&snapshot),
            Reading::from_snapshot(&snapshot)
        );
    }

    #[test]
    fn single_sample_is_unknown() {
        let mut window = RollingWindow::new();
        window.push(Sample::new(100, 200, 0.0));
        assert_eq!(Reading::from_snapshot(&window.snapshot()), Reading::default());
    }

    #[test]
    fn display_lines() {
        let reading = Reading { bpm: 72, spo2: 97 };
        assert_eq!(reading.heart_rate_line(), "HR: 72 BPM");
        assert_eq!(reading.spo2_line(), "SpO2: 97%");
        assert_eq!(reading.to_string(), "BPM: 72, SpO2: 97");
    }
}
