use crate::helpers::stats::{deltas, mean, mean_u32};

pub struct BpmCalculator;

impl BpmCalculator {
    /// A peak needs a neighbour on each side.
    pub const MIN_SAMPLES: usize = 3;

    const MS_PER_MINUTE: f64 = 60_000.0;

    /// Heart rate from the infrared series, or 0 when it cannot be told.
    ///
    /// A peak is a strict local maximum that also sits above the window
    /// mean. The rate comes from the mean spacing of consecutive peaks and
    /// is truncated, not rounded.
    pub fn calculate(infrared: &[u32], timestamps_ms: &[f64]) -> u32 {
        let len = infrared.len().min(timestamps_ms.len());
        if len < Self::MIN_SAMPLES {
            return 0;
        }

        let infrared = &infrared[..len];
        let peaks = Self::peak_times(infrared, &timestamps_ms[..len]);
        if peaks.len() < 2 {
            return 0;
        }

        let avg_interval = mean(&deltas(&peaks));
        if avg_interval <= 0.0 || !avg_interval.is_finite() {
            return 0;
        }

        (Self::MS_PER_MINUTE / avg_interval).floor() as u32
    }

    fn peak_times(infrared: &[u32], timestamps_ms: &[f64]) -> Vec<f64> {
        let threshold = mean_u32(infrared);

        infrared
            .windows(3)
            .enumerate()
            .filter(|(_, w)| w[0] < w[1] && w[2] < w[1] && f64::from(w[1]) > threshold)
            .map(|(i, _)| timestamps_ms[i + 1])
            .collect()
    }
}
