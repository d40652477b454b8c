use crate::helpers::stats::{mean_u32, peak_to_peak};

pub struct SpO2Calculator;

impl SpO2Calculator {
    /// Lowest value ever reported for a usable window. The linear model is
    /// uncalibrated, so anything it places lower is shown as this floor.
    pub const DISPLAY_FLOOR: u8 = 90;
    pub const DISPLAY_CEILING: u8 = 100;

    /// Blood oxygen saturation from the ratio of ratios, or 0 when the
    /// window has no pulsatile infrared signal or a zero DC level.
    ///
    /// `R = (red_ac / red_dc) / (ir_ac / ir_dc)`, `SpO2 = 110 - 25 R`,
    /// floored and then clamped to `[90, 100]`.
    pub fn calculate(red: &[u32], infrared: &[u32]) -> u8 {
        let red_ac = f64::from(peak_to_peak(red));
        let ir_ac = f64::from(peak_to_peak(infrared));
        let red_dc = mean_u32(red);
        let ir_dc = mean_u32(infrared);

        if ir_ac == 0.0 || ir_dc == 0.0 || red_dc == 0.0 {
            return 0;
        }

        let r = (red_ac / red_dc) / (ir_ac / ir_dc);
        let spo2 = (110.0 - 25.0 * r).floor().clamp(
            f64::from(Self::DISPLAY_FLOOR),
            f64::from(Self::DISPLAY_CEILING),
        );

        spo2 as u8
    }
}
