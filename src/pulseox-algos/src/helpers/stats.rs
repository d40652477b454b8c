pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0_f64
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

pub fn mean_u32(values: &[u32]) -> f64 {
    if values.is_empty() {
        0_f64
    } else {
        values.iter().map(|&v| f64::from(v)).sum::<f64>() / values.len() as f64
    }
}

/// Peak-to-peak spread, zero for an empty series.
pub fn peak_to_peak(values: &[u32]) -> u32 {
    let min = values.iter().min().copied().unwrap_or_default();
    let max = values.iter().max().copied().unwrap_or_default();
    max - min
}

/// Differences between neighbouring values, oldest first.
pub fn deltas(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|w| w[1] - w[0]).collect()
}
