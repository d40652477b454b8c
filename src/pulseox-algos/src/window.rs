use std::collections::VecDeque;

use pulseox_codec::Sample;

/// Fixed-capacity FIFO of the most recent samples.
///
/// Samples are stored as whole records, so the red, infrared and timestamp
/// series handed out by [`RollingWindow::snapshot`] are always the same
/// length and index-aligned.
#[derive(Debug, Clone)]
pub struct RollingWindow {
    samples: VecDeque<Sample>,
    capacity: usize,
}

/// Owned copy of the window contents split into parallel series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindowSnapshot {
    pub red: Vec<u32>,
    pub infrared: Vec<u32>,
    pub timestamps_ms: Vec<f64>,
}

impl RollingWindow {
    pub const CAPACITY: usize = 10;

    pub fn new() -> Self {
        Self::with_capacity(Self::CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Appends `sample`, evicting exactly one oldest sample once full.
    pub fn push(&mut self, sample: Sample) {
        self.samples.push_back(sample);
        if self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    pub fn snapshot(&self) -> WindowSnapshot {
        let mut snapshot = WindowSnapshot {
            red: Vec::with_capacity(self.len()),
            infrared: Vec::with_capacity(self.len()),
            timestamps_ms: Vec::with_capacity(self.len()),
        };

        for sample in &self.samples {
            snapshot.red.push(sample.red);
            snapshot.infrared.push(sample.infrared);
            snapshot.timestamps_ms.push(sample.timestamp_ms);
        }

        snapshot
    }
}

impl Default for RollingWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowSnapshot {
    pub fn len(&self) -> usize {
        self.timestamps_ms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps_ms.is_empty()
    }
}
