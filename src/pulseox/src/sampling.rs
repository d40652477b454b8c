use std::{
    sync::atomic::{AtomicBool, Ordering},
    thread,
    time::Duration,
};

use pulseox_algos::{Reading, RollingWindow};

use crate::{Clock, PulseOxError, RegisterBus, Session, TextDisplay};

/// What to do when a sample cannot be read from the sensor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BusErrorPolicy {
    /// Stop the loop and return the error.
    #[default]
    FailFast,
    /// Log the error and wait for the next cycle.
    SkipCycle,
}

/// Read, estimate, render, sleep. Forever, or until `running` is cleared.
pub struct SamplingLoop {
    window: RollingWindow,
    period: Duration,
    policy: BusErrorPolicy,
}

impl SamplingLoop {
    pub const DEFAULT_PERIOD: Duration = Duration::from_millis(1000);

    pub fn new(period: Duration, policy: BusErrorPolicy) -> Self {
        Self {
            window: RollingWindow::new(),
            period,
            policy,
        }
    }

    pub fn window(&self) -> &RollingWindow {
        &self.window
    }

    pub fn cycle<B, D, C>(&mut self, session: &mut Session<B, D, C>) -> Result<Reading, PulseOxError>
    where
        B: RegisterBus,
        D: TextDisplay,
        C: Clock,
    {
        let sample = session.read_sample()?;
        self.window.push(sample);

        let reading = Reading::from_snapshot(&self.window.snapshot());
        session.render(&reading)?;
        Ok(reading)
    }

    /// The period is slept after each cycle's work, so cycles drift by the
    /// time spent reading and rendering.
    pub fn run<B, D, C>(
        &mut self,
        session: &mut Session<B, D, C>,
        running: &AtomicBool,
    ) -> Result<(), PulseOxError>
    where
        B: RegisterBus,
        D: TextDisplay,
        C: Clock,
    {
        info!(
            "sampling every {}ms, window of {}",
            self.period.as_millis(),
            self.window.capacity()
        );

        while running.load(Ordering::SeqCst) {
            match self.cycle(session) {
                Ok(reading) => println!("{reading}"),
                Err(PulseOxError::Bus(e)) if self.policy == BusErrorPolicy::SkipCycle => {
                    warn!("skipping cycle: {e}");
                }
                Err(e) => return Err(e),
            }

            thread::sleep(self.period);
        }

        info!("sampling stopped");
        Ok(())
    }
}

impl Default for SamplingLoop {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PERIOD, BusErrorPolicy::default())
    }
}
