//! In-memory devices for exercising the driver and the loop without hardware.

use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    rc::Rc,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};

use crate::{BusError, Clock, DisplayError, RegisterBus, TextDisplay};

#[derive(Default)]
struct BusState {
    writes: Vec<(u8, u8)>,
    reads: Vec<(u8, usize)>,
    blocks: VecDeque<Result<Vec<u8>, BusError>>,
    fail_writes: bool,
    stop_when_drained: Option<Arc<AtomicBool>>,
}

/// Scripted sensor bus. Clones share state so a test can keep a handle
/// after moving the bus into a session.
#[derive(Clone, Default)]
pub struct FakeBus(Rc<RefCell<BusState>>);

fn nack() -> BusError {
    BusError::Io {
        address: 0x57,
        kind: ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address),
    }
}

impl FakeBus {
    pub fn push_block(&self, block: Vec<u8>) {
        self.0.borrow_mut().blocks.push_back(Ok(block));
    }

    pub fn push_error(&self) {
        self.0.borrow_mut().blocks.push_back(Err(nack()));
    }

    pub fn fail_writes(&self) {
        self.0.borrow_mut().fail_writes = true;
    }

    /// Clears `running` once every scripted block has been read.
    pub fn stop_when_drained(&self, running: Arc<AtomicBool>) {
        self.0.borrow_mut().stop_when_drained = Some(running);
    }

    pub fn writes(&self) -> Vec<(u8, u8)> {
        self.0.borrow().writes.clone()
    }

    pub fn reads(&self) -> Vec<(u8, usize)> {
        self.0.borrow().reads.clone()
    }
}

impl RegisterBus for FakeBus {
    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), BusError> {
        let mut state = self.0.borrow_mut();
        if state.fail_writes {
            return Err(nack());
        }
        state.writes.push((reg, value));
        Ok(())
    }

    fn read_block(&mut self, reg: u8, len: usize) -> Result<Vec<u8>, BusError> {
        let mut state = self.0.borrow_mut();
        state.reads.push((reg, len));
        let block = state.blocks.pop_front().unwrap_or_else(|| Err(nack()));
        if state.blocks.is_empty() {
            if let Some(running) = &state.stop_when_drained {
                running.store(false, Ordering::SeqCst);
            }
        }
        block
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayCall {
    Clear,
    Text(i32, i32, String),
    Present,
    PowerOff,
}

#[derive(Clone, Default)]
pub struct FakeDisplay {
    calls: Rc<RefCell<Vec<DisplayCall>>>,
    fail_present: Rc<Cell<bool>>,
}

impl FakeDisplay {
    pub fn calls(&self) -> Vec<DisplayCall> {
        self.calls.borrow().clone()
    }

    pub fn take_calls(&self) -> Vec<DisplayCall> {
        self.calls.take()
    }

    pub fn fail_present(&self) {
        self.fail_present.set(true);
    }
}

impl TextDisplay for FakeDisplay {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.calls.borrow_mut().push(DisplayCall::Clear);
        Ok(())
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) -> Result<(), DisplayError> {
        self.calls
            .borrow_mut()
            .push(DisplayCall::Text(x, y, text.to_string()));
        Ok(())
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        if self.fail_present.get() {
            return Err(DisplayError::Interface("flush failed".into()));
        }
        self.calls.borrow_mut().push(DisplayCall::Present);
        Ok(())
    }

    fn power_off(&mut self) -> Result<(), DisplayError> {
        self.calls.borrow_mut().push(DisplayCall::PowerOff);
        Ok(())
    }
}

/// Returns 0 on the first call and advances by `step_ms` on each next one.
pub struct SteppingClock {
    next: Cell<f64>,
    step_ms: f64,
}

impl SteppingClock {
    pub fn new(step_ms: f64) -> Self {
        Self {
            next: Cell::new(0.0),
            step_ms,
        }
    }
}

impl Clock for SteppingClock {
    fn elapsed_ms(&self) -> f64 {
        let now = self.next.get();
        self.next.set(now + self.step_ms);
        now
    }
}
