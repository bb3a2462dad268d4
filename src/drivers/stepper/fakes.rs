use super::{HomeSensor, PhaseOutput, PhasePattern, TickSource};
use crate::drivers::time::Atmega328pTick;
use core::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Default)]
pub struct RecordingPort {
    pub writes: Vec<u8>,
}

impl PhaseOutput for RecordingPort {
    fn write(&mut self, pattern: PhasePattern) {
        self.writes.push(pattern.bits());
    }
}

/// Raises its flag on every `period`-th poll, like a free-running timer.
/// Reports a tick period of `TICK_NS`, the Nano's Timer0 by default.
pub struct PolledTicks<const TICK_NS: u32 = 1_024_000> {
    period: u32,
    pub polls: Cell<u32>,
    pub flag: Cell<bool>,
    pub consumed: u32,
}

impl PolledTicks {
    pub fn every(period: u32) -> Self {
        Self::with_period(period)
    }
}

impl<const TICK_NS: u32> PolledTicks<TICK_NS> {
    pub fn with_period(period: u32) -> Self {
        Self {
            period,
            polls: Cell::new(0),
            flag: Cell::new(false),
            consumed: 0,
        }
    }
}

impl<const TICK_NS: u32> TickSource for PolledTicks<TICK_NS> {
    const PERIOD_NS: u32 = TICK_NS;

    fn has_ticked(&self) -> bool {
        let polls = self.polls.get() + 1;
        self.polls.set(polls);
        if polls % self.period == 0 {
            self.flag.set(true);
        }
        self.flag.get()
    }

    fn clear_tick(&mut self) {
        assert!(self.flag.get(), "cleared a tick that never happened");
        self.flag.set(false);
        self.consumed += 1;
    }
}

/// Reports released from the `release_at`-th sample on.
pub struct ReleaseAfter {
    release_at: u32,
    pub samples: u32,
}

impl ReleaseAfter {
    pub fn samples(release_at: u32) -> Self {
        Self {
            release_at,
            samples: 0,
        }
    }

    pub fn never() -> Self {
        Self::samples(u32::MAX)
    }
}

impl HomeSensor for ReleaseAfter {
    fn is_released(&mut self) -> bool {
        self.samples += 1;
        self.samples >= self.release_at
    }
}

/// What the sequencer did, in the order it did it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Write(u8),
    Tick,
    Sample { released: bool },
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

pub struct LoggedPort(pub EventLog);

impl PhaseOutput for LoggedPort {
    fn write(&mut self, pattern: PhasePattern) {
        self.0.borrow_mut().push(Event::Write(pattern.bits()));
    }
}

/// Ticks on every poll; each acknowledged tick is logged.
pub struct LoggedTicks(pub EventLog);

impl TickSource for LoggedTicks {
    const PERIOD_NS: u32 = Atmega328pTick::PERIOD_NS;

    fn has_ticked(&self) -> bool {
        true
    }

    fn clear_tick(&mut self) {
        self.0.borrow_mut().push(Event::Tick);
    }
}

pub struct LoggedSensor {
    pub log: EventLog,
    pub inner: ReleaseAfter,
}

impl HomeSensor for LoggedSensor {
    fn is_released(&mut self) -> bool {
        let released = self.inner.is_released();
        self.log.borrow_mut().push(Event::Sample { released });
        released
    }
}
