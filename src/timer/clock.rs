//! One-second clock driving a running countdown.
//!
//! Each call to [`Clock::arm`] starts a new generation. Ticks carry the
//! generation they were produced under, and the event loop drops any tick
//! that [`Clock::accepts`] rejects, so a tick already queued when the clock
//! was cancelled never reaches the state machine.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A tick produced by an armed clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTick {
    pub generation: u64,
}

pub trait Clock {
    /// Start delivering ticks. Any previously armed source is cancelled first.
    fn arm(&mut self);
    /// Stop delivering ticks. No-op when not armed.
    fn cancel(&mut self);
    fn is_armed(&self) -> bool;
    /// Whether a tick of the given generation belongs to the live arm.
    fn accepts(&self, generation: u64) -> bool;
}

/// Clock backed by a tokio interval task that feeds ticks into the app's
/// event channel.
pub struct IntervalClock<E> {
    tx: mpsc::UnboundedSender<E>,
    period: Duration,
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

impl<E> IntervalClock<E>
where
    E: From<ClockTick> + Send + 'static,
{
    pub fn new(tx: mpsc::UnboundedSender<E>) -> Self {
        Self {
            tx,
            period: TICK_PERIOD,
            generation: 0,
            handle: None,
        }
    }
}

impl<E> Clock for IntervalClock<E>
where
    E: From<ClockTick> + Send + 'static,
{
    fn arm(&mut self) {
        self.cancel();
        self.generation += 1;
        let generation = self.generation;
        let period = self.period;
        let tx = self.tx.clone();
        // First tick lands one full period after arming.
        let start = tokio::time::Instant::now() + period;
        self.handle = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(start, period);
            loop {
                interval.tick().await;
                if tx.send(E::from(ClockTick { generation })).is_err() {
                    break;
                }
            }
        }));
        debug!(generation, "clock armed");
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!(generation = self.generation, "clock cancelled");
        }
    }

    fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    fn accepts(&self, generation: u64) -> bool {
        self.is_armed() && generation == self.generation
    }
}

impl<E> Drop for IntervalClock<E> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// Clock that never fires on its own. Tests arm it through the app and then
/// feed ticks by hand.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ManualClock {
    pub generation: u64,
    pub armed: bool,
    pub arms: usize,
    pub cancels: usize,
}

#[cfg(test)]
impl ManualClock {
    pub fn tick(&self) -> ClockTick {
        ClockTick {
            generation: self.generation,
        }
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn arm(&mut self) {
        self.cancel();
        self.generation += 1;
        self.armed = true;
        self.arms += 1;
    }

    fn cancel(&mut self) {
        if self.armed {
            self.armed = false;
            self.cancels += 1;
        }
    }

    fn is_armed(&self) -> bool {
        self.armed
    }

    fn accepts(&self, generation: u64) -> bool {
        self.armed && generation == self.generation
    }
}
