//! The one recurring callback the host event loop drives.
//!
//! Arming hands out a [`TickToken`]; cancelling bumps the generation, so a
//! callback that was already queued when the timer paused or reset presents a
//! stale token and is dropped instead of ticking.

use std::time::Duration;

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickToken(u64);

#[derive(Debug, Default)]
pub struct Ticker {
    generation: u64,
    armed: bool,
}

impl Ticker {
    pub fn arm(&mut self) -> TickToken {
        self.generation += 1;
        self.armed = true;
        TickToken(self.generation)
    }

    pub fn cancel(&mut self) {
        if self.armed {
            self.generation += 1;
            self.armed = false;
        }
    }

    /// Token for the live schedule, if any.
    pub fn token(&self) -> Option<TickToken> {
        self.armed.then_some(TickToken(self.generation))
    }

    pub fn accepts(&self, token: TickToken) -> bool {
        self.armed && token.0 == self.generation
    }
}
