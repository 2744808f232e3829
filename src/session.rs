/// Session driver — owns the single live `GameState` and the fixed-cadence
/// ticker that advances it.
///
/// Time is always passed in by the caller, so the whole driver can be
/// exercised without sleeping.

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use crate::compute::{start_game, tick};
use crate::consts::TICK_PERIOD;
use crate::entities::{GameState, Phase};
use crate::input::{apply_command, command_for_key};

// ── Ticker ───────────────────────────────────────────────────────────────────

/// Fixed-period tick source.  Late polls are not compensated: a poll that
/// arrives after several periods still yields a single tick, and the next
/// deadline is measured from that poll.
#[derive(Clone, Debug)]
pub struct Ticker {
    period: Duration,
    next_due: Instant,
}

impl Ticker {
    /// First tick is due one period after `now`.
    pub fn new(period: Duration, now: Instant) -> Self {
        Ticker {
            period,
            next_due: now + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due = now + self.period;
        true
    }

    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}

// ── Session ──────────────────────────────────────────────────────────────────

/// One game at a time.  The ticker is armed exactly while the game is
/// running; key events are only routed to the game while it is armed.
#[derive(Debug, Default)]
pub struct Session {
    state: GameState,
    ticker: Option<Ticker>,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    /// Read-only view for the renderer.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.ticker.as_ref().map(Ticker::next_due)
    }

    /// Throw away whatever was there and begin a new game.
    pub fn start(&mut self, now: Instant) {
        self.state = start_game();
        self.ticker = Some(Ticker::new(TICK_PERIOD, now));
    }

    /// Returns `true` if the key was a gameplay key and was applied.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.ticker.is_none() {
            return false;
        }
        match command_for_key(code) {
            Some(command) => {
                self.state = apply_command(&self.state, command);
                true
            }
            None => false,
        }
    }

    /// Run one tick if one is due.  Returns `true` if the state advanced.
    pub fn update(&mut self, now: Instant) -> bool {
        let due = match self.ticker.as_mut() {
            Some(ticker) => ticker.poll(now),
            None => false,
        };
        if !due {
            return false;
        }
        self.state = tick(&self.state);
        if self.state.phase != Phase::Running {
            self.ticker = None;
        }
        true
    }

    /// External teardown: stop the timer and detach input.  The state stays
    /// readable but will not change until the next `start`.
    pub fn stop(&mut self) {
        if self.ticker.take().is_some() {
            log::debug!("session stopped at frame {}", self.state.frame);
        }
    }
}
