//! Tasbeeh (dhikr) counter.

use crate::error::ContentError;

/// Customary round length.
pub const DEFAULT_TASBEEH_TARGET: u32 = 33;

/// Result of one tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TasbeehEvent {
    /// Count advanced within the current round.
    Counted(u32),
    /// Count reached the target and wrapped to zero; carries the new round total.
    RoundComplete(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tasbeeh {
    count: u32,
    target: u32,
    rounds: u32,
}

impl Tasbeeh {
    pub fn new(target: u32) -> Result<Self, ContentError> {
        if target == 0 {
            return Err(ContentError::InvalidTarget);
        }
        Ok(Self {
            count: 0,
            target,
            rounds: 0,
        })
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Total taps since the last reset.
    pub fn total(&self) -> u64 {
        u64::from(self.rounds) * u64::from(self.target) + u64::from(self.count)
    }

    pub fn increment(&mut self) -> TasbeehEvent {
        self.count += 1;
        if self.count >= self.target {
            self.count = 0;
            self.rounds = self.rounds.saturating_add(1);
            TasbeehEvent::RoundComplete(self.rounds)
        } else {
            TasbeehEvent::Counted(self.count)
        }
    }

    pub fn reset(&mut self) {
        self.count = 0;
        self.rounds = 0;
    }

    /// Change the round length. Resets the counter.
    pub fn set_target(&mut self, target: u32) -> Result<(), ContentError> {
        *self = Self::new(target)?;
        Ok(())
    }
}

impl Default for Tasbeeh {
    fn default() -> Self {
        Self {
            count: 0,
            target: DEFAULT_TASBEEH_TARGET,
            rounds: 0,
        }
    }
}
