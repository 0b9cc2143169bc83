//! Random implementations.

use crate::ports::outbound::RandomPort;

/// System random - uses real randomness.
#[derive(Clone, Default)]
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl RandomPort for SystemRandom {
    fn gen_range(&self, min: i32, max: i32) -> i32 {
        use rand::Rng;
        rand::thread_rng().gen_range(min..=max)
    }
}

/// Replays a fixed list of rolls, cycling when exhausted.
#[cfg(test)]
pub struct ScriptedRandom {
    rolls: Vec<i32>,
    next: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(rolls: impl Into<Vec<i32>>) -> Self {
        Self {
            rolls: rolls.into(),
            next: std::sync::atomic::AtomicUsize::new(0),
        }
    }
}

#[cfg(test)]
impl RandomPort for ScriptedRandom {
    fn gen_range(&self, min: i32, max: i32) -> i32 {
        let i = self
            .next
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        self.rolls[i % self.rolls.len()].clamp(min, max)
    }
}
