//! Dice port so ability rolls can be scripted in tests.

#[cfg_attr(test, mockall::automock)]
pub trait RandomPort: Send + Sync {
    /// Uniform integer in `[min, max]` (inclusive)
    fn gen_range(&self, min: i32, max: i32) -> i32;
}
