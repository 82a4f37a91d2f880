//! Run settings for the headless driver
//!
//! The core only ever advances one step per call; `Engine` tells the driver
//! how many calls to make and how often to report progress.

/// Step count of the reference run: 22 years of one-day steps
pub const REFERENCE_STEPS: usize = 22 * 365;

#[derive(Debug, Clone)]
pub struct Engine {
    pub steps: usize, // number of step() calls
    pub report_every: usize, // log progress every n steps, 0 = never
}

impl Engine {
    /// True if progress should be reported after step number `step` (1-based)
    pub fn should_report(&self, step: usize) -> bool {
        self.report_every != 0 && (step % self.report_every == 0 || step == self.steps)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            steps: REFERENCE_STEPS,
            report_every: 365,
        }
    }
}
