// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Per-interval statistics of an adaptive basin-hopping controller.
//!
//! `AdaptiveStatistics` accumulates the outcome of every counted trial since
//! the last adjustment: how many trials were attempted, how many the accept
//! test accepted, and how many ended in the same minimum as the reference
//! point. The derived ratios feed the two feedback rules. The fraction of
//! trials that reached a different minimum steers the step size, and the
//! acceptance rate among those trials steers the temperature.
//!
//! Counters use saturating arithmetic and are reset together, so the
//! invariants `accepted <= attempts` and `same_minimum <= attempts` hold at
//! every point of a run.

use hopper_core::num::counter::{SaturatingAddVal, SaturatingSubVal};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AdaptiveStatistics {
    /// Number of counted trials since the last reset.
    attempts: u64,

    /// Number of counted trials the accept test accepted.
    accepted: u64,

    /// Number of counted trials that ended in the reference minimum.
    same_minimum: u64,
}

impl AdaptiveStatistics {
    /// Creates zeroed statistics.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of one trial.
    #[inline]
    pub fn on_attempt(&mut self, accepted: bool, same_minimum: bool) {
        self.attempts = self.attempts.saturating_add_val(1);
        if accepted {
            self.accepted = self.accepted.saturating_add_val(1);
        }
        if same_minimum {
            self.same_minimum = self.same_minimum.saturating_add_val(1);
        }
    }

    /// Zeroes all counters.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[inline]
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    #[inline]
    pub fn accepted(&self) -> u64 {
        self.accepted
    }

    #[inline]
    pub fn same_minimum(&self) -> u64 {
        self.same_minimum
    }

    /// Number of trials that reached a minimum different from the reference.
    #[inline]
    pub fn different_minimum(&self) -> u64 {
        self.attempts.saturating_sub_val(self.same_minimum)
    }

    /// Accepted trials minus same-minimum trials.
    ///
    /// This is an estimate of the accepted trials among those that reached a
    /// new minimum, assuming every same-minimum trial was accepted. It is
    /// negative when same-minimum trials were rejected.
    #[inline]
    pub fn accepted_different(&self) -> i64 {
        self.accepted as i64 - self.same_minimum as i64
    }

    /// Returns `true` if no trial has been counted since the last reset.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attempts == 0
    }

    /// Fraction of counted trials that were accepted, or `0` without trials.
    #[inline]
    pub fn acceptance_ratio(&self) -> f64 {
        if self.attempts == 0 {
            return 0.0;
        }
        self.accepted as f64 / self.attempts as f64
    }

    /// Fraction of counted trials that reached a different minimum,
    /// `1 - same_minimum / attempts`, or `0` without trials.
    #[inline]
    pub fn new_minimum_ratio(&self) -> f64 {
        if self.attempts == 0 {
            return 0.0;
        }
        1.0 - self.same_minimum as f64 / self.attempts as f64
    }

    /// Acceptance rate among trials that reached a different minimum.
    /// Defined as `1` when no trial reached a different minimum.
    #[inline]
    pub fn new_minimum_accept_ratio(&self) -> f64 {
        let different = self.different_minimum();
        if different == 0 {
            return 1.0;
        }
        self.accepted_different() as f64 / different as f64
    }
}

impl std::fmt::Display for AdaptiveStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Hopper Adaptive Statistics:")?;
        writeln!(f, "   Attempts:             {}", self.attempts)?;
        writeln!(f, "   Accepted:             {}", self.accepted)?;
        writeln!(f, "   Same Minimum:         {}", self.same_minimum)?;
        writeln!(f, "   Different Minimum:    {}", self.different_minimum())?;
        writeln!(f, "   Accepted Different:   {}", self.accepted_different())?;
        writeln!(f, "   Acceptance Ratio:     {:.4}", self.acceptance_ratio())?;
        Ok(())
    }
}
