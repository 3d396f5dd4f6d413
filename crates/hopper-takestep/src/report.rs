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

//! Outcomes of the adaptive feedback loop.
//!
//! Every adjustment produces one `StepAdjustment` and one
//! `TemperatureAdjustment`. They record the direction of the change, the
//! multiplicative factor that was applied, the resulting value, and the ratio
//! that triggered the decision. `update_step` wraps them in an `UpdateOutcome`
//! so that callers and tests can observe what happened without a monitor.

use hopper_core::num::energy::EnergyNumeric;

/// Whether a controlled quantity went up or down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdjustmentDirection {
    Increased,
    Decreased,
}

impl std::fmt::Display for AdjustmentDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdjustmentDirection::Increased => write!(f, "Increased"),
            AdjustmentDirection::Decreased => write!(f, "Decreased"),
        }
    }
}

/// A rescaling of the wrapped strategy's step size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepAdjustment<F>
where
    F: EnergyNumeric,
{
    pub direction: AdjustmentDirection,
    /// The factor passed to `StepStrategy::scale`.
    pub factor: F,
    /// The step size after scaling.
    pub step_size: F,
    /// Fraction of trials in the interval that reached a new minimum.
    pub new_minimum_ratio: f64,
}

impl<F> std::fmt::Display for StepAdjustment<F>
where
    F: EnergyNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "stepsize    is now {:.3e} ratio {:.3e}",
            self.step_size.to_f64_lossy(),
            self.new_minimum_ratio
        )
    }
}

/// A rescaling of the accept test's temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureAdjustment<F>
where
    F: EnergyNumeric,
{
    pub direction: AdjustmentDirection,
    /// The factor the temperature was multiplied by.
    pub factor: F,
    /// The temperature after scaling.
    pub temperature: F,
    /// Acceptance rate among trials that reached a new minimum.
    pub new_minimum_accept_ratio: f64,
}

impl<F> std::fmt::Display for TemperatureAdjustment<F>
where
    F: EnergyNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "temperature is now {:.3e} ratio {:.3e}",
            self.temperature.to_f64_lossy(),
            self.new_minimum_accept_ratio
        )
    }
}

/// What a single `update_step` call did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpdateOutcome<F>
where
    F: EnergyNumeric,
{
    /// The very first report: the trial became the reference minimum and no
    /// statistics were counted.
    FirstObservation,
    /// The trial was counted; no adjustment was due.
    Recorded { same_minimum: bool },
    /// The trial completed an interval and both parameters were rescaled.
    Adjusted {
        step: StepAdjustment<F>,
        temperature: TemperatureAdjustment<F>,
    },
}

impl<F> UpdateOutcome<F>
where
    F: EnergyNumeric,
{
    /// Returns `true` if this update triggered an adjustment.
    #[inline]
    pub fn is_adjusted(&self) -> bool {
        matches!(self, UpdateOutcome::Adjusted { .. })
    }
}
