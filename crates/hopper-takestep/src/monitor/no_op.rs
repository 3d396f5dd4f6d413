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

use crate::{
    monitor::adaptive_monitor::AdaptiveMonitor,
    report::{StepAdjustment, TemperatureAdjustment},
    stats::AdaptiveStatistics,
};
use hopper_core::num::energy::EnergyNumeric;

/// A monitor that ignores every event.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NoOperationMonitor {
    _private: (),
}

impl NoOperationMonitor {
    #[inline(always)]
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl<F> AdaptiveMonitor<F> for NoOperationMonitor
where
    F: EnergyNumeric,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "NoOperationMonitor"
    }

    #[inline(always)]
    fn on_adjustment_start(&mut self, _statistics: &AdaptiveStatistics) {}

    #[inline(always)]
    fn on_step_adjusted(
        &mut self,
        _adjustment: &StepAdjustment<F>,
        _statistics: &AdaptiveStatistics,
    ) {
    }

    #[inline(always)]
    fn on_temperature_adjusted(
        &mut self,
        _adjustment: &TemperatureAdjustment<F>,
        _statistics: &AdaptiveStatistics,
    ) {
    }
}
