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

//! Recording monitor.
//!
//! `HistoryMonitor` keeps every interval's statistics and both adjustment
//! reports in memory. It is meant for post-run analysis of how the step size
//! and temperature evolved, and for asserting on controller behavior in tests.

use crate::{
    monitor::adaptive_monitor::AdaptiveMonitor,
    report::{StepAdjustment, TemperatureAdjustment},
    stats::AdaptiveStatistics,
};
use hopper_core::num::energy::EnergyNumeric;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryMonitor<F>
where
    F: EnergyNumeric,
{
    interval_statistics: Vec<AdaptiveStatistics>,
    step_adjustments: Vec<StepAdjustment<F>>,
    temperature_adjustments: Vec<TemperatureAdjustment<F>>,
}

impl<F> Default for HistoryMonitor<F>
where
    F: EnergyNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<F> HistoryMonitor<F>
where
    F: EnergyNumeric,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            interval_statistics: Vec::new(),
            step_adjustments: Vec::new(),
            temperature_adjustments: Vec::new(),
        }
    }

    /// Statistics of every completed interval, oldest first.
    #[inline]
    pub fn interval_statistics(&self) -> &[AdaptiveStatistics] {
        &self.interval_statistics
    }

    #[inline]
    pub fn step_adjustments(&self) -> &[StepAdjustment<F>] {
        &self.step_adjustments
    }

    #[inline]
    pub fn temperature_adjustments(&self) -> &[TemperatureAdjustment<F>] {
        &self.temperature_adjustments
    }

    /// Step size after the most recent adjustment, if any.
    #[inline]
    pub fn last_step_size(&self) -> Option<F> {
        self.step_adjustments.last().map(|a| a.step_size)
    }

    /// Temperature after the most recent adjustment, if any.
    #[inline]
    pub fn last_temperature(&self) -> Option<F> {
        self.temperature_adjustments.last().map(|a| a.temperature)
    }

    /// Discards everything recorded so far.
    #[inline]
    pub fn clear(&mut self) {
        self.interval_statistics.clear();
        self.step_adjustments.clear();
        self.temperature_adjustments.clear();
    }
}

impl<F> AdaptiveMonitor<F> for HistoryMonitor<F>
where
    F: EnergyNumeric,
{
    fn name(&self) -> &str {
        "HistoryMonitor"
    }

    fn on_adjustment_start(&mut self, statistics: &AdaptiveStatistics) {
        self.interval_statistics.push(*statistics);
    }

    fn on_step_adjusted(
        &mut self,
        adjustment: &StepAdjustment<F>,
        _statistics: &AdaptiveStatistics,
    ) {
        self.step_adjustments.push(*adjustment);
    }

    fn on_temperature_adjusted(
        &mut self,
        adjustment: &TemperatureAdjustment<F>,
        _statistics: &AdaptiveStatistics,
    ) {
        self.temperature_adjustments.push(*adjustment);
    }
}
