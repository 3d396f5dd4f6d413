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

//! Monitoring interface for adaptive step size and temperature control.
//!
//! An adjustment fires in three stages, and each stage has a callback:
//! `on_adjustment_start` receives the statistics of the completed interval,
//! `on_step_adjusted` receives the step size decision, and
//! `on_temperature_adjusted` receives the temperature decision. The statistics
//! passed to all three are those of the interval that is about to be reset.

use crate::{
    report::{StepAdjustment, TemperatureAdjustment},
    stats::AdaptiveStatistics,
};
use hopper_core::num::energy::EnergyNumeric;

/// A monitor for adaptive controllers.
pub trait AdaptiveMonitor<F>
where
    F: EnergyNumeric,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;

    /// Called when an interval completes, before anything is rescaled.
    fn on_adjustment_start(&mut self, statistics: &AdaptiveStatistics);

    /// Called after the step size was rescaled.
    fn on_step_adjusted(
        &mut self,
        adjustment: &StepAdjustment<F>,
        statistics: &AdaptiveStatistics,
    );

    /// Called after the temperature was rescaled.
    fn on_temperature_adjusted(
        &mut self,
        adjustment: &TemperatureAdjustment<F>,
        statistics: &AdaptiveStatistics,
    );
}

impl<F, M> AdaptiveMonitor<F> for Box<M>
where
    F: EnergyNumeric,
    M: AdaptiveMonitor<F> + ?Sized,
{
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn on_adjustment_start(&mut self, statistics: &AdaptiveStatistics) {
        (**self).on_adjustment_start(statistics)
    }

    #[inline]
    fn on_step_adjusted(
        &mut self,
        adjustment: &StepAdjustment<F>,
        statistics: &AdaptiveStatistics,
    ) {
        (**self).on_step_adjusted(adjustment, statistics)
    }

    #[inline]
    fn on_temperature_adjusted(
        &mut self,
        adjustment: &TemperatureAdjustment<F>,
        statistics: &AdaptiveStatistics,
    ) {
        (**self).on_temperature_adjusted(adjustment, statistics)
    }
}

impl<F, M> AdaptiveMonitor<F> for &mut M
where
    F: EnergyNumeric,
    M: AdaptiveMonitor<F> + ?Sized,
{
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn on_adjustment_start(&mut self, statistics: &AdaptiveStatistics) {
        (**self).on_adjustment_start(statistics)
    }

    #[inline]
    fn on_step_adjusted(
        &mut self,
        adjustment: &StepAdjustment<F>,
        statistics: &AdaptiveStatistics,
    ) {
        (**self).on_step_adjusted(adjustment, statistics)
    }

    #[inline]
    fn on_temperature_adjusted(
        &mut self,
        adjustment: &TemperatureAdjustment<F>,
        statistics: &AdaptiveStatistics,
    ) {
        (**self).on_temperature_adjusted(adjustment, statistics)
    }
}

impl<F> std::fmt::Debug for dyn AdaptiveMonitor<F> + '_
where
    F: EnergyNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AdaptiveMonitor {{ name: {} }}", self.name())
    }
}

impl<F> std::fmt::Display for dyn AdaptiveMonitor<F> + '_
where
    F: EnergyNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AdaptiveMonitor: {}", self.name())
    }
}
