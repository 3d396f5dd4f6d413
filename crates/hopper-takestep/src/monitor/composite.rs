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

/// Forwards every event to a list of monitors, in insertion order.
pub struct CompositeAdaptiveMonitor<'a, F>
where
    F: EnergyNumeric,
{
    monitors: Vec<Box<dyn AdaptiveMonitor<F> + 'a>>,
}

impl<'a, F> Default for CompositeAdaptiveMonitor<'a, F>
where
    F: EnergyNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, F> CompositeAdaptiveMonitor<'a, F>
where
    F: EnergyNumeric,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: AdaptiveMonitor<F> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    #[inline]
    pub fn add_boxed_monitor(&mut self, monitor: Box<dyn AdaptiveMonitor<F> + 'a>) {
        self.monitors.push(monitor);
    }

    #[inline]
    pub fn monitors(&self) -> &[Box<dyn AdaptiveMonitor<F> + 'a>] {
        &self.monitors
    }
}

impl<'a, F> AdaptiveMonitor<F> for CompositeAdaptiveMonitor<'a, F>
where
    F: EnergyNumeric,
{
    fn name(&self) -> &str {
        "CompositeAdaptiveMonitor"
    }

    fn on_adjustment_start(&mut self, statistics: &AdaptiveStatistics) {
        for m in &mut self.monitors {
            m.on_adjustment_start(statistics);
        }
    }

    fn on_step_adjusted(
        &mut self,
        adjustment: &StepAdjustment<F>,
        statistics: &AdaptiveStatistics,
    ) {
        for m in &mut self.monitors {
            m.on_step_adjusted(adjustment, statistics);
        }
    }

    fn on_temperature_adjusted(
        &mut self,
        adjustment: &TemperatureAdjustment<F>,
        statistics: &AdaptiveStatistics,
    ) {
        for m in &mut self.monitors {
            m.on_temperature_adjusted(adjustment, statistics);
        }
    }
}

impl<'a, F> std::fmt::Debug for CompositeAdaptiveMonitor<'a, F>
where
    F: EnergyNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.monitors.iter().map(|m| m.name()))
            .finish()
    }
}
