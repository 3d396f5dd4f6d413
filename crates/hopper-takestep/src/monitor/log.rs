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

//! Human-readable status output for adaptive controllers.
//!
//! `LogMonitor` prints one line with the interval's acceptance probability,
//! one line with the trial counts and the new step size, and one line with the
//! new temperature. Output goes to stdout unless another writer is supplied.
//! Write failures are ignored; status lines are advisory.

use crate::{
    monitor::adaptive_monitor::AdaptiveMonitor,
    report::{StepAdjustment, TemperatureAdjustment},
    stats::AdaptiveStatistics,
};
use hopper_core::num::energy::EnergyNumeric;
use std::io::{Stdout, Write};

#[derive(Debug)]
pub struct LogMonitor<W = Stdout>
where
    W: Write,
{
    writer: W,
    adjustments: u64,
}

impl LogMonitor<Stdout> {
    /// Creates a monitor that prints to stdout.
    #[inline]
    pub fn new() -> Self {
        Self::with_writer(std::io::stdout())
    }
}

impl Default for LogMonitor<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> LogMonitor<W>
where
    W: Write,
{
    /// Creates a monitor that writes to `writer`.
    #[inline]
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            adjustments: 0,
        }
    }

    /// Number of adjustments logged so far.
    #[inline]
    pub fn adjustments(&self) -> u64 {
        self.adjustments
    }

    #[inline]
    pub fn writer(&self) -> &W {
        &self.writer
    }

    #[inline]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<F, W> AdaptiveMonitor<F> for LogMonitor<W>
where
    F: EnergyNumeric,
    W: Write,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_adjustment_start(&mut self, statistics: &AdaptiveStatistics) {
        self.adjustments += 1;
        let _ = writeln!(
            self.writer,
            "acceptance probability {:.3e}",
            statistics.acceptance_ratio()
        );
    }

    fn on_step_adjusted(
        &mut self,
        adjustment: &StepAdjustment<F>,
        statistics: &AdaptiveStatistics,
    ) {
        let _ = writeln!(
            self.writer,
            "naccept nsame ndiff, naccept_diff {} {} {} {}",
            statistics.accepted(),
            statistics.same_minimum(),
            statistics.different_minimum(),
            statistics.accepted_different()
        );
        let _ = writeln!(self.writer, "{}", adjustment);
    }

    fn on_temperature_adjusted(
        &mut self,
        adjustment: &TemperatureAdjustment<F>,
        _statistics: &AdaptiveStatistics,
    ) {
        let _ = writeln!(self.writer, "{}", adjustment);
    }
}

impl<W> std::fmt::Display for LogMonitor<W>
where
    W: Write,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LogMonitor(adjustments: {})", self.adjustments)
    }
}
