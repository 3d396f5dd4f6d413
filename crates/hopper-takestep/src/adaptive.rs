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

//! Adaptive step size and temperature control for basin hopping.
//!
//! `AdaptiveStepTemperature` wraps a `StepStrategy` and is driven by the
//! basin-hopping loop through two calls. `take_step` proposes a trial move by
//! delegating to the wrapped strategy. `update_step` reports the outcome of
//! the trial once it has been minimized and passed through the accept test.
//!
//! The controller compares every trial's energy with a reference minimum. A
//! trial within `energy_tolerance` of the reference counts as "same minimum";
//! any other trial is a new minimum and becomes the new reference. The very
//! first report only establishes the reference and is not counted.
//!
//! Every `interval` counted attempts two feedback rules fire:
//!
//! - Step size. If the fraction of trials that reached a new minimum is below
//!   `target_new_min_prob`, the step size is divided by `step_factor` (grown);
//!   otherwise it is multiplied by it (shrunk).
//! - Temperature. If the acceptance rate among new-minimum trials exceeds
//!   `target_new_min_accept_prob`, the accept test's temperature is multiplied
//!   by `temperature_factor` (cooled); otherwise it is divided by it (heated).
//!   Without any new-minimum trial the rate counts as `1`.
//!
//! The per-interval counters are then reset. The total number of reports is
//! tracked separately and never reset.
//!
//! Minima are distinguished by energy alone. The reference coordinates are
//! retained as an owned copy for inspection but take no part in the test.

use crate::{
    config::AdaptiveConfig,
    driver::{DriverState, TemperatureControl},
    monitor::{adaptive_monitor::AdaptiveMonitor, log::LogMonitor, no_op::NoOperationMonitor},
    report::{AdjustmentDirection, StepAdjustment, TemperatureAdjustment, UpdateOutcome},
    stats::AdaptiveStatistics,
    strategy::StepStrategy,
};
use hopper_core::num::{counter::SaturatingAddVal, energy::EnergyNumeric};

/// The monitor installed by `AdaptiveStepTemperature::new`.
pub type DefaultMonitor<F> = Box<dyn AdaptiveMonitor<F>>;

/// Feedback controller that rescales a step strategy's step size and an
/// accept test's temperature towards target statistics.
pub struct AdaptiveStepTemperature<F, S, M = DefaultMonitor<F>>
where
    F: EnergyNumeric,
{
    strategy: S,
    config: AdaptiveConfig<F>,
    monitor: M,
    last_energy: Option<F>,
    last_coords: Option<Vec<F>>,
    statistics: AdaptiveStatistics,
    total_calls: u64,
}

impl<F, S> AdaptiveStepTemperature<F, S>
where
    F: EnergyNumeric,
    S: StepStrategy<F>,
{
    /// Creates a controller around `strategy`.
    ///
    /// Status lines are printed to stdout if the configuration is verbose;
    /// otherwise adjustments are silent.
    pub fn new(strategy: S, config: AdaptiveConfig<F>) -> Self {
        let monitor: DefaultMonitor<F> = if config.verbose() {
            Box::new(LogMonitor::new())
        } else {
            Box::new(NoOperationMonitor::new())
        };
        Self::with_monitor(strategy, config, monitor)
    }
}

impl<F, S, M> AdaptiveStepTemperature<F, S, M>
where
    F: EnergyNumeric,
    S: StepStrategy<F>,
    M: AdaptiveMonitor<F>,
{
    /// Creates a controller that reports every adjustment to `monitor`.
    #[inline]
    pub fn with_monitor(strategy: S, config: AdaptiveConfig<F>, monitor: M) -> Self {
        Self {
            strategy,
            config,
            monitor,
            last_energy: None,
            last_coords: None,
            statistics: AdaptiveStatistics::new(),
            total_calls: 0,
        }
    }

    /// Proposes a trial move by delegating to the wrapped strategy.
    #[inline]
    pub fn take_step(&mut self, coords: &mut [F]) {
        self.strategy.take_step(coords);
    }

    /// Reports the outcome of the most recent trial.
    ///
    /// `accepted` is the accept test's verdict and `driver` exposes the
    /// trial's minimum. When the report completes an interval, the step size
    /// and the temperature of `driver`'s accept test are rescaled and the
    /// per-interval statistics are reset.
    pub fn update_step<D>(&mut self, accepted: bool, driver: &mut D) -> UpdateOutcome<F>
    where
        D: DriverState<F>,
    {
        self.total_calls = self.total_calls.saturating_add_val(1);
        let trial_energy = driver.trial_energy();

        let Some(last_energy) = self.last_energy else {
            self.record_reference(trial_energy, driver.trial_coords());
            return UpdateOutcome::FirstObservation;
        };

        let same_minimum = (last_energy - trial_energy).abs() <= self.config.energy_tolerance();
        self.statistics.on_attempt(accepted, same_minimum);

        if !same_minimum {
            self.record_reference(trial_energy, driver.trial_coords());
        }

        if self.statistics.attempts() % self.config.interval() != 0 {
            return UpdateOutcome::Recorded { same_minimum };
        }

        self.monitor.on_adjustment_start(&self.statistics);
        let step = self.adjust_step();
        let temperature = self.adjust_temperature(driver);
        self.reset();

        UpdateOutcome::Adjusted { step, temperature }
    }

    /// Rescales the wrapped strategy's step size from the current statistics.
    ///
    /// Without counted attempts the new-minimum ratio is `0`, which grows the
    /// step size.
    pub fn adjust_step(&mut self) -> StepAdjustment<F> {
        let new_minimum_ratio = self.statistics.new_minimum_ratio();
        let step_factor = self.config.step_factor();

        let (direction, factor) = if new_minimum_ratio < self.config.target_new_min_prob() {
            (AdjustmentDirection::Increased, F::one() / step_factor)
        } else {
            (AdjustmentDirection::Decreased, step_factor)
        };
        self.strategy.scale(factor);

        let adjustment = StepAdjustment {
            direction,
            factor,
            step_size: self.strategy.step_size(),
            new_minimum_ratio,
        };
        self.monitor.on_step_adjusted(&adjustment, &self.statistics);
        adjustment
    }

    /// Rescales the temperature of `driver`'s accept test from the current
    /// statistics.
    pub fn adjust_temperature<D>(&mut self, driver: &mut D) -> TemperatureAdjustment<F>
    where
        D: DriverState<F>,
    {
        let accept_ratio = self.statistics.new_minimum_accept_ratio();
        let temperature_factor = self.config.temperature_factor();
        let accept_test = driver.accept_test_mut();
        let temperature = accept_test.temperature();

        let (direction, factor, new_temperature) =
            if accept_ratio > self.config.target_new_min_accept_prob() {
                (
                    AdjustmentDirection::Decreased,
                    temperature_factor,
                    temperature * temperature_factor,
                )
            } else {
                (
                    AdjustmentDirection::Increased,
                    F::one() / temperature_factor,
                    temperature / temperature_factor,
                )
            };
        accept_test.set_temperature(new_temperature);

        let adjustment = TemperatureAdjustment {
            direction,
            factor,
            temperature: new_temperature,
            new_minimum_accept_ratio: accept_ratio,
        };
        self.monitor.on_temperature_adjusted(&adjustment, &self.statistics);
        adjustment
    }

    /// Zeroes the per-interval counters.
    ///
    /// The reference minimum and the total call count are kept.
    #[inline]
    pub fn reset(&mut self) {
        self.statistics.reset();
    }

    #[inline]
    fn record_reference(&mut self, energy: F, coords: &[F]) {
        self.last_energy = Some(energy);
        match &mut self.last_coords {
            Some(buffer) => {
                buffer.clear();
                buffer.extend_from_slice(coords);
            }
            None => self.last_coords = Some(coords.to_vec()),
        }
    }

    #[inline]
    pub fn config(&self) -> &AdaptiveConfig<F> {
        &self.config
    }

    /// Statistics of the interval in progress.
    #[inline]
    pub fn statistics(&self) -> &AdaptiveStatistics {
        &self.statistics
    }

    /// Number of `update_step` calls over the whole run.
    #[inline]
    pub fn total_calls(&self) -> u64 {
        self.total_calls
    }

    /// Energy of the reference minimum, if one was reported yet.
    #[inline]
    pub fn last_energy(&self) -> Option<F> {
        self.last_energy
    }

    /// Coordinates of the reference minimum, if one was reported yet.
    #[inline]
    pub fn last_coords(&self) -> Option<&[F]> {
        self.last_coords.as_deref()
    }

    #[inline]
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    #[inline]
    pub fn strategy_mut(&mut self) -> &mut S {
        &mut self.strategy
    }

    #[inline]
    pub fn monitor(&self) -> &M {
        &self.monitor
    }

    #[inline]
    pub fn monitor_mut(&mut self) -> &mut M {
        &mut self.monitor
    }

    /// Consumes the controller and returns the wrapped strategy.
    #[inline]
    pub fn into_inner(self) -> S {
        self.strategy
    }
}

impl<F, S, M> StepStrategy<F> for AdaptiveStepTemperature<F, S, M>
where
    F: EnergyNumeric,
    S: StepStrategy<F>,
    M: AdaptiveMonitor<F>,
{
    fn name(&self) -> &str {
        "AdaptiveStepTemperature"
    }

    #[inline]
    fn take_step(&mut self, coords: &mut [F]) {
        self.strategy.take_step(coords);
    }

    #[inline]
    fn step_size(&self) -> F {
        self.strategy.step_size()
    }

    #[inline]
    fn scale(&mut self, factor: F) {
        self.strategy.scale(factor);
    }
}

impl<F, S, M> std::fmt::Debug for AdaptiveStepTemperature<F, S, M>
where
    F: EnergyNumeric,
    S: std::fmt::Debug,
    M: AdaptiveMonitor<F>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdaptiveStepTemperature")
            .field("strategy", &self.strategy)
            .field("config", &self.config)
            .field("monitor", &self.monitor.name())
            .field("last_energy", &self.last_energy)
            .field("statistics", &self.statistics)
            .field("total_calls", &self.total_calls)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::AdaptiveConfigBuilder, driver::TrialState, monitor::history::HistoryMonitor,
    };
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[derive(Debug, Clone, PartialEq)]
    struct ShiftStep {
        step_size: f64,
        steps_taken: usize,
    }

    impl ShiftStep {
        fn new(step_size: f64) -> Self {
            Self {
                step_size,
                steps_taken: 0,
            }
        }
    }

    impl StepStrategy<f64> for ShiftStep {
        fn name(&self) -> &str {
            "ShiftStep"
        }

        fn take_step(&mut self, coords: &mut [f64]) {
            self.steps_taken += 1;
            for x in coords.iter_mut() {
                *x += self.step_size;
            }
        }

        fn step_size(&self) -> f64 {
            self.step_size
        }

        fn scale(&mut self, factor: f64) {
            self.step_size *= factor;
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Thermostat(f64);

    impl TemperatureControl<f64> for Thermostat {
        fn temperature(&self) -> f64 {
            self.0
        }

        fn set_temperature(&mut self, temperature: f64) {
            self.0 = temperature;
        }
    }

    type TestController = AdaptiveStepTemperature<f64, ShiftStep, HistoryMonitor<f64>>;

    fn controller(interval: u64) -> TestController {
        let config = AdaptiveConfigBuilder::new()
            .with_interval(interval)
            .with_verbose(false)
            .build()
            .expect("valid configuration");
        AdaptiveStepTemperature::with_monitor(ShiftStep::new(0.4), config, HistoryMonitor::new())
    }

    fn report(
        controller: &mut TestController,
        thermostat: &mut Thermostat,
        accepted: bool,
        energy: f64,
    ) -> UpdateOutcome<f64> {
        let coords = [energy, -energy];
        let mut state = TrialState::new(energy, &coords[..], thermostat);
        controller.update_step(accepted, &mut state)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_worked_scenario() {
        let mut c = controller(2);
        let mut thermostat = Thermostat(1.0);

        assert_eq!(
            report(&mut c, &mut thermostat, false, 1.0),
            UpdateOutcome::FirstObservation
        );
        assert_eq!(c.statistics().attempts(), 0);

        assert_eq!(
            report(&mut c, &mut thermostat, true, 2.0),
            UpdateOutcome::Recorded {
                same_minimum: false
            }
        );
        assert_eq!(c.statistics().attempts(), 1);

        let outcome = report(&mut c, &mut thermostat, true, 3.0);
        let UpdateOutcome::Adjusted { step, temperature } = outcome else {
            panic!("expected an adjustment, got {:?}", outcome);
        };

        assert_eq!(step.direction, AdjustmentDirection::Decreased);
        assert_eq!(step.new_minimum_ratio, 1.0);
        assert_close(step.step_size, 0.38);
        assert_close(c.strategy().step_size(), 0.38);

        assert_eq!(temperature.direction, AdjustmentDirection::Decreased);
        assert_eq!(temperature.new_minimum_accept_ratio, 1.0);
        assert_close(thermostat.temperature(), 0.95);

        assert_eq!(*c.statistics(), AdaptiveStatistics::new());
        assert_eq!(c.total_calls(), 3);
        assert_eq!(c.last_energy(), Some(3.0));
    }

    #[test]
    fn test_first_call_never_counts() {
        for accepted in [true, false] {
            let mut c = controller(1);
            let mut thermostat = Thermostat(1.0);
            let outcome = report(&mut c, &mut thermostat, accepted, 5.0);

            assert_eq!(outcome, UpdateOutcome::FirstObservation);
            assert_eq!(c.statistics().attempts(), 0);
            assert_eq!(c.statistics().accepted(), 0);
            assert_eq!(c.statistics().same_minimum(), 0);
            assert_eq!(c.total_calls(), 1);
            assert_eq!(c.last_energy(), Some(5.0));
            assert_eq!(c.last_coords(), Some(&[5.0, -5.0][..]));
            assert!(c.monitor().step_adjustments().is_empty());
        }
    }

    #[test]
    fn test_adjusts_exactly_once_per_interval() {
        let interval = 5;
        let mut c = controller(interval);
        let mut thermostat = Thermostat(1.0);
        report(&mut c, &mut thermostat, true, 0.0);

        for i in 1..interval {
            let outcome = report(&mut c, &mut thermostat, true, i as f64);
            assert!(!outcome.is_adjusted());
        }
        assert_eq!(c.statistics().attempts(), interval - 1);
        assert!(c.monitor().step_adjustments().is_empty());
        assert_eq!(thermostat.temperature(), 1.0);

        let outcome = report(&mut c, &mut thermostat, true, interval as f64);
        assert!(outcome.is_adjusted());
        assert_eq!(c.statistics().attempts(), 0);
        assert_eq!(c.monitor().interval_statistics().len(), 1);
        assert_eq!(c.monitor().interval_statistics()[0].attempts(), interval);
        assert_eq!(c.monitor().step_adjustments().len(), 1);
        assert_eq!(c.monitor().temperature_adjustments().len(), 1);
    }

    #[test]
    fn test_same_minimum_grows_step_size() {
        let mut c = controller(4);
        let mut thermostat = Thermostat(1.0);
        report(&mut c, &mut thermostat, true, 1.0);

        let mut last = UpdateOutcome::FirstObservation;
        for energy in [1.0005, 0.9995, 1.0, 1.001] {
            last = report(&mut c, &mut thermostat, true, energy);
        }

        let UpdateOutcome::Adjusted { step, .. } = last else {
            panic!("expected an adjustment, got {:?}", last);
        };
        assert_eq!(step.direction, AdjustmentDirection::Increased);
        assert_eq!(step.new_minimum_ratio, 0.0);
        assert_close(c.strategy().step_size(), 0.4 / 0.95);
        assert_eq!(c.last_energy(), Some(1.0));
    }

    #[test]
    fn test_accepted_new_minima_cool_down() {
        let mut c = controller(3);
        let mut thermostat = Thermostat(2.0);
        report(&mut c, &mut thermostat, false, 0.0);
        for energy in [1.0, 2.0, 3.0] {
            report(&mut c, &mut thermostat, true, energy);
        }
        assert_close(thermostat.temperature(), 2.0 * 0.95);
        assert_eq!(
            c.monitor().temperature_adjustments()[0].direction,
            AdjustmentDirection::Decreased
        );
    }

    #[test]
    fn test_rejected_new_minima_heat_up() {
        let mut c = controller(3);
        let mut thermostat = Thermostat(2.0);
        report(&mut c, &mut thermostat, false, 0.0);
        for energy in [1.0, 2.0, 3.0] {
            report(&mut c, &mut thermostat, false, energy);
        }
        assert_close(thermostat.temperature(), 2.0 / 0.95);
        let adjustment = c.monitor().temperature_adjustments()[0];
        assert_eq!(adjustment.direction, AdjustmentDirection::Increased);
        assert_eq!(adjustment.new_minimum_accept_ratio, 0.0);
    }

    #[test]
    fn test_no_new_minima_counts_as_full_acceptance() {
        let mut c = controller(2);
        let mut thermostat = Thermostat(1.0);
        report(&mut c, &mut thermostat, true, 0.0);
        report(&mut c, &mut thermostat, false, 0.0);
        report(&mut c, &mut thermostat, false, 0.0);

        let adjustment = c.monitor().temperature_adjustments()[0];
        assert_eq!(adjustment.new_minimum_accept_ratio, 1.0);
        assert_close(thermostat.temperature(), 0.95);
    }

    #[test]
    fn test_rejected_same_minimum_trials_give_negative_ratio() {
        let mut c = controller(3);
        let mut thermostat = Thermostat(1.0);
        report(&mut c, &mut thermostat, true, 0.0);
        report(&mut c, &mut thermostat, false, 0.0);
        report(&mut c, &mut thermostat, false, 0.0);
        report(&mut c, &mut thermostat, false, 7.0);

        let stats = c.monitor().interval_statistics()[0];
        assert_eq!(stats.accepted_different(), -2);
        let adjustment = c.monitor().temperature_adjustments()[0];
        assert_eq!(adjustment.new_minimum_accept_ratio, -2.0);
        assert_eq!(adjustment.direction, AdjustmentDirection::Increased);
    }

    #[test]
    fn test_reference_only_moves_on_new_minimum() {
        let mut c = controller(100);
        let mut thermostat = Thermostat(1.0);
        report(&mut c, &mut thermostat, true, 1.0);

        report(&mut c, &mut thermostat, true, 1.0008);
        assert_eq!(c.last_energy(), Some(1.0));
        assert_eq!(c.last_coords(), Some(&[1.0, -1.0][..]));

        report(&mut c, &mut thermostat, true, 1.5);
        assert_eq!(c.last_energy(), Some(1.5));
        assert_eq!(c.last_coords(), Some(&[1.5, -1.5][..]));
    }

    #[test]
    fn test_last_coords_is_an_independent_copy() {
        let mut c = controller(10);
        let mut thermostat = Thermostat(1.0);
        let mut coords = vec![1.0, 2.0, 3.0];
        {
            let mut state = TrialState::new(0.5, coords.as_slice(), &mut thermostat);
            c.update_step(true, &mut state);
        }
        coords[0] = 100.0;
        assert_eq!(c.last_coords(), Some(&[1.0, 2.0, 3.0][..]));
    }

    #[test]
    fn test_reset_is_idempotent_and_keeps_reference() {
        let mut c = controller(10);
        let mut thermostat = Thermostat(1.0);
        report(&mut c, &mut thermostat, true, 1.0);
        report(&mut c, &mut thermostat, true, 2.0);
        report(&mut c, &mut thermostat, false, 2.0);

        c.reset();
        assert_eq!(*c.statistics(), AdaptiveStatistics::new());
        c.reset();
        assert_eq!(*c.statistics(), AdaptiveStatistics::new());

        assert_eq!(c.total_calls(), 3);
        assert_eq!(c.last_energy(), Some(2.0));
        assert_eq!(c.strategy().step_size(), 0.4);
    }

    #[test]
    fn test_take_step_delegates_without_statistics() {
        let mut c = controller(1);
        let mut coords = [0.0, 0.0];
        c.take_step(&mut coords);
        StepStrategy::take_step(&mut c, &mut coords);

        assert_eq!(coords, [0.8, 0.8]);
        assert_eq!(c.strategy().steps_taken, 2);
        assert_eq!(c.total_calls(), 0);
        assert!(c.statistics().is_empty());
    }

    #[test]
    fn test_counter_invariants_hold_for_random_reports() {
        let mut rng = ChaCha8Rng::seed_from_u64(1234);
        let mut c = controller(7);
        let mut thermostat = Thermostat(1.0);

        for _ in 0..1_000 {
            let energy = f64::from(rng.random_range(0..4u8)) * 0.5;
            let accepted = rng.random_bool(0.5);
            report(&mut c, &mut thermostat, accepted, energy);

            let stats = c.statistics();
            assert!(stats.accepted() <= stats.attempts());
            assert!(stats.same_minimum() <= stats.attempts());
            assert!(stats.attempts() < 7);
        }

        assert_eq!(c.total_calls(), 1_000);
        assert_eq!(c.monitor().step_adjustments().len(), 999 / 7);
        assert!(thermostat.temperature() > 0.0);
    }

    #[test]
    fn test_new_selects_monitor_from_verbosity() {
        let quiet = AdaptiveConfig::<f64>::builder()
            .with_verbose(false)
            .build()
            .expect("valid configuration");
        let c = AdaptiveStepTemperature::new(ShiftStep::new(0.4), quiet);
        assert_eq!(c.monitor().name(), "NoOperationMonitor");

        let c = AdaptiveStepTemperature::new(ShiftStep::new(0.4), AdaptiveConfig::default());
        assert_eq!(c.monitor().name(), "LogMonitor");
        assert_eq!(c.into_inner(), ShiftStep::new(0.4));
    }

    #[test]
    fn test_works_with_f32_energies() {
        let config = AdaptiveConfig::<f32>::builder()
            .with_interval(1)
            .with_verbose(false)
            .build()
            .expect("valid configuration");

        struct Half(f32);
        impl StepStrategy<f32> for Half {
            fn name(&self) -> &str {
                "Half"
            }
            fn take_step(&mut self, _coords: &mut [f32]) {}
            fn step_size(&self) -> f32 {
                self.0
            }
            fn scale(&mut self, factor: f32) {
                self.0 *= factor;
            }
        }

        struct Cold(f32);
        impl TemperatureControl<f32> for Cold {
            fn temperature(&self) -> f32 {
                self.0
            }
            fn set_temperature(&mut self, temperature: f32) {
                self.0 = temperature;
            }
        }

        let mut c =
            AdaptiveStepTemperature::with_monitor(Half(1.0), config, NoOperationMonitor::new());
        let mut cold = Cold(1.0);
        let coords = [0.0f32];
        c.update_step(true, &mut TrialState::new(0.0f32, &coords[..], &mut cold));
        let outcome = c.update_step(true, &mut TrialState::new(1.0f32, &coords[..], &mut cold));

        assert!(outcome.is_adjusted());
        assert!((c.strategy().step_size() - 0.95).abs() < 1e-6);
        assert!((cold.temperature() - 0.95).abs() < 1e-6);
    }

    #[test]
    fn test_flat_landscape_keeps_random_displacement_usable() {
        use crate::{accept::Metropolis, strategy::RandomDisplacement};

        let config = AdaptiveConfig::<f32>::builder()
            .with_interval(1)
            .with_verbose(false)
            .build()
            .expect("valid configuration");
        let step = RandomDisplacement::new(0.4f32, ChaCha8Rng::seed_from_u64(3));
        let mut c = AdaptiveStepTemperature::with_monitor(step, config, NoOperationMonitor::new());
        let mut metropolis = Metropolis::new(1.0f32, ChaCha8Rng::seed_from_u64(4));
        let mut coords = vec![0.0f32; 3];

        for _ in 0..3_000 {
            c.take_step(&mut coords);
            coords.iter_mut().for_each(|x| *x = 0.0);
            c.update_step(true, &mut TrialState::new(1.0f32, &coords[..], &mut metropolis));
        }

        assert_eq!(c.total_calls(), 3_000);
        assert!(c.step_size().is_finite());
        assert_eq!(c.step_size(), f32::MAX / 2.0);
    }
}
