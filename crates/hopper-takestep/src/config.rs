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

//! Configuration for adaptive step size and temperature control.
//!
//! `AdaptiveConfig` holds the immutable parameters of an
//! `AdaptiveStepTemperature` controller: the two target probabilities that the
//! feedback loop steers towards, the adjustment interval, the multiplicative
//! rescaling factors for temperature and step size, the energy tolerance used
//! to decide whether two minima are the same, and the verbosity flag.
//!
//! Note that the overall acceptance probability the controller converges to is
//! `1 - target_new_min_prob * (1 - target_new_min_accept_prob)`, so both
//! targets must be chosen together to obtain a desired total acceptance rate.
//!
//! Configurations are created through `AdaptiveConfigBuilder`, which validates
//! every parameter in `build()` and reports the first violation as an
//! `AdaptiveConfigError`. `AdaptiveConfig::default()` yields the defaults used
//! by basin-hopping runs out of the box.

use hopper_core::num::energy::EnergyNumeric;

/// Default target probability that a trial ends in a new minimum.
pub const DEFAULT_TARGET_NEW_MIN_PROB: f64 = 0.8;
/// Default target probability that a trial ending in a new minimum is accepted.
pub const DEFAULT_TARGET_NEW_MIN_ACCEPT_PROB: f64 = 0.3;
/// Default number of attempts between two adjustments.
pub const DEFAULT_INTERVAL: u64 = 100;
/// Default temperature rescaling factor.
pub const DEFAULT_TEMPERATURE_FACTOR: f64 = 0.95;
/// Default step size rescaling factor.
pub const DEFAULT_STEP_FACTOR: f64 = 0.95;
/// Default energy tolerance below which two minima are considered identical.
pub const DEFAULT_ENERGY_TOLERANCE: f64 = 0.001;

/// An error raised when an adaptive control parameter is invalid.
#[derive(Debug, Clone, PartialEq)]
pub enum AdaptiveConfigError {
    /// The adjustment interval must be at least one attempt.
    ZeroInterval,
    /// A target probability lies outside the open interval `(0, 1)`.
    ProbabilityOutOfRange { name: &'static str, value: f64 },
    /// A rescaling factor lies outside the open interval `(0, 1)`.
    FactorOutOfRange { name: &'static str, value: f64 },
    /// The energy tolerance is negative or not finite.
    InvalidEnergyTolerance { value: f64 },
}

impl std::fmt::Display for AdaptiveConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroInterval => write!(f, "Adjustment interval must be a positive integer"),
            Self::ProbabilityOutOfRange { name, value } => {
                write!(f, "Probability '{}' must lie in (0, 1), got {}", name, value)
            }
            Self::FactorOutOfRange { name, value } => {
                write!(f, "Factor '{}' must lie in (0, 1), got {}", name, value)
            }
            Self::InvalidEnergyTolerance { value } => write!(
                f,
                "Energy tolerance must be finite and non-negative, got {}",
                value
            ),
        }
    }
}

impl std::error::Error for AdaptiveConfigError {}

#[inline]
fn in_open_unit_interval(value: f64) -> bool {
    value > 0.0 && value < 1.0
}

/// Validated, immutable parameters of an adaptive controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveConfig<F>
where
    F: EnergyNumeric,
{
    target_new_min_prob: f64,
    target_new_min_accept_prob: f64,
    interval: u64,
    temperature_factor: F,
    step_factor: F,
    energy_tolerance: F,
    verbose: bool,
}

impl<F> Default for AdaptiveConfig<F>
where
    F: EnergyNumeric,
{
    fn default() -> Self {
        Self {
            target_new_min_prob: DEFAULT_TARGET_NEW_MIN_PROB,
            target_new_min_accept_prob: DEFAULT_TARGET_NEW_MIN_ACCEPT_PROB,
            interval: DEFAULT_INTERVAL,
            temperature_factor: F::from_f64_lossy(DEFAULT_TEMPERATURE_FACTOR),
            step_factor: F::from_f64_lossy(DEFAULT_STEP_FACTOR),
            energy_tolerance: F::from_f64_lossy(DEFAULT_ENERGY_TOLERANCE),
            verbose: true,
        }
    }
}

impl<F> AdaptiveConfig<F>
where
    F: EnergyNumeric,
{
    /// Returns a builder seeded with the default parameters.
    #[inline]
    pub fn builder() -> AdaptiveConfigBuilder<F> {
        AdaptiveConfigBuilder::new()
    }

    /// Target probability for a step to end up in a new minimum.
    /// Drives the step size adjustment.
    #[inline]
    pub fn target_new_min_prob(&self) -> f64 {
        self.target_new_min_prob
    }

    /// Target probability that a step ending in a new minimum is accepted.
    /// Drives the temperature adjustment.
    #[inline]
    pub fn target_new_min_accept_prob(&self) -> f64 {
        self.target_new_min_accept_prob
    }

    /// Number of counted attempts between two adjustments.
    #[inline]
    pub fn interval(&self) -> u64 {
        self.interval
    }

    /// Factor the temperature is multiplied (cooling) or divided (heating) by.
    #[inline]
    pub fn temperature_factor(&self) -> F {
        self.temperature_factor
    }

    /// Factor the step size is multiplied (shrinking) or divided (growing) by.
    #[inline]
    pub fn step_factor(&self) -> F {
        self.step_factor
    }

    /// Two minima whose energies differ by at most this amount are the same.
    #[inline]
    pub fn energy_tolerance(&self) -> F {
        self.energy_tolerance
    }

    /// Whether the default monitor prints status lines.
    #[inline]
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Checks every parameter, returning the first violation.
    pub fn validate(&self) -> Result<(), AdaptiveConfigError> {
        if self.interval == 0 {
            return Err(AdaptiveConfigError::ZeroInterval);
        }

        for (name, value) in [
            ("target_new_min_prob", self.target_new_min_prob),
            ("target_new_min_accept_prob", self.target_new_min_accept_prob),
        ] {
            if !in_open_unit_interval(value) {
                return Err(AdaptiveConfigError::ProbabilityOutOfRange { name, value });
            }
        }

        for (name, value) in [
            ("temperature_factor", self.temperature_factor.to_f64_lossy()),
            ("step_factor", self.step_factor.to_f64_lossy()),
        ] {
            if !in_open_unit_interval(value) {
                return Err(AdaptiveConfigError::FactorOutOfRange { name, value });
            }
        }

        let tolerance = self.energy_tolerance.to_f64_lossy();
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(AdaptiveConfigError::InvalidEnergyTolerance { value: tolerance });
        }

        Ok(())
    }
}

impl<F> std::fmt::Display for AdaptiveConfig<F>
where
    F: EnergyNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "AdaptiveConfig(target_new_min_prob: {}, target_new_min_accept_prob: {}, interval: {}, temperature_factor: {}, step_factor: {}, energy_tolerance: {}, verbose: {})",
            self.target_new_min_prob,
            self.target_new_min_accept_prob,
            self.interval,
            self.temperature_factor,
            self.step_factor,
            self.energy_tolerance,
            self.verbose
        )
    }
}

/// Fluent builder for `AdaptiveConfig`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveConfigBuilder<F>
where
    F: EnergyNumeric,
{
    config: AdaptiveConfig<F>,
}

impl<F> Default for AdaptiveConfigBuilder<F>
where
    F: EnergyNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<F> AdaptiveConfigBuilder<F>
where
    F: EnergyNumeric,
{
    /// Creates a builder holding the default parameters.
    #[inline]
    pub fn new() -> Self {
        Self {
            config: AdaptiveConfig::default(),
        }
    }

    #[inline]
    pub fn with_target_new_min_prob(mut self, probability: f64) -> Self {
        self.config.target_new_min_prob = probability;
        self
    }

    #[inline]
    pub fn with_target_new_min_accept_prob(mut self, probability: f64) -> Self {
        self.config.target_new_min_accept_prob = probability;
        self
    }

    #[inline]
    pub fn with_interval(mut self, interval: u64) -> Self {
        self.config.interval = interval;
        self
    }

    #[inline]
    pub fn with_temperature_factor(mut self, factor: F) -> Self {
        self.config.temperature_factor = factor;
        self
    }

    #[inline]
    pub fn with_step_factor(mut self, factor: F) -> Self {
        self.config.step_factor = factor;
        self
    }

    #[inline]
    pub fn with_energy_tolerance(mut self, tolerance: F) -> Self {
        self.config.energy_tolerance = tolerance;
        self
    }

    #[inline]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    /// Validates the parameters and returns the finished configuration.
    pub fn build(self) -> Result<AdaptiveConfig<F>, AdaptiveConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = AdaptiveConfig::<f64>::default();
        assert_eq!(config.target_new_min_prob(), 0.8);
        assert_eq!(config.target_new_min_accept_prob(), 0.3);
        assert_eq!(config.interval(), 100);
        assert_eq!(config.temperature_factor(), 0.95);
        assert_eq!(config.step_factor(), 0.95);
        assert_eq!(config.energy_tolerance(), 0.001);
        assert!(config.verbose());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = AdaptiveConfig::<f64>::builder()
            .with_interval(300)
            .with_step_factor(0.9)
            .with_temperature_factor(0.8)
            .with_energy_tolerance(0.0)
            .with_verbose(false)
            .build()
            .expect("valid configuration");

        assert_eq!(config.interval(), 300);
        assert_eq!(config.step_factor(), 0.9);
        assert_eq!(config.temperature_factor(), 0.8);
        assert_eq!(config.energy_tolerance(), 0.0);
        assert!(!config.verbose());
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let err = AdaptiveConfigBuilder::<f64>::new()
            .with_interval(0)
            .build()
            .unwrap_err();
        assert_eq!(err, AdaptiveConfigError::ZeroInterval);
    }

    #[test]
    fn test_probability_bounds_are_open() {
        let err = AdaptiveConfigBuilder::<f64>::new()
            .with_target_new_min_prob(1.0)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            AdaptiveConfigError::ProbabilityOutOfRange {
                name: "target_new_min_prob",
                value: 1.0
            }
        );

        let err = AdaptiveConfigBuilder::<f64>::new()
            .with_target_new_min_accept_prob(0.0)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            AdaptiveConfigError::ProbabilityOutOfRange {
                name: "target_new_min_accept_prob",
                ..
            }
        ));
    }

    #[test]
    fn test_factor_bounds() {
        let err = AdaptiveConfigBuilder::<f64>::new()
            .with_step_factor(1.05)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            AdaptiveConfigError::FactorOutOfRange {
                name: "step_factor",
                ..
            }
        ));

        let err = AdaptiveConfigBuilder::<f32>::new()
            .with_temperature_factor(0.0)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            AdaptiveConfigError::FactorOutOfRange {
                name: "temperature_factor",
                ..
            }
        ));
    }

    #[test]
    fn test_energy_tolerance_must_be_finite_and_non_negative() {
        for bad in [-0.1, f64::INFINITY, f64::NAN] {
            let err = AdaptiveConfigBuilder::<f64>::new()
                .with_energy_tolerance(bad)
                .build()
                .unwrap_err();
            assert!(matches!(
                err,
                AdaptiveConfigError::InvalidEnergyTolerance { .. }
            ));
        }
    }

    #[test]
    fn test_error_display() {
        let err = AdaptiveConfigError::FactorOutOfRange {
            name: "step_factor",
            value: 2.0,
        };
        assert_eq!(err.to_string(), "Factor 'step_factor' must lie in (0, 1), got 2");
    }
}
