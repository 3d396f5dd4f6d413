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

//! Metropolis accept test.
//!
//! A trial whose energy does not exceed the current energy is always
//! accepted. A worsening trial is accepted with probability
//! $$ P(\text{accept}) = \exp\left(\frac{-(E_{\text{trial}} - E_{\text{current}})}{T}\right) $$
//! Temperatures at or below `MIN_TEMPERATURE` are treated as frozen and reject
//! every worsening trial, avoiding unstable probabilities. The temperature is
//! exposed through `TemperatureControl` so that an adaptive controller can
//! cool or heat the test between intervals.

use crate::driver::TemperatureControl;
use hopper_core::num::energy::EnergyNumeric;
use rand::Rng;

/// Temperatures at or below this value reject every worsening trial.
pub const MIN_TEMPERATURE: f64 = 1e-9;

#[derive(Debug, Clone)]
pub struct Metropolis<F, R>
where
    F: EnergyNumeric,
{
    temperature: F,
    rng: R,
}

impl<F, R> Metropolis<F, R>
where
    F: EnergyNumeric,
    R: Rng,
{
    /// Creates a new Metropolis accept test.
    ///
    /// # Panics
    ///
    /// Panics if `temperature` is negative or not finite.
    #[inline]
    pub fn new(temperature: F, rng: R) -> Self {
        assert!(
            temperature.is_finite() && temperature >= F::zero(),
            "called `Metropolis::new()` with invalid temperature: {}. Must be finite and non-negative",
            temperature
        );
        Self { temperature, rng }
    }

    /// Decides whether a trial with energy `trial` replaces the current state
    /// with energy `current`.
    pub fn accept(&mut self, current: F, trial: F) -> bool {
        if trial <= current {
            return true;
        }

        let temperature = self.temperature.to_f64_lossy();
        if temperature.is_nan() || temperature <= MIN_TEMPERATURE {
            return false;
        }

        let energy_difference = (trial - current).to_f64_lossy();
        if !energy_difference.is_finite() {
            return false;
        }

        let acceptance_probability = (-energy_difference / temperature).exp();
        self.rng.random_bool(acceptance_probability.clamp(0.0, 1.0))
    }
}

impl<F, R> TemperatureControl<F> for Metropolis<F, R>
where
    F: EnergyNumeric,
{
    #[inline]
    fn temperature(&self) -> F {
        self.temperature
    }

    #[inline]
    fn set_temperature(&mut self, temperature: F) {
        self.temperature = temperature;
    }
}
