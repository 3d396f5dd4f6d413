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

//! Narrow view of the basin-hopping driver consumed by adaptive controllers.
//!
//! After each trial the driver reports the trial's energy and coordinates, and
//! when an adjustment fires the controller needs to reach the temperature of
//! the driver's accept test. These capabilities are expressed as two small
//! traits so that a controller never depends on the full driver type.

use hopper_core::num::energy::EnergyNumeric;

/// An accept test parameterized by a mutable temperature.
pub trait TemperatureControl<F>
where
    F: EnergyNumeric,
{
    /// Returns the current temperature.
    fn temperature(&self) -> F;

    /// Replaces the current temperature.
    fn set_temperature(&mut self, temperature: F);
}

/// The state of a basin-hopping driver right after a trial was evaluated.
pub trait DriverState<F>
where
    F: EnergyNumeric,
{
    /// The accept test whose temperature the controller adjusts.
    type AcceptTest: TemperatureControl<F>;

    /// Energy of the minimum the trial relaxed into.
    fn trial_energy(&self) -> F;

    /// Coordinates of the minimum the trial relaxed into.
    fn trial_coords(&self) -> &[F];

    /// Mutable access to the driver's accept test.
    fn accept_test_mut(&mut self) -> &mut Self::AcceptTest;
}

/// A borrowed `DriverState` assembled from its parts.
///
/// Useful for drivers that keep the trial and the accept test in separate
/// fields and do not want to implement `DriverState` themselves.
#[derive(Debug)]
pub struct TrialState<'a, F, A>
where
    F: EnergyNumeric,
{
    energy: F,
    coords: &'a [F],
    accept_test: &'a mut A,
}

impl<'a, F, A> TrialState<'a, F, A>
where
    F: EnergyNumeric,
    A: TemperatureControl<F>,
{
    #[inline]
    pub fn new(energy: F, coords: &'a [F], accept_test: &'a mut A) -> Self {
        Self {
            energy,
            coords,
            accept_test,
        }
    }
}

impl<'a, F, A> DriverState<F> for TrialState<'a, F, A>
where
    F: EnergyNumeric,
    A: TemperatureControl<F>,
{
    type AcceptTest = A;

    #[inline]
    fn trial_energy(&self) -> F {
        self.energy
    }

    #[inline]
    fn trial_coords(&self) -> &[F] {
        self.coords
    }

    #[inline]
    fn accept_test_mut(&mut self) -> &mut A {
        &mut *self.accept_test
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedTemperature(f64);

    impl TemperatureControl<f64> for FixedTemperature {
        fn temperature(&self) -> f64 {
            self.0
        }

        fn set_temperature(&mut self, temperature: f64) {
            self.0 = temperature;
        }
    }

    #[test]
    fn test_trial_state_exposes_parts() {
        let coords = [1.0, 2.0, 3.0];
        let mut accept = FixedTemperature(1.0);
        let mut state = TrialState::new(-4.5, &coords, &mut accept);

        assert_eq!(state.trial_energy(), -4.5);
        assert_eq!(state.trial_coords(), &[1.0, 2.0, 3.0]);

        state.accept_test_mut().set_temperature(0.5);
        assert_eq!(accept.temperature(), 0.5);
    }
}
