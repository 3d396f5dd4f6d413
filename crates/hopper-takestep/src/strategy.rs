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

//! Step-taking strategies for basin hopping.
//!
//! A `StepStrategy` perturbs the current coordinates to propose a trial move.
//! Its magnitude is governed by a single step size that adaptive controllers
//! can rescale through `scale`. The controller never inspects how a strategy
//! moves coordinates; it only reads `step_size` for reporting and multiplies
//! it up or down.
//!
//! `RandomDisplacement` is the classic strategy: every coordinate is displaced
//! independently by a uniform random amount in `[-step_size, step_size]`.

use hopper_core::num::energy::EnergyNumeric;
use rand::Rng;

/// A trial-move generator with a rescalable step size.
pub trait StepStrategy<F>
where
    F: EnergyNumeric,
{
    /// Returns the name of the strategy.
    fn name(&self) -> &str;

    /// Perturbs `coords` in place to produce a trial configuration.
    fn take_step(&mut self, coords: &mut [F]);

    /// Returns the current step size.
    fn step_size(&self) -> F;

    /// Multiplies the step size by `factor`.
    fn scale(&mut self, factor: F);
}

impl<F> std::fmt::Debug for dyn StepStrategy<F>
where
    F: EnergyNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "StepStrategy {{ name: {}, step_size: {} }}",
            self.name(),
            self.step_size()
        )
    }
}

impl<F> std::fmt::Display for dyn StepStrategy<F>
where
    F: EnergyNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "StepStrategy: {}", self.name())
    }
}

impl<F, S> StepStrategy<F> for &mut S
where
    F: EnergyNumeric,
    S: StepStrategy<F> + ?Sized,
{
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn take_step(&mut self, coords: &mut [F]) {
        (**self).take_step(coords)
    }

    #[inline]
    fn step_size(&self) -> F {
        (**self).step_size()
    }

    #[inline]
    fn scale(&mut self, factor: F) {
        (**self).scale(factor)
    }
}

/// Uniform random displacement of every coordinate.
///
/// The step size is capped at half the largest finite value of `F`, so the
/// sampling interval `[-step_size, step_size]` always has a finite width.
#[derive(Debug, Clone)]
pub struct RandomDisplacement<F, R>
where
    F: EnergyNumeric,
{
    step_size: F,
    rng: R,
}

impl<F, R> RandomDisplacement<F, R>
where
    F: EnergyNumeric,
    R: Rng,
{
    /// Creates a new random displacement strategy.
    ///
    /// # Panics
    ///
    /// Panics if `step_size` is not finite and strictly positive.
    #[inline]
    pub fn new(step_size: F, rng: R) -> Self {
        assert!(
            step_size.is_finite() && step_size > F::zero(),
            "called `RandomDisplacement::new()` with invalid step size: {}. Must be finite and positive",
            step_size
        );
        Self { step_size, rng }
    }

    /// Returns the random number generator, e.g. to reseed it.
    #[inline]
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

impl<F, R> StepStrategy<F> for RandomDisplacement<F, R>
where
    F: EnergyNumeric,
    R: Rng,
{
    fn name(&self) -> &str {
        "RandomDisplacement"
    }

    fn take_step(&mut self, coords: &mut [F]) {
        let step = self.step_size.to_f64_lossy().min(f64::MAX / 2.0);
        for x in coords.iter_mut() {
            let delta = self.rng.random_range(-step..=step);
            *x = *x + F::from_f64_lossy(delta);
        }
    }

    #[inline]
    fn step_size(&self) -> F {
        self.step_size
    }

    #[inline]
    fn scale(&mut self, factor: F) {
        self.step_size = (self.step_size * factor).min(max_step_size::<F>());
    }
}

#[inline]
fn max_step_size<F>() -> F
where
    F: EnergyNumeric,
{
    F::max_value() / (F::one() + F::one())
}
