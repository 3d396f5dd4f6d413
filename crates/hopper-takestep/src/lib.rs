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

//! # Hopper Take-Step
//!
//! Adaptive control of basin-hopping searches. A basin-hopping driver
//! repeatedly perturbs its coordinates, relaxes them into a local minimum, and
//! accepts or rejects the new minimum with a Metropolis test. How well this
//! works hinges on two parameters: the size of the perturbation and the
//! temperature of the accept test. This crate tunes both on the fly.
//!
//! ## Modules
//!
//! - `adaptive`: `AdaptiveStepTemperature`, the feedback controller that wraps
//!   a step strategy and rescales step size and temperature every interval.
//! - `config`: validated controller parameters and their builder.
//! - `stats`: per-interval trial counters and the ratios derived from them.
//! - `report`: adjustment reports and per-call outcomes.
//! - `strategy`: the `StepStrategy` trait and `RandomDisplacement`.
//! - `driver`: the narrow `DriverState` / `TemperatureControl` view of the
//!   driver that the controller consumes.
//! - `accept`: the `Metropolis` accept test.
//! - `monitor`: reporting sinks for adjustment events.
//!
//! ## Usage
//!
//! ```rust
//! use hopper_takestep::{
//!     accept::Metropolis, adaptive::AdaptiveStepTemperature, config::AdaptiveConfig,
//!     driver::TrialState, strategy::{RandomDisplacement, StepStrategy},
//! };
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let config = AdaptiveConfig::<f64>::builder()
//!     .with_interval(300)
//!     .with_verbose(false)
//!     .build()
//!     .unwrap();
//! let step = RandomDisplacement::new(0.4, StdRng::seed_from_u64(0));
//! let mut controller = AdaptiveStepTemperature::new(step, config);
//! let mut metropolis = Metropolis::new(1.0, StdRng::seed_from_u64(1));
//!
//! let mut coords = vec![0.0; 3];
//! controller.take_step(&mut coords);
//! let energy = coords.iter().map(|x| x * x).sum::<f64>();
//! let accepted = metropolis.accept(0.0, energy);
//! controller.update_step(accepted, &mut TrialState::new(energy, &coords[..], &mut metropolis));
//!
//! assert_eq!(controller.total_calls(), 1);
//! assert_eq!(controller.step_size(), 0.4);
//! ```

pub mod accept;
pub mod adaptive;
pub mod config;
pub mod driver;
pub mod monitor;
pub mod report;
pub mod stats;
pub mod strategy;
