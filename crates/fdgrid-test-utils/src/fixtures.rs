//! Reusable model fixtures.
//!
//! Three mock models for integrator testing:
//!
//! - [`ConstantRate`]: the same `∂φ/∂t` at every cell.
//! - [`FailingModel`]: returns NaN once a call budget is spent.
//! - [`Bounded`]: zero rate with a configurable `max_dt`.

use fdgrid_core::{Field2D, Scalar};
use fdgrid_integrator::{Model, StencilConfig};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Returns `rate` everywhere and never reads the field.
///
/// Useful for checking scheme arithmetic: after `n` steps of `dt`, every
/// interior cell has moved by exactly `n * dt * rate`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConstantRate {
    pub rate: Scalar,
}

impl ConstantRate {
    pub fn new(rate: Scalar) -> Self {
        Self { rate }
    }
}

impl Model for ConstantRate {
    fn name(&self) -> &str {
        "ConstantRate"
    }

    fn rate<C: StencilConfig + ?Sized>(&self, _: &Field2D, _: &C, _: usize, _: usize) -> Scalar {
        self.rate
    }
}

/// Returns NaN after a configurable number of successful `rate()` calls.
///
/// Useful for testing rollback: a step that crosses the budget must leave
/// the field untouched. Uses `AtomicUsize` for the call counter because
/// `rate()` takes `&self`.
#[derive(Debug)]
pub struct FailingModel {
    pub succeed_count: usize,
    call_count: AtomicUsize,
}

impl FailingModel {
    /// Create a model that returns zero `succeed_count` times, then NaN.
    pub fn new(succeed_count: usize) -> Self {
        Self {
            succeed_count,
            call_count: AtomicUsize::new(0),
        }
    }

    /// How many times `rate()` has been called.
    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Reset the call counter.
    pub fn reset(&self) {
        self.call_count.store(0, Ordering::Relaxed);
    }
}

impl Model for FailingModel {
    fn name(&self) -> &str {
        "FailingModel"
    }

    fn rate<C: StencilConfig + ?Sized>(&self, _: &Field2D, _: &C, _: usize, _: usize) -> Scalar {
        let n = self.call_count.fetch_add(1, Ordering::Relaxed);
        if n >= self.succeed_count {
            Scalar::NAN
        } else {
            0.0
        }
    }
}

/// Zero rate with a fixed stability bound.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bounded {
    pub max_dt: Option<f64>,
}

impl Model for Bounded {
    fn name(&self) -> &str {
        "Bounded"
    }

    fn rate<C: StencilConfig + ?Sized>(&self, _: &Field2D, _: &C, _: usize, _: usize) -> Scalar {
        0.0
    }

    fn max_dt<C: StencilConfig + ?Sized>(&self, _: &C) -> Option<f64> {
        self.max_dt
    }
}
