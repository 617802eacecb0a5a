//! Benchmark profiles for the fdgrid workspace.
//!
//! Provides pre-built integrators for benchmarking:
//!
//! - [`reference_profile`]: 100x100 grid (10K cells), 4th-order diffusion
//! - [`stress_profile`]: 316x316 grid (~100K cells), same model
//! - [`advection_profile`]: 100x100 grid, 2nd-order advection with Heun

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use fdgrid_core::Field2D;
use fdgrid_integrator::{Advection, Central, Diffusion, Integrator, TimeScheme};

/// Diffusion coefficient used by the diffusion profiles.
pub const DIFFUSION: f64 = 0.1;

/// Timestep used by every profile.
///
/// Within the 4th-order diffusion limit `2 / (0.1 * 32/3) = 1.875` and the
/// advection CFL limit `1 / (0.5 + 0.25) ≈ 1.33`.
pub const DT: f64 = 0.5;

/// Build a reference benchmark profile: 100x100 grid (10K cells).
pub fn reference_profile(seed: u64) -> Integrator<Central<4>, Diffusion> {
    diffusion_on(100, seed)
}

/// Build a stress benchmark profile: 316x316 grid (~100K cells).
///
/// Same model as [`reference_profile`] at 10x the cell count.
pub fn stress_profile(seed: u64) -> Integrator<Central<4>, Diffusion> {
    diffusion_on(316, seed)
}

/// Build an advection profile: 100x100 grid stepped with Heun.
pub fn advection_profile(seed: u64) -> Integrator<Central<2>, Advection> {
    let model = Advection::builder()
        .velocity(0.5, 0.25)
        .build()
        .unwrap();
    Integrator::new(Field2D::random(100, 100, seed), Central::<2>, model)
        .with_scheme(TimeScheme::Heun)
}

fn diffusion_on(n: usize, seed: u64) -> Integrator<Central<4>, Diffusion> {
    let model = Diffusion::builder()
        .coefficient(DIFFUSION)
        .build()
        .unwrap();
    Integrator::new(Field2D::random(n, n, seed), Central::<4>, model)
}
