//! Property tests for stepping invariants.

use fdgrid_core::Field2D;
use fdgrid_integrator::{Central, Diffusion, Integrator, Model, StencilConfig, TimeScheme};
use fdgrid_test_utils::assert_fields_close;
use proptest::prelude::*;

fn scheme() -> impl Strategy<Value = TimeScheme> {
    prop_oneof![Just(TimeScheme::ForwardEuler), Just(TimeScheme::Heun)]
}

fn energy(f: &Field2D) -> f64 {
    f.as_slice().iter().map(|v| v * v).sum::<f64>().sqrt()
}

/// Euclidean norm before and after `steps` of diffusion at the model's own
/// `max_dt`, starting from noise framed by a zero border as wide as the
/// stencil reach.
fn energy_at_max_dt<C: StencilConfig>(
    stencil: C,
    seed: u64,
    scheme: TimeScheme,
    steps: u64,
) -> (f64, f64) {
    let n = 16;
    let (below, above) = stencil.reach();
    let noise = Field2D::random(n, n, seed);
    let initial = Field2D::from_fn(n, n, |r, c| {
        let inside = |k: usize| below <= k && k + above < n;
        if inside(r) && inside(c) { noise[r][c] } else { 0.0 }
    });
    let model = Diffusion::builder().coefficient(0.3).build().unwrap();
    let dt = model.max_dt(&stencil).unwrap();
    let mut sim = Integrator::new(initial.clone(), stencil, model).with_scheme(scheme);
    sim.run(steps, dt).unwrap();
    (energy(&initial), energy(sim.field()))
}

proptest! {
    #[test]
    fn linear_fields_are_stationary_under_diffusion(
        a in -3.0f64..3.0,
        b in -3.0f64..3.0,
        c in -3.0f64..3.0,
        scheme in scheme(),
    ) {
        let initial = Field2D::from_fn(12, 12, |r, col| a * r as f64 + b * col as f64 + c);
        let model = Diffusion::builder().coefficient(0.2).build().unwrap();
        let mut sim = Integrator::new(initial.clone(), Central::<4>, model).with_scheme(scheme);
        sim.run(3, 0.5).unwrap();
        assert_fields_close(sim.field(), &initial, 1e-12);
    }

    #[test]
    fn stable_diffusion_never_grows_the_range(seed in any::<u64>(), scheme in scheme()) {
        let initial = Field2D::random(16, 16, seed);
        let model = Diffusion::builder().coefficient(0.2).build().unwrap();
        let mut sim = Integrator::new(initial.clone(), Central::<2>, model).with_scheme(scheme);
        sim.run(5, 1.0).unwrap();

        let max = |f: &Field2D| f.as_slice().iter().fold(0.0f64, |m, v| m.max(v.abs()));
        prop_assert!(max(sim.field()) <= max(&initial) + 1e-12);
    }

    #[test]
    fn diffusion_at_max_dt_never_grows_the_energy(seed in any::<u64>(), scheme in scheme()) {
        for (before, after) in [
            energy_at_max_dt(Central::<2>, seed, scheme, 30),
            energy_at_max_dt(Central::<4>, seed, scheme, 30),
            energy_at_max_dt(Central::<6>, seed, scheme, 30),
            energy_at_max_dt(Central::<8>, seed, scheme, 30),
        ] {
            prop_assert!(after <= before * (1.0 + 1e-9), "{before} -> {after}");
        }
    }

    #[test]
    fn failed_dt_leaves_state_untouched(seed in any::<u64>(), dt in 1.26f64..10.0) {
        let initial = Field2D::random(8, 8, seed);
        let model = Diffusion::builder().coefficient(0.2).build().unwrap();
        let mut sim = Integrator::new(initial.clone(), Central::<2>, model);
        prop_assert!(sim.step(dt).is_err());
        prop_assert_eq!(sim.field(), &initial);
        prop_assert_eq!(sim.steps_taken(), 0);
    }
}
