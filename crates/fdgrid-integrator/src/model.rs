//! Physical models: the right-hand side `∂φ/∂t` that the integrator advances.
//!
//! A model reads the current field through a [`StencilConfig`] and returns
//! the time derivative at one cell. It never writes; the integrator owns
//! the field and decides where the model is evaluated.

use crate::config::StencilConfig;
use fdgrid_core::{Field2D, Scalar};

/// Time derivative of a scalar field.
///
/// # Contract
///
/// - `rate()` is only called at interior cells, where every stencil of the
///   configuration fits inside the field.
/// - `rate()` must be deterministic: the same field, stencil and cell give
///   the same value.
///
/// # Examples
///
/// A model with a constant source term:
///
/// ```
/// use fdgrid_core::{Field2D, Scalar};
/// use fdgrid_integrator::{Central, Model, StencilConfig};
///
/// struct Source(Scalar);
///
/// impl Model for Source {
///     fn name(&self) -> &str { "source" }
///
///     fn rate<C: StencilConfig + ?Sized>(
///         &self,
///         _field: &Field2D,
///         _stencil: &C,
///         _i: usize,
///         _j: usize,
///     ) -> Scalar {
///         self.0
///     }
/// }
///
/// let f = Field2D::zeros(3, 3);
/// assert_eq!(Source(0.5).rate(&f, &Central::<2>, 1, 1), 0.5);
/// ```
pub trait Model {
    /// Human-readable name for logs and errors.
    fn name(&self) -> &str;

    /// `∂φ/∂t` at cell `(i, j)`.
    fn rate<C: StencilConfig + ?Sized>(
        &self,
        field: &Field2D,
        stencil: &C,
        i: usize,
        j: usize,
    ) -> Scalar;

    /// Largest stable timestep under `stencil`, if the model has one.
    ///
    /// The integrator rejects any `dt` above this bound. Return `None` to
    /// impose no constraint.
    fn max_dt<C: StencilConfig + ?Sized>(&self, _stencil: &C) -> Option<f64> {
        None
    }
}

/// Isotropic diffusion, `∂φ/∂t = D (∂²φ/∂x² + ∂²φ/∂y²)`.
///
/// ```
/// use fdgrid_integrator::Diffusion;
///
/// let model = Diffusion::builder()
///     .coefficient(0.1)
///     .spacing(0.5)
///     .build()
///     .unwrap();
/// assert_eq!(model.coefficient(), 0.1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Diffusion {
    coefficient: f64,
    spacing: f64,
}

/// Builder for [`Diffusion`].
///
/// Defaults: coefficient 0 (a no-op model), spacing 1.
#[derive(Clone, Debug)]
pub struct DiffusionBuilder {
    coefficient: f64,
    spacing: f64,
}

impl Diffusion {
    /// Create a new builder for configuring a `Diffusion` model.
    pub fn builder() -> DiffusionBuilder {
        DiffusionBuilder {
            coefficient: 0.0,
            spacing: 1.0,
        }
    }

    /// Diffusion coefficient `D`.
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// Grid spacing `h`, equal along both axes.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }
}

impl Default for Diffusion {
    fn default() -> Self {
        Self {
            coefficient: 0.0,
            spacing: 1.0,
        }
    }
}

impl DiffusionBuilder {
    /// Set the diffusion coefficient (default 0.0). Must be >= 0.
    pub fn coefficient(mut self, d: f64) -> Self {
        self.coefficient = d;
        self
    }

    /// Set the grid spacing (default 1.0). Must be > 0.
    pub fn spacing(mut self, h: f64) -> Self {
        self.spacing = h;
        self
    }

    /// Build the model, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `coefficient` is negative or not finite
    /// - `spacing` is not positive or not finite
    pub fn build(self) -> Result<Diffusion, String> {
        if !(self.coefficient >= 0.0) || !self.coefficient.is_finite() {
            return Err(format!(
                "coefficient must be finite and >= 0, got {}",
                self.coefficient
            ));
        }
        if !(self.spacing > 0.0) || !self.spacing.is_finite() {
            return Err(format!(
                "spacing must be finite and > 0, got {}",
                self.spacing
            ));
        }
        Ok(Diffusion {
            coefficient: self.coefficient,
            spacing: self.spacing,
        })
    }
}

impl Model for Diffusion {
    fn name(&self) -> &str {
        "Diffusion"
    }

    #[inline]
    fn rate<C: StencilConfig + ?Sized>(
        &self,
        field: &Field2D,
        stencil: &C,
        i: usize,
        j: usize,
    ) -> Scalar {
        let laplacian = stencil.second_x(field, i, j) + stencil.second_y(field, i, j);
        self.coefficient * laplacian / (self.spacing * self.spacing)
    }

    /// `2 h² / (D (Σ|c_x| + Σ|c_y|))` over the second-derivative weights.
    ///
    /// The Laplacian's most negative eigenvalue is `-(Σ|c_x| + Σ|c_y|) / h²`
    /// for centred stencils, and both schemes stay stable while
    /// `dt D |λ| <= 2`. Order 2 gives the familiar `h² / (4 D)`.
    fn max_dt<C: StencilConfig + ?Sized>(&self, stencil: &C) -> Option<f64> {
        if self.coefficient > 0.0 {
            let radius = 2.0 * stencil.second().abs_sum();
            Some(2.0 * self.spacing * self.spacing / (self.coefficient * radius))
        } else {
            None
        }
    }
}

/// Linear advection by a constant velocity,
/// `∂φ/∂t = -(vx ∂φ/∂x + vy ∂φ/∂y)`.
///
/// `vx` moves values towards higher column indices, `vy` towards higher
/// row indices.
#[derive(Clone, Debug, PartialEq)]
pub struct Advection {
    velocity: (f64, f64),
    spacing: f64,
}

/// Builder for [`Advection`].
///
/// Defaults: zero velocity, spacing 1.
#[derive(Clone, Debug)]
pub struct AdvectionBuilder {
    velocity: (f64, f64),
    spacing: f64,
}

impl Advection {
    /// Create a new builder for configuring an `Advection` model.
    pub fn builder() -> AdvectionBuilder {
        AdvectionBuilder {
            velocity: (0.0, 0.0),
            spacing: 1.0,
        }
    }

    /// `(vx, vy)`.
    pub fn velocity(&self) -> (f64, f64) {
        self.velocity
    }

    /// Grid spacing `h`, equal along both axes.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }
}

impl Default for Advection {
    fn default() -> Self {
        Self {
            velocity: (0.0, 0.0),
            spacing: 1.0,
        }
    }
}

impl AdvectionBuilder {
    /// Set the advection velocity `(vx, vy)` (default zero).
    pub fn velocity(mut self, vx: f64, vy: f64) -> Self {
        self.velocity = (vx, vy);
        self
    }

    /// Set the grid spacing (default 1.0). Must be > 0.
    pub fn spacing(mut self, h: f64) -> Self {
        self.spacing = h;
        self
    }

    /// Build the model, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either velocity component is not finite, or if
    /// `spacing` is not positive or not finite.
    pub fn build(self) -> Result<Advection, String> {
        let (vx, vy) = self.velocity;
        if !vx.is_finite() || !vy.is_finite() {
            return Err(format!("velocity must be finite, got ({vx}, {vy})"));
        }
        if !(self.spacing > 0.0) || !self.spacing.is_finite() {
            return Err(format!(
                "spacing must be finite and > 0, got {}",
                self.spacing
            ));
        }
        Ok(Advection {
            velocity: self.velocity,
            spacing: self.spacing,
        })
    }
}

impl Model for Advection {
    fn name(&self) -> &str {
        "Advection"
    }

    #[inline]
    fn rate<C: StencilConfig + ?Sized>(
        &self,
        field: &Field2D,
        stencil: &C,
        i: usize,
        j: usize,
    ) -> Scalar {
        let (vx, vy) = self.velocity;
        let dx = stencil.first_x(field, i, j);
        let dy = stencil.first_y(field, i, j);
        -(vx * dx + vy * dy) / self.spacing
    }

    fn max_dt<C: StencilConfig + ?Sized>(&self, _stencil: &C) -> Option<f64> {
        let speed = self.velocity.0.abs() + self.velocity.1.abs();
        if speed > 0.0 {
            // CFL: a value may cross at most one cell per step.
            Some(self.spacing / speed)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Central, DynamicStencil};
    use fdgrid_stencil::StaggerMode;

    // ---------------------------------------------------------------
    // Builder tests
    // ---------------------------------------------------------------

    #[test]
    fn diffusion_builder_defaults() {
        let m = Diffusion::builder().build().unwrap();
        assert_eq!(m, Diffusion::default());
        assert_eq!(m.name(), "Diffusion");
        assert_eq!(m.max_dt(&Central::<2>), None);
    }

    #[test]
    fn diffusion_builder_rejects_negative_coefficient() {
        let result = Diffusion::builder().coefficient(-0.1).build();
        assert!(result.unwrap_err().contains("coefficient"));
    }

    #[test]
    fn diffusion_builder_rejects_nan_coefficient() {
        let result = Diffusion::builder().coefficient(f64::NAN).build();
        assert!(result.unwrap_err().contains("coefficient"));
    }

    #[test]
    fn diffusion_builder_rejects_bad_spacing() {
        for h in [0.0, -1.0, f64::INFINITY, f64::NAN] {
            let result = Diffusion::builder().spacing(h).build();
            assert!(result.unwrap_err().contains("spacing"), "h = {h}");
        }
    }

    #[test]
    fn advection_builder_rejects_infinite_velocity() {
        let result = Advection::builder().velocity(f64::INFINITY, 0.0).build();
        assert!(result.unwrap_err().contains("velocity"));
    }

    #[test]
    fn advection_builder_rejects_bad_spacing() {
        let result = Advection::builder().spacing(0.0).build();
        assert!(result.unwrap_err().contains("spacing"));
    }

    // ---------------------------------------------------------------
    // Stability bounds
    // ---------------------------------------------------------------

    #[test]
    fn diffusion_max_dt() {
        let m = Diffusion::builder()
            .coefficient(0.25)
            .spacing(0.5)
            .build()
            .unwrap();
        // 0.25 / (4 * 0.25) = 0.25
        assert!((m.max_dt(&Central::<2>).unwrap() - 0.25).abs() < 1e-15);
    }

    #[test]
    fn diffusion_max_dt_tightens_with_order() {
        let m = Diffusion::builder().coefficient(0.25).build().unwrap();
        // 2 / (0.25 * 2 * 16/3) = 3/4
        assert!((m.max_dt(&Central::<4>).unwrap() - 0.75).abs() < 1e-15);

        let bounds: Vec<f64> = [
            m.max_dt(&Central::<2>),
            m.max_dt(&Central::<4>),
            m.max_dt(&Central::<6>),
            m.max_dt(&Central::<8>),
        ]
        .into_iter()
        .map(Option::unwrap)
        .collect();
        assert!(bounds.windows(2).all(|w| w[0] > w[1]), "{bounds:?}");
    }

    #[test]
    fn diffusion_max_dt_follows_runtime_stencil() {
        let m = Diffusion::builder().coefficient(0.1).build().unwrap();
        let dynamic = DynamicStencil::new(6u32, StaggerMode::Center).unwrap();
        assert_eq!(m.max_dt(&dynamic), m.max_dt(&Central::<6>));
    }

    #[test]
    fn advection_max_dt() {
        let m = Advection::builder()
            .velocity(1.0, -3.0)
            .spacing(2.0)
            .build()
            .unwrap();
        assert!((m.max_dt(&Central::<2>).unwrap() - 0.5).abs() < 1e-15);
        assert_eq!(Advection::default().max_dt(&Central::<2>), None);
    }

    // ---------------------------------------------------------------
    // Rates
    // ---------------------------------------------------------------

    #[test]
    fn diffusion_rate_is_scaled_laplacian() {
        // φ = x² + y², ∇²φ = 4 in index units.
        let f = Field2D::from_fn(7, 7, |r, c| (r * r + c * c) as Scalar);
        let m = Diffusion::builder()
            .coefficient(0.5)
            .spacing(2.0)
            .build()
            .unwrap();
        let rate = m.rate(&f, &Central::<2>, 3, 3);
        assert!((rate - 0.5 * 4.0 / 4.0).abs() < 1e-12);
    }

    #[test]
    fn diffusion_of_linear_field_is_zero() {
        let f = Field2D::from_fn(9, 9, |r, c| 3.0 * r as Scalar - 2.0 * c as Scalar);
        let m = Diffusion::builder().coefficient(1.0).build().unwrap();
        assert!(m.rate(&f, &Central::<4>, 4, 4).abs() < 1e-12);
    }

    #[test]
    fn advection_rate_opposes_gradient() {
        // φ = 2x + 5y.
        let f = Field2D::from_fn(5, 5, |r, c| 2.0 * c as Scalar + 5.0 * r as Scalar);
        let m = Advection::builder().velocity(1.0, 0.5).build().unwrap();
        let rate = m.rate(&f, &Central::<2>, 2, 2);
        assert!((rate + (2.0 + 2.5)).abs() < 1e-12);
    }

    #[test]
    fn models_compare_structurally() {
        let a = Diffusion::builder().coefficient(0.3).build().unwrap();
        let b = Diffusion::builder().coefficient(0.3).build().unwrap();
        let c = Diffusion::builder().coefficient(0.4).build().unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.clone(), a);
    }
}
