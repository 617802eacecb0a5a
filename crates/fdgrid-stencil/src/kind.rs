//! Selection parameters: derivative kind, grid stagger, accuracy order, axis.
//!
//! Each enumerated parameter has a value form ([`DerivativeKind`],
//! [`StaggerMode`]) for runtime descriptors and a marker-type form
//! ([`First`]/[`Second`], [`Left`]/[`Center`]/[`Right`]) for compile-time
//! selection. The marker traits are sealed.

use std::fmt;

mod sealed {
    pub trait Sealed {}
}

/// Which derivative a stencil approximates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DerivativeKind {
    /// `d/dx`.
    First,
    /// `d²/dx²`.
    Second,
}

impl DerivativeKind {
    /// Both kinds, in order.
    pub const ALL: [DerivativeKind; 2] = [DerivativeKind::First, DerivativeKind::Second];

    /// The order of the derivative (1 or 2).
    pub const fn degree(self) -> u32 {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }
}

impl fmt::Display for DerivativeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Second => write!(f, "second"),
        }
    }
}

/// Placement of a stencil relative to the evaluation point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StaggerMode {
    /// Footprint shifted one cell towards lower indices.
    Left,
    /// Footprint centred on the evaluation point.
    #[default]
    Center,
    /// Footprint shifted one cell towards higher indices.
    Right,
}

impl StaggerMode {
    /// All stagger modes, in order.
    pub const ALL: [StaggerMode; 3] = [StaggerMode::Left, StaggerMode::Center, StaggerMode::Right];

    /// Offset of the first coefficient relative to the evaluation index for
    /// a stencil of `size` points.
    ///
    /// Center is `-(size / 2)`; Left and Right shift that by one cell.
    pub const fn start_offset(self, size: usize) -> isize {
        let half = (size / 2) as isize;
        match self {
            Self::Left => -half - 1,
            Self::Center => -half,
            Self::Right => -half + 1,
        }
    }
}

impl fmt::Display for StaggerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Center => write!(f, "center"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Accuracy order of a finite-difference approximation.
///
/// Truncation error scales as `O(h^order)`. Orders are positive and even.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccuracyOrder(pub u32);

impl AccuracyOrder {
    /// Whether this is a positive even integer.
    pub const fn is_valid(self) -> bool {
        self.0 > 0 && self.0 % 2 == 0
    }
}

impl fmt::Display for AccuracyOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AccuracyOrder {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Grid axis a stencil is applied along.
///
/// `X` walks columns (`data[i][j + k]`), `Y` walks rows (`data[i + k][j]`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Along a row (column index varies).
    X,
    /// Along a column (row index varies).
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}

/// Compile-time derivative kind. Implemented by [`First`] and [`Second`].
pub trait Derivative:
    sealed::Sealed + Copy + Default + fmt::Debug + PartialEq + Send + Sync + 'static
{
    /// The value form of this kind.
    const KIND: DerivativeKind;
}

/// Compile-time stagger. Implemented by [`Left`], [`Center`] and [`Right`].
pub trait Stagger:
    sealed::Sealed + Copy + Default + fmt::Debug + PartialEq + Send + Sync + 'static
{
    /// The value form of this stagger.
    const MODE: StaggerMode;
}

/// Marker for first-derivative stencils.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct First;

/// Marker for second-derivative stencils.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Second;

/// Marker for left-staggered stencils.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Left;

/// Marker for centred stencils.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Center;

/// Marker for right-staggered stencils.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Right;

impl sealed::Sealed for First {}
impl sealed::Sealed for Second {}
impl sealed::Sealed for Left {}
impl sealed::Sealed for Center {}
impl sealed::Sealed for Right {}

impl Derivative for First {
    const KIND: DerivativeKind = DerivativeKind::First;
}

impl Derivative for Second {
    const KIND: DerivativeKind = DerivativeKind::Second;
}

impl Stagger for Left {
    const MODE: StaggerMode = StaggerMode::Left;
}

impl Stagger for Center {
    const MODE: StaggerMode = StaggerMode::Center;
}

impl Stagger for Right {
    const MODE: StaggerMode = StaggerMode::Right;
}
