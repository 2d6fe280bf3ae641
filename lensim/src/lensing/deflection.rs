//! Deflection of sample points by a lensing mass
//!
//! Defines the [`Deflection`] trait and the simplified point-mass lens:
//! every point is pulled toward the mass centre by `G*m/(r*c^2)`.

use crate::lensing::grid::{Grid3, SampleGrid};
use crate::lensing::states::{NVec3, PhysicalConstants, PointMass};

/// Trait for lenses mapping a sample point to its apparent position
/// Implementations must be pure: the same point always maps to the same result
pub trait Deflection {
    fn deflect(&self, p: &NVec3) -> NVec3;
}

/// Simplified point-mass lens
/// No check on the sign or size of the mass: zero mass leaves points
/// in place, negative mass pushes them outward
#[derive(Debug, Clone)]
pub struct PointMassLens {
    pub mass: PointMass,
    pub constants: PhysicalConstants,
}

impl PointMassLens {
    pub fn new(mass: PointMass, constants: PhysicalConstants) -> Self {
        Self { mass, constants }
    }

    /// Scalar deflection magnitude `G*m/(r*c^2)` for an already floored `r`
    pub fn magnitude(&self, r: f64) -> f64 {
        let c2 = self.constants.c * self.constants.c;
        self.constants.g * self.mass.m / (r * c2)
    }
}

impl Deflection for PointMassLens {
    fn deflect(&self, p: &NVec3) -> NVec3 {
        // Displacement from the mass centre to the point
        let d = p - self.mass.position;

        // Epsilon floor keeps r > 0 when p sits on the centre
        let r = d.norm() + self.constants.epsilon;

        let deflection = self.magnitude(r);

        // Move along -d/r, i.e. toward the centre for positive mass
        p - d * (deflection / r)
    }
}

/// Apply `lens` to every point of `grid`
/// The result has exactly the shape of the input grid
pub fn deflect_all<L: Deflection + ?Sized>(lens: &L, grid: &SampleGrid) -> Grid3 {
    let points: Vec<NVec3> = grid.iter().map(|p| lens.deflect(&p)).collect();
    Grid3::from_points(grid.shape(), points)
}
