//! Core state types for the lensing field.
//!
//! - `PointMass` – position and mass of the lensing body
//! - `PhysicalConstants` – `G`, `c` and the epsilon floor on `r`
//!
//! Both are fixed for the whole run.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct PointMass {
    pub position: NVec3, // centre
    pub m: f64, // mass
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalConstants {
    pub g: f64, // gravitational constant
    pub c: f64, // signal speed
    pub epsilon: f64, // added to r before it is used as a divisor
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            g: 1.0,
            c: 1.0,
            epsilon: 1e-6,
        }
    }
}
