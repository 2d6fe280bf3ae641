//! Configuration types for loading lensing scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! lensing scenario. A scenario consists of:
//!
//! - [`MassConfig`]      – position and mass of the lensing body
//! - [`ConstantsConfig`] – physical constants and the epsilon floor
//! - [`GridConfig`]      – bounds and resolution of the sample grid
//! - [`SliceConfig`]     – which depth values are drawn
//! - [`DisplayConfig`]   – title and labels of the plot
//! - [`LensConfig`]      – top-level wrapper used to load a scenario from YAML
//!
//! Every section falls back to the reference values when omitted, so an
//! empty file is a valid scenario.
//!
//! # YAML format
//!
//! ```yaml
//! mass:
//!   position: [0.0, 0.0, 0.0]  # centre of the point mass
//!   m: 10.0                    # arbitrary mass units
//!
//! constants:
//!   G: 1.0                     # gravitational constant
//!   c: 1.0                     # signal speed
//!   epsilon: 1.0e-6            # added to r before dividing
//!
//! grid:
//!   min: -5.0
//!   max: 5.0
//!   size: 30                   # samples per axis
//!
//! slices:
//!   count: 5                   # evenly spaced over [min, max]
//!   # depths: [-5.0, 0.0, 5.0] # or list them explicitly
//!
//! display:
//!   title: "Gravitational Lensing by a Black Hole (3D Slices)"
//! ```

use serde::Deserialize;

/// Point mass doing the lensing
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct MassConfig {
    pub position: [f64; 3], // centre of the mass
    pub m: f64,             // mass, sign is not checked
}

impl Default for MassConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            m: 10.0,
        }
    }
}

/// Physical constants of the simplified deflection formula
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ConstantsConfig {
    #[serde(rename = "G")]
    pub g: f64, // gravitational constant
    pub c: f64,       // signal speed
    pub epsilon: f64, // floor added to r so the mass centre never divides by zero
}

impl Default for ConstantsConfig {
    fn default() -> Self {
        Self {
            g: 1.0,
            c: 1.0,
            epsilon: 1e-6,
        }
    }
}

/// Sample grid, same bounds and resolution on all three axes
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct GridConfig {
    pub min: f64,
    pub max: f64,
    pub size: usize, // samples per axis
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            min: -5.0,
            max: 5.0,
            size: 30,
        }
    }
}

/// Depth slices to draw
/// `depths` wins over `count` when both are given
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SliceConfig {
    pub count: usize,              // evenly spaced over the grid bounds
    pub depths: Option<Vec<f64>>,  // explicit depth values
}

impl Default for SliceConfig {
    fn default() -> Self {
        Self {
            count: 5,
            depths: None,
        }
    }
}

/// Plot decoration
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub title: String,
    pub labels: [String; 3], // x, y, z axis labels
    pub legend: String,      // label next to the mass marker
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Gravitational Lensing by a Black Hole (3D Slices)".to_string(),
            labels: ["X".to_string(), "Y".to_string(), "Z".to_string()],
            legend: "Black Hole".to_string(),
        }
    }
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct LensConfig {
    pub mass: MassConfig,
    pub constants: ConstantsConfig,
    pub grid: GridConfig,
    pub slices: SliceConfig,
    pub display: DisplayConfig,
}
