//! Build a render-ready lensing scene from configuration
//!
//! Takes a `LensConfig` (YAML-facing) and runs the whole numeric pipeline:
//! - sample grid from the grid bounds (`SampleGrid`)
//! - deflection of every point by the point-mass lens (`Grid3`)
//! - nearest-index matching of the requested depths
//! - one `WireframeSurface` per matched depth
//!
//! The resulting `LensingScene` only holds numbers, so it can be checked
//! without a display and then handed to any `SceneRenderer`

use bevy::prelude::Resource;
use log::{debug, info};

use crate::configuration::config::LensConfig;
use crate::lensing::deflection::{deflect_all, PointMassLens};
use crate::lensing::grid::{Grid3, GridSpec, SampleGrid};
use crate::lensing::slices::{nearest_index, requested_depths, SliceSpec};
use crate::lensing::states::{NVec3, PhysicalConstants, PointMass};

/// 2D lattice of deflected `(x, y)` held at a constant nominal depth
#[derive(Debug, Clone)]
pub struct WireframeSurface {
    pub requested_depth: f64, // depth the surface is drawn at
    pub index: usize,         // matched index on the sampled depth axis
    pub sampled_depth: f64,   // sample value at `index`
    pub rows: usize,          // ny
    pub cols: usize,          // nx
    pub points: Vec<NVec3>,   // row-major, z == requested_depth
}

impl WireframeSurface {
    /// Polyline along x for lattice row `i`
    pub fn row(&self, i: usize) -> &[NVec3] {
        let start = i * self.cols;
        &self.points[start..start + self.cols]
    }

    /// Polyline along y for lattice column `j`
    pub fn column(&self, j: usize) -> Vec<NVec3> {
        (0..self.rows).map(|i| self.points[i * self.cols + j]).collect()
    }
}

/// Plot decoration carried alongside the numeric data
#[derive(Debug, Clone)]
pub struct SceneLabels {
    pub title: String,
    pub axes: [String; 3],
    pub legend: String,
}

/// Everything a renderer needs to draw the lensing plot
#[derive(Resource, Debug, Clone)]
pub struct LensingScene {
    pub surfaces: Vec<WireframeSurface>,
    pub mass: PointMass,
    pub limits: [(f64, f64); 3], // x, y, z plot bounds
    pub labels: SceneLabels,
}

impl LensingScene {
    pub fn build(cfg: &LensConfig) -> Self {
        // Runtime types from the YAML-facing config
        let mass = PointMass {
            position: NVec3::from(cfg.mass.position),
            m: cfg.mass.m,
        };
        let constants = PhysicalConstants {
            g: cfg.constants.g,
            c: cfg.constants.c,
            epsilon: cfg.constants.epsilon,
        };
        let spec = GridSpec {
            min: cfg.grid.min,
            max: cfg.grid.max,
            size: cfg.grid.size,
        };
        let slices = match &cfg.slices.depths {
            Some(depths) => SliceSpec::Depths(depths.clone()),
            None => SliceSpec::Count(cfg.slices.count),
        };

        let grid = SampleGrid::new(&spec);
        let lens = PointMassLens::new(mass.clone(), constants);
        let deflected = deflect_all(&lens, &grid);

        info!(
            "deflected {} grid points, shape {:?}, mass {} at {:?}",
            grid.len(),
            deflected.shape(),
            mass.m,
            cfg.mass.position
        );

        let surfaces = build_surfaces(&grid, &deflected, &requested_depths(&slices, &spec));

        Self {
            surfaces,
            mass,
            limits: [(spec.min, spec.max); 3],
            labels: SceneLabels {
                title: cfg.display.title.clone(),
                axes: cfg.display.labels.clone(),
                legend: cfg.display.legend.clone(),
            },
        }
    }
}

/// One surface per requested depth that has a nearest sampled index
/// An empty depth axis yields no surfaces at all
pub fn build_surfaces(grid: &SampleGrid, deflected: &Grid3, depths: &[f64]) -> Vec<WireframeSurface> {
    let (rows, cols, _) = deflected.shape();
    let mut surfaces = Vec::with_capacity(depths.len());

    for &depth in depths {
        let Some(index) = nearest_index(&grid.z, depth) else {
            continue;
        };
        let Some(layer) = deflected.layer(index) else {
            continue;
        };

        debug!("slice z = {depth:.3} -> index {index} (sampled z = {:.3})", grid.z[index]);

        // Keep deflected x/y, pin z to the requested depth
        let points = layer
            .into_iter()
            .map(|p| NVec3::new(p.x, p.y, depth))
            .collect();

        surfaces.push(WireframeSurface {
            requested_depth: depth,
            index,
            sampled_depth: grid.z[index],
            rows,
            cols,
            points,
        });
    }

    info!("{} of {} depth slices matched", surfaces.len(), depths.len());
    surfaces
}
