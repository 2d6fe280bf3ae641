//! Depth slice selection
//!
//! Requested depths are matched to the closest sampled depth, no interpolation.

use crate::lensing::grid::{linspace, GridSpec};

/// Which depths to draw
#[derive(Debug, Clone, PartialEq)]
pub enum SliceSpec {
    /// `n` depths evenly spaced over the grid bounds
    Count(usize),
    /// Explicit depth values, drawn in the given order
    Depths(Vec<f64>),
}

/// Resolve a [`SliceSpec`] against the grid bounds
pub fn requested_depths(slices: &SliceSpec, grid: &GridSpec) -> Vec<f64> {
    match slices {
        SliceSpec::Count(n) => linspace(grid.min, grid.max, *n),
        SliceSpec::Depths(d) => d.clone(),
    }
}

/// Index of the sample closest to `value`
/// Ties go to the lowest index; an empty axis gives `None`
pub fn nearest_index(axis: &[f64], value: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (idx, &sample) in axis.iter().enumerate() {
        let diff = (sample - value).abs();
        // strict less-than keeps the earlier index on ties
        let closer = match best {
            None => true,
            Some((_, best_diff)) => diff < best_diff,
        };
        if closer {
            best = Some((idx, diff));
        }
    }

    best.map(|(idx, _)| idx)
}
