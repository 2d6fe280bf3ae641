//! Regular 3D sample grid and the deflected grid derived from it
//!
//! Points are laid out like an "xy"-indexed meshgrid: shape is
//! `(ny, nx, nz)` and entry `(i, j, k)` is `(x[j], y[i], z[k])`

use crate::lensing::states::NVec3;

/// Grid shape as `(ny, nx, nz)`
pub type Shape3 = (usize, usize, usize);

/// Bounds and resolution shared by all three axes
#[derive(Debug, Clone, PartialEq)]
pub struct GridSpec {
    pub min: f64,
    pub max: f64,
    pub size: usize, // samples per axis
}

/// `n` evenly spaced samples over `[start, stop]`, endpoints included
/// `n == 0` gives an empty vector, `n == 1` gives `[start]`
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            // Pin the last sample so rounding never leaves it short of `stop`
            out[n - 1] = stop;
            out
        }
    }
}

fn flat_index(shape: Shape3, i: usize, j: usize, k: usize) -> usize {
    let (_, nx, nz) = shape;
    (i * nx + j) * nz + k
}

/// Dense lattice built from three independent axis samples
#[derive(Debug, Clone)]
pub struct SampleGrid {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl SampleGrid {
    pub fn new(spec: &GridSpec) -> Self {
        let axis = linspace(spec.min, spec.max, spec.size);
        Self {
            x: axis.clone(),
            y: axis.clone(),
            z: axis,
        }
    }

    pub fn from_axes(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Self {
        Self { x, y, z }
    }

    pub fn shape(&self) -> Shape3 {
        (self.y.len(), self.x.len(), self.z.len())
    }

    pub fn len(&self) -> usize {
        self.y.len() * self.x.len() * self.z.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Coordinate at lattice index `(i, j, k)`, or `None` when out of range
    pub fn point(&self, i: usize, j: usize, k: usize) -> Option<NVec3> {
        Some(NVec3::new(*self.x.get(j)?, *self.y.get(i)?, *self.z.get(k)?))
    }

    /// All points in flat storage order (`k` fastest, then `j`, then `i`)
    pub fn iter(&self) -> impl Iterator<Item = NVec3> + '_ {
        self.y.iter().flat_map(move |&y| {
            self.x.iter().flat_map(move |&x| {
                self.z.iter().map(move |&z| NVec3::new(x, y, z))
            })
        })
    }
}

/// Flat 3D array of coordinates with an `(ny, nx, nz)` shape
#[derive(Debug, Clone)]
pub struct Grid3 {
    shape: Shape3,
    points: Vec<NVec3>,
}

impl Grid3 {
    /// `points` must be in the flat order produced by [`SampleGrid::iter`]
    pub fn from_points(shape: Shape3, points: Vec<NVec3>) -> Self {
        debug_assert_eq!(shape.0 * shape.1 * shape.2, points.len());
        Self { shape, points }
    }

    pub fn shape(&self) -> Shape3 {
        self.shape
    }

    pub fn points(&self) -> &[NVec3] {
        &self.points
    }

    pub fn get(&self, i: usize, j: usize, k: usize) -> Option<&NVec3> {
        let (ny, nx, nz) = self.shape;
        if i >= ny || j >= nx || k >= nz {
            return None;
        }
        self.points.get(flat_index(self.shape, i, j, k))
    }

    /// The `(ny, nx)` layer at depth index `k`, row-major over `(i, j)`
    pub fn layer(&self, k: usize) -> Option<Vec<NVec3>> {
        let (ny, nx, nz) = self.shape;
        if k >= nz {
            return None;
        }

        let mut out = Vec::with_capacity(ny * nx);
        for i in 0..ny {
            for j in 0..nx {
                out.push(self.points[flat_index(self.shape, i, j, k)]);
            }
        }
        Some(out)
    }
}
