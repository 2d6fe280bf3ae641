pub mod lensing;
pub mod configuration;
pub mod visualization;

pub use lensing::states::{PointMass, PhysicalConstants, NVec3};
pub use lensing::deflection::{Deflection, PointMassLens, deflect_all};
pub use lensing::grid::{linspace, GridSpec, SampleGrid, Grid3, Shape3};
pub use lensing::slices::{nearest_index, requested_depths, SliceSpec};
pub use lensing::scene::{LensingScene, WireframeSurface, SceneLabels, build_surfaces};

pub use configuration::config::{LensConfig, MassConfig, ConstantsConfig, GridConfig, SliceConfig, DisplayConfig};
pub use configuration::load_config;

pub use visualization::{renderer::{SceneRenderer, BevyRenderer}, lensim_vis3d::run_3d};
