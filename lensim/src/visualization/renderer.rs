//! Renderer boundary
//!
//! The numeric core only produces a [`LensingScene`]; anything that can
//! display (or inspect) one implements [`SceneRenderer`].

use anyhow::{bail, Result};
use bevy::app::AppExit;

use crate::lensing::scene::LensingScene;
use crate::visualization::lensim_vis3d::run_3d;

pub trait SceneRenderer {
    fn render(&mut self, scene: LensingScene) -> Result<()>;
}

/// Opens a bevy window and blocks until it is closed
#[derive(Debug, Default)]
pub struct BevyRenderer;

impl SceneRenderer for BevyRenderer {
    fn render(&mut self, scene: LensingScene) -> Result<()> {
        match run_3d(scene) {
            AppExit::Success => Ok(()),
            AppExit::Error(code) => bail!("viewer exited with code {code}"),
        }
    }
}
