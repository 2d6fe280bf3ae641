pub mod renderer;
pub mod lensim_vis3d;
