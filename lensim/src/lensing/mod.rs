pub mod states;
pub mod grid;
pub mod deflection;
pub mod slices;
pub mod scene;
