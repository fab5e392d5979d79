pub mod camera;
pub mod mesh;
pub mod renderer;
pub mod scene;
pub mod vertex;
