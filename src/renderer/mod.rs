//! wgpu rendering module
//!
//! Scenes are tessellated on the CPU into flat-colored triangles in playfield
//! coordinates; the pipeline maps them to the surface.

pub mod font;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use font::TextRenderer;
pub use pipeline::RenderState;
pub use scene::build_scene;
pub use vertex::{Vertex, colors};
