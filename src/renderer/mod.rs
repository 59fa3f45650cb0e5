//! WebGPU rendering module
//!
//! The scene is built as a colored triangle list in logical pixels and
//! mapped to the surface by the pipeline.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderState, logical_to_ndc};
pub use scene::build_scene;
pub use vertex::Vertex;
