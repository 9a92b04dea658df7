//! WebGPU rendering module
//!
//! The frame is drawn entirely in the fragment shader from a signed
//! distance field; the only geometry is a fullscreen triangle.

pub mod sdf_pipeline;

pub use sdf_pipeline::SdfRenderState;
