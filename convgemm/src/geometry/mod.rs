pub mod builder;
mod engine_geometry;
mod gemm_geometry;
mod tensor_shape;

pub use builder::{GemmProblem, conv_backward_weights, conv_forward, gemm};
pub use engine_geometry::EngineGeometry;
pub use gemm_geometry::{GemmAlgorithm, GemmGeometry};
pub use tensor_shape::{Nchw, TensorShape};
