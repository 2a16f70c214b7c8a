pub mod backend;
pub mod config;
mod context;
mod error;
pub mod geometry;
pub mod kernel_cache;
mod registry;
mod storage;

pub use backend::{Backend, CommandQueue};
pub use config::{
    CompilationPolicy, GemmContextConfig, KernelCacheConfig, RegistryConfig,
};
pub use context::GemmContext;
pub use error::{BoxedError, Error, Result};
pub use geometry::{
    EngineGeometry, GemmAlgorithm, GemmGeometry, GemmProblem, Nchw,
    TensorShape,
};
pub use kernel_cache::{Kernel, KernelCache, KernelSource};
pub use registry::GeometryRegistry;
