mod build_parameters;
mod cache;
mod kernel;

pub use build_parameters::normalize_build_parameters;
pub use cache::KernelCache;
pub use kernel::{Kernel, KernelSource};
