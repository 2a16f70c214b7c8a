use crate::{
    GeometryRegistry, Result,
    backend::Backend,
    config::GemmContextConfig,
    geometry::{self, GemmGeometry, GemmProblem, TensorShape},
    kernel_cache::{Kernel, KernelCache, KernelSource},
};

/// Geometry registry and kernel cache owned by one compute handle.
///
/// `prepare_*` builds a geometry and registers it under its algorithm name
/// and network configuration, so dispatch code can later fetch both the
/// geometry and the kernel with the same pair.
pub struct GemmContext<B: Backend> {
    geometries: GeometryRegistry,
    kernels: KernelCache<B>,
}

impl<B: Backend> GemmContext<B> {
    pub fn new() -> Self {
        Self::with_config(&GemmContextConfig::default())
    }

    pub fn with_config(config: &GemmContextConfig) -> Self {
        Self {
            geometries: GeometryRegistry::with_config(
                &config.geometry_registry,
            ),
            kernels: KernelCache::with_config(&config.kernel_cache),
        }
    }

    pub fn geometries(&self) -> &GeometryRegistry {
        &self.geometries
    }

    pub fn kernels(&self) -> &KernelCache<B> {
        &self.kernels
    }

    pub fn prepare_conv_forward(
        &self,
        x: impl TensorShape,
        w: impl TensorShape,
        y: impl TensorShape,
        is_data_col_major: bool,
    ) -> (GemmGeometry, String) {
        self.register(geometry::conv_forward(x, w, y, is_data_col_major))
    }

    pub fn prepare_conv_backward_weights(
        &self,
        dy: impl TensorShape,
        x: impl TensorShape,
        dw: impl TensorShape,
        is_data_col_major: bool,
    ) -> (GemmGeometry, String) {
        self.register(geometry::conv_backward_weights(
            dy,
            x,
            dw,
            is_data_col_major,
        ))
    }

    pub fn prepare_gemm(
        &self,
        problem: &GemmProblem,
        is_data_col_major: bool,
    ) -> (GemmGeometry, String) {
        self.register(geometry::gemm(problem, is_data_col_major))
    }

    pub fn geometry(
        &self,
        algorithm: &str,
        network_config: &str,
    ) -> Result<GemmGeometry> {
        self.geometries.lookup(algorithm, network_config)
    }

    pub fn kernel(
        &self,
        algorithm: &str,
        network_config: &str,
    ) -> Result<Kernel<B>> {
        self.kernels.get_existing(algorithm, network_config)
    }

    pub fn kernel_or_build(
        &self,
        queue: &B::Queue,
        algorithm: &str,
        network_config: &str,
        source: &KernelSource<'_>,
    ) -> Result<Kernel<B>> {
        self.kernels
            .get_or_build(queue, algorithm, network_config, source)
    }

    fn register(
        &self,
        (geometry, network_config): (GemmGeometry, String),
    ) -> (GemmGeometry, String) {
        self.geometries.store(
            geometry.algorithm.name(),
            &network_config,
            geometry.clone(),
        );
        (geometry, network_config)
    }
}

impl<B: Backend> Default for GemmContext<B> {
    fn default() -> Self {
        Self::new()
    }
}
