use std::sync::{Mutex, PoisonError, RwLock};

use log::debug;

use super::{Kernel, KernelSource, normalize_build_parameters};
use crate::{
    Error, Result,
    backend::{Backend, CommandQueue},
    config::{CompilationPolicy, KernelCacheConfig},
    storage::BoundedMap,
};

type KernelKey = (String, String);

/// Compiled kernels keyed by `(algorithm, network_config)`.
///
/// Kernels built with an empty algorithm or network configuration are
/// returned to the caller but never stored.
pub struct KernelCache<B: Backend> {
    kernels: RwLock<BoundedMap<KernelKey, Kernel<B>>>,
    compile_lock: Mutex<()>,
    compilation: CompilationPolicy,
}

impl<B: Backend> KernelCache<B> {
    pub fn new() -> Self {
        Self::with_config(&KernelCacheConfig::default())
    }

    pub fn with_config(config: &KernelCacheConfig) -> Self {
        Self {
            kernels: RwLock::new(BoundedMap::new(config.capacity)),
            compile_lock: Mutex::new(()),
            compilation: config.compilation,
        }
    }

    pub fn get_existing(
        &self,
        algorithm: &str,
        network_config: &str,
    ) -> Result<Kernel<B>> {
        debug!("key: {algorithm}, {network_config}");
        let key = (algorithm.to_string(), network_config.to_string());
        match self.cached(&key) {
            Some(kernel) => {
                debug!("kernel found");
                Ok(kernel)
            },
            None => Err(Error::KernelNotFound {
                algorithm: key.0,
                network_config: key.1,
            }),
        }
    }

    /// Returns the cached kernel for the key, compiling it on a miss.
    ///
    /// A hit returns the stored kernel as is, including the work sizes it was
    /// first created with.
    pub fn get_or_build(
        &self,
        queue: &B::Queue,
        algorithm: &str,
        network_config: &str,
        source: &KernelSource<'_>,
    ) -> Result<Kernel<B>> {
        debug!("key: {algorithm}, {network_config}");
        let key = (algorithm.to_string(), network_config.to_string());
        if let Some(kernel) = self.cached(&key) {
            debug!("kernel found");
            return Ok(kernel);
        }
        debug!("kernel not found");

        if algorithm.is_empty() || network_config.is_empty() {
            debug!(
                "building anonymous kernel {}::{}",
                source.program_name, source.kernel_name
            );
            return Self::build(queue, source);
        }

        match self.compilation {
            CompilationPolicy::Serialized => {
                let _guard = self
                    .compile_lock
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                if let Some(kernel) = self.cached(&key) {
                    debug!("kernel built by another caller");
                    return Ok(kernel);
                }
                let kernel = Self::build(queue, source)?;
                self.insert(key, kernel.clone());
                Ok(kernel)
            },
            CompilationPolicy::Concurrent => {
                let kernel = Self::build(queue, source)?;
                let mut kernels =
                    self.kernels.write().unwrap_or_else(PoisonError::into_inner);
                if !kernels.contains_key(&key) {
                    let evicted = kernels.insert(key, kernel.clone());
                    if let Some(((algorithm, network_config), _)) = evicted {
                        debug!("evicted kernel: {algorithm}, {network_config}");
                    }
                }
                Ok(kernel)
            },
        }
    }

    pub fn contains(
        &self,
        algorithm: &str,
        network_config: &str,
    ) -> bool {
        let key = (algorithm.to_string(), network_config.to_string());
        self.kernels
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.kernels.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> Option<usize> {
        self.kernels
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .capacity()
    }

    fn cached(
        &self,
        key: &KernelKey,
    ) -> Option<Kernel<B>> {
        self.kernels
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn insert(
        &self,
        key: KernelKey,
        kernel: Kernel<B>,
    ) {
        let evicted = self
            .kernels
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, kernel);
        if let Some(((algorithm, network_config), _)) = evicted {
            debug!("evicted kernel: {algorithm}, {network_config}");
        }
    }

    fn build(
        queue: &B::Queue,
        source: &KernelSource<'_>,
    ) -> Result<Kernel<B>> {
        let parameters = normalize_build_parameters(source.build_parameters);
        let program = B::load_program(
            queue.context(),
            queue.device(),
            source.program_name,
            &parameters,
        )
        .map_err(|error| Error::CompileFailure {
            program: source.program_name.to_string(),
            parameters: parameters.to_string(),
            source: Box::new(error),
        })?;
        let handle = B::create_kernel(&program, source.kernel_name).map_err(
            |error| Error::KernelCreation {
                program: source.program_name.to_string(),
                kernel: source.kernel_name.to_string(),
                source: Box::new(error),
            },
        )?;
        debug!(
            "compiled kernel {}::{} with \"{parameters}\"",
            source.program_name, source.kernel_name
        );
        Ok(Kernel::new(program, handle, source))
    }
}

impl<B: Backend> Default for KernelCache<B> {
    fn default() -> Self {
        Self::new()
    }
}
