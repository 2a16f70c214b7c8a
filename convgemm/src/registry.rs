use std::sync::{PoisonError, RwLock};

use log::{debug, trace};

use crate::{
    Error, Result, config::RegistryConfig, geometry::GemmGeometry,
    storage::BoundedMap,
};

type GeometryKey = (String, String);

/// Geometries keyed by `(algorithm, network_config)`.
///
/// Lookups never build a geometry; the key must match a stored one byte for
/// byte.
pub struct GeometryRegistry {
    inner: RwLock<BoundedMap<GeometryKey, GemmGeometry>>,
}

impl GeometryRegistry {
    pub fn new() -> Self {
        Self::with_config(&RegistryConfig::default())
    }

    pub fn with_config(config: &RegistryConfig) -> Self {
        Self {
            inner: RwLock::new(BoundedMap::new(config.capacity)),
        }
    }

    pub fn store(
        &self,
        algorithm: &str,
        network_config: &str,
        geometry: GemmGeometry,
    ) {
        trace!("store gemm geometry: {algorithm}, {network_config}");
        let key = (algorithm.to_string(), network_config.to_string());
        let evicted = self
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, geometry);
        if let Some(((algorithm, network_config), _)) = evicted {
            debug!("evicted gemm geometry: {algorithm}, {network_config}");
        }
    }

    pub fn lookup(
        &self,
        algorithm: &str,
        network_config: &str,
    ) -> Result<GemmGeometry> {
        let key = (algorithm.to_string(), network_config.to_string());
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
            .ok_or_else(|| Error::GeometryNotFound {
                algorithm: key.0.clone(),
                network_config: key.1.clone(),
            })
    }

    pub fn contains(
        &self,
        algorithm: &str,
        network_config: &str,
    ) -> bool {
        let key = (algorithm.to_string(), network_config.to_string());
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for GeometryRegistry {
    fn default() -> Self {
        Self::new()
    }
}
