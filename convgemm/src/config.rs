use serde::{Deserialize, Serialize};

use crate::Result;

/// How concurrent misses on the same kernel key are handled.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Copy, Clone, Default)]
#[serde(rename_all = "snake_case")]
pub enum CompilationPolicy {
    /// Check, compile and insert under one cache-wide lock.
    #[default]
    Serialized,
    /// Racing misses compile independently; the first insert wins.
    Concurrent,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct RegistryConfig {
    #[serde(default)]
    pub capacity: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct KernelCacheConfig {
    #[serde(default)]
    pub capacity: Option<usize>,
    #[serde(default)]
    pub compilation: CompilationPolicy,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct GemmContextConfig {
    #[serde(default)]
    pub geometry_registry: RegistryConfig,
    #[serde(default)]
    pub kernel_cache: KernelCacheConfig,
}

impl GemmContextConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
