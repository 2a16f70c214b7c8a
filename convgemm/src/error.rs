use std::error::Error as StdError;

use thiserror::Error;

pub type BoxedError = Box<dyn StdError + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "looking for gemm geometry (does not exist): {algorithm}, {network_config}"
    )]
    GeometryNotFound {
        algorithm: String,
        network_config: String,
    },
    #[error(
        "looking for kernel (does not exist): {algorithm}, {network_config}"
    )]
    KernelNotFound {
        algorithm: String,
        network_config: String,
    },
    #[error("Failed to compile program {program} with \"{parameters}\": {source}")]
    CompileFailure {
        program: String,
        parameters: String,
        #[source]
        source: BoxedError,
    },
    #[error("Failed to create kernel {kernel} from program {program}: {source}")]
    KernelCreation {
        program: String,
        kernel: String,
        #[source]
        source: BoxedError,
    },
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::GeometryNotFound { .. } | Error::KernelNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
