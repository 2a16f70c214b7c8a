use super::EngineGeometry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GemmAlgorithm {
    ConvolutionForward,
    ConvolutionBackwardWeights,
    Generic,
}

impl GemmAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            GemmAlgorithm::ConvolutionForward => "forward-gemm-conv",
            GemmAlgorithm::ConvolutionBackwardWeights => {
                "backward-weights-gemm-conv"
            },
            GemmAlgorithm::Generic => "generic-gemm",
        }
    }
}

/// One matrix multiply problem `C = alpha * op(A) * op(B) + beta * C`.
///
/// `dims` and `strides` are reported in the caller's layout: `(M, N, K)` and
/// `(lda, ldb, ldc)` for column-major data, `(N, M, K)` and `(ldb, lda, ldc)`
/// for row-major data. `engine` always describes the same problem as a
/// column-major multiply.
#[derive(Debug, Clone, PartialEq)]
pub struct GemmGeometry {
    pub dims: [usize; 3],
    pub strides: [usize; 3],
    pub algorithm: GemmAlgorithm,
    pub alpha: f32,
    pub beta: f32,
    pub engine: EngineGeometry,
}

impl GemmGeometry {
    pub fn network_config(&self) -> String {
        self.engine.network_config()
    }
}
