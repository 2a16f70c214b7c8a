use super::{EngineGeometry, GemmAlgorithm, GemmGeometry, TensorShape};

/// A matrix multiply already expressed in GEMM terms by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GemmProblem {
    pub m: usize,
    pub n: usize,
    pub k: usize,
    pub lda: usize,
    pub ldb: usize,
    pub ldc: usize,
    pub transpose_a: bool,
    pub transpose_b: bool,
    pub alpha: f32,
    pub beta: f32,
}

/// Lowers a forward convolution `y = conv(x, w)` to one per-sample GEMM.
///
/// `M` is the number of output channels, `N` the output spatial size and `K`
/// the patch size `C * kH * kW`. Batch is iterated outside of this geometry.
/// Returns the geometry together with its network configuration string.
pub fn conv_forward(
    x: impl TensorShape,
    w: impl TensorShape,
    y: impl TensorShape,
    is_data_col_major: bool,
) -> (GemmGeometry, String) {
    let input = x.lengths();
    let weights = w.lengths();
    let output = y.lengths();

    let k = input.channels * weights.spatial_size();
    let m = weights.batch;
    let n = output.spatial_size();

    let problem = GemmProblem {
        m,
        n,
        k,
        lda: k,
        ldb: n,
        ldc: n,
        transpose_a: false,
        transpose_b: false,
        alpha: 1.0,
        beta: 0.0,
    };
    lower(GemmAlgorithm::ConvolutionForward, &problem, is_data_col_major)
}

/// Lowers the weight gradient of a convolution `dw += dy * im2col(x)^T`.
///
/// `M` is the number of output channels, `N` the patch size `C * kH * kW`
/// and `K` the output spatial size. `beta` is 1 so that gradients accumulate
/// over the batch.
pub fn conv_backward_weights(
    dy: impl TensorShape,
    x: impl TensorShape,
    dw: impl TensorShape,
    is_data_col_major: bool,
) -> (GemmGeometry, String) {
    let input = x.lengths();
    let weights = dw.lengths();
    let output = dy.lengths();

    let n = input.channels * weights.spatial_size();
    let m = weights.batch;
    let k = output.spatial_size();

    let problem = GemmProblem {
        m,
        n,
        k,
        lda: k,
        ldb: k,
        ldc: n,
        transpose_a: false,
        transpose_b: true,
        alpha: 1.0,
        beta: 1.0,
    };
    lower(
        GemmAlgorithm::ConvolutionBackwardWeights,
        &problem,
        is_data_col_major,
    )
}

/// Normalizes a caller-built GEMM for the column-major engine.
pub fn gemm(
    problem: &GemmProblem,
    is_data_col_major: bool,
) -> (GemmGeometry, String) {
    lower(GemmAlgorithm::Generic, problem, is_data_col_major)
}

// Row-major C = A * B is column-major C^T = B^T * A^T over the same memory,
// so row-major problems swap the A and B roles instead of moving data.
fn lower(
    algorithm: GemmAlgorithm,
    problem: &GemmProblem,
    is_data_col_major: bool,
) -> (GemmGeometry, String) {
    let GemmProblem {
        m,
        n,
        k,
        lda,
        ldb,
        ldc,
        transpose_a,
        transpose_b,
        alpha,
        beta,
    } = *problem;

    let (engine, dims, strides) = if is_data_col_major {
        (
            EngineGeometry::new(
                true,
                transpose_a,
                transpose_b,
                false,
                lda,
                ldb,
                ldc,
                m,
                n,
                k,
            ),
            [m, n, k],
            [lda, ldb, ldc],
        )
    } else {
        (
            EngineGeometry::new(
                true,
                transpose_b,
                transpose_a,
                false,
                ldb,
                lda,
                ldc,
                n,
                m,
                k,
            ),
            [n, m, k],
            [ldb, lda, ldc],
        )
    };

    let geometry = GemmGeometry {
        dims,
        strides,
        algorithm,
        alpha,
        beta,
        engine,
    };
    let network_config = engine.network_config();
    (geometry, network_config)
}
