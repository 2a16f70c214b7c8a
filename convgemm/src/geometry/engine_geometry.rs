use std::fmt::{self, Display, Formatter};

/// Geometry in the native order of the column-major matmul engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EngineGeometry {
    pub column_major: bool,
    pub transpose_a: bool,
    pub transpose_b: bool,
    pub transpose_c: bool,
    pub lda: usize,
    pub ldb: usize,
    pub ldc: usize,
    pub m: usize,
    pub n: usize,
    pub k: usize,
    pub a_offset: usize,
    pub b_offset: usize,
    pub c_offset: usize,
}

impl EngineGeometry {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        column_major: bool,
        transpose_a: bool,
        transpose_b: bool,
        transpose_c: bool,
        lda: usize,
        ldb: usize,
        ldc: usize,
        m: usize,
        n: usize,
        k: usize,
    ) -> Self {
        Self {
            column_major,
            transpose_a,
            transpose_b,
            transpose_c,
            lda,
            ldb,
            ldc,
            m,
            n,
            k,
            a_offset: 0,
            b_offset: 0,
            c_offset: 0,
        }
    }

    /// Structural cache key. Depends on shape and layout fields only.
    pub fn network_config(&self) -> String {
        self.to_string()
    }
}

impl Display for EngineGeometry {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "cm{}_ta{}_tb{}_tc{}_lda{}_ldb{}_ldc{}_m{}_n{}_k{}_oa{}_ob{}_oc{}",
            self.column_major as u8,
            self.transpose_a as u8,
            self.transpose_b as u8,
            self.transpose_c as u8,
            self.lda,
            self.ldb,
            self.ldc,
            self.m,
            self.n,
            self.k,
            self.a_offset,
            self.b_offset,
            self.c_offset,
        )
    }
}
