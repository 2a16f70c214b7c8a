#![allow(dead_code)]

use std::{
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
    time::Duration,
};

use convgemm::{Backend, CommandQueue, EngineGeometry};
use thiserror::Error;

pub struct MockBackend;

#[derive(Default)]
pub struct MockContext {
    compilations: AtomicUsize,
    build_parameters: Mutex<Vec<String>>,
    compile_delay: Option<Duration>,
}

impl MockContext {
    pub fn with_compile_delay(delay: Duration) -> Self {
        Self {
            compile_delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn compilations(&self) -> usize {
        self.compilations.load(Ordering::SeqCst)
    }

    pub fn build_parameters(&self) -> Vec<String> {
        self.build_parameters.lock().unwrap().clone()
    }
}

pub struct MockDevice;

pub struct MockQueue {
    pub context: Arc<MockContext>,
    device: MockDevice,
}

impl MockQueue {
    pub fn new() -> Self {
        Self::with_context(MockContext::default())
    }

    pub fn with_context(context: MockContext) -> Self {
        Self {
            context: Arc::new(context),
            device: MockDevice,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockProgram {
    pub id: usize,
    pub name: String,
    pub build_parameters: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockKernelHandle {
    pub program_id: usize,
    pub entry_point: String,
}

#[derive(Debug, Error)]
pub enum MockError {
    #[error("program {0} failed to compile")]
    CompileFailed(String),
    #[error("entry point {0} not found")]
    MissingEntryPoint(String),
}

/// Program names starting with this prefix fail to compile.
pub const BROKEN_PROGRAM_PREFIX: &str = "broken";

impl Backend for MockBackend {
    type Context = MockContext;
    type Device = MockDevice;
    type Queue = MockQueue;
    type Program = MockProgram;
    type KernelHandle = MockKernelHandle;
    type Error = MockError;

    fn load_program(
        context: &MockContext,
        _device: &MockDevice,
        program_name: &str,
        build_parameters: &str,
    ) -> Result<MockProgram, MockError> {
        if let Some(delay) = context.compile_delay {
            thread::sleep(delay);
        }
        let id = context.compilations.fetch_add(1, Ordering::SeqCst);
        context
            .build_parameters
            .lock()
            .unwrap()
            .push(build_parameters.to_string());
        if program_name.starts_with(BROKEN_PROGRAM_PREFIX) {
            return Err(MockError::CompileFailed(program_name.to_string()));
        }
        Ok(MockProgram {
            id,
            name: program_name.to_string(),
            build_parameters: build_parameters.to_string(),
        })
    }

    fn create_kernel(
        program: &MockProgram,
        kernel_name: &str,
    ) -> Result<MockKernelHandle, MockError> {
        if kernel_name.is_empty() {
            return Err(MockError::MissingEntryPoint(program.name.clone()));
        }
        Ok(MockKernelHandle {
            program_id: program.id,
            entry_point: kernel_name.to_string(),
        })
    }
}

impl CommandQueue for MockQueue {
    type Backend = MockBackend;

    fn context(&self) -> &MockContext {
        &self.context
    }

    fn device(&self) -> &MockDevice {
        &self.device
    }
}

/// Column-major `C = alpha * op(A) * op(B) + beta * C` as the engine runs it.
pub fn reference_gemm(
    engine: &EngineGeometry,
    alpha: f32,
    beta: f32,
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
) {
    assert!(engine.column_major);
    for j in 0..engine.n {
        for i in 0..engine.m {
            let mut sum = 0.0f32;
            for p in 0..engine.k {
                let a_value = if engine.transpose_a {
                    a[engine.a_offset + p + i * engine.lda]
                } else {
                    a[engine.a_offset + i + p * engine.lda]
                };
                let b_value = if engine.transpose_b {
                    b[engine.b_offset + j + p * engine.ldb]
                } else {
                    b[engine.b_offset + p + j * engine.ldb]
                };
                sum += a_value * b_value;
            }
            let index = engine.c_offset + i + j * engine.ldc;
            c[index] = alpha * sum + beta * c[index];
        }
    }
}

/// Row-major `C = alpha * op(A) * op(B) + beta * C` computed directly.
#[allow(clippy::too_many_arguments)]
pub fn row_major_gemm(
    m: usize,
    n: usize,
    k: usize,
    transpose_a: bool,
    transpose_b: bool,
    lda: usize,
    ldb: usize,
    ldc: usize,
    alpha: f32,
    beta: f32,
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
) {
    for i in 0..m {
        for j in 0..n {
            let mut sum = 0.0f32;
            for p in 0..k {
                let a_value = if transpose_a {
                    a[p * lda + i]
                } else {
                    a[i * lda + p]
                };
                let b_value = if transpose_b {
                    b[j * ldb + p]
                } else {
                    b[p * ldb + j]
                };
                sum += a_value * b_value;
            }
            let index = i * ldc + j;
            c[index] = alpha * sum + beta * c[index];
        }
    }
}

pub fn test_data(
    len: usize,
    seed: usize,
) -> Vec<f32> {
    (0..len).map(|i| ((i * 7 + seed * 3) % 11) as f32 - 5.0).collect()
}
