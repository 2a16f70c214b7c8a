use std::fmt::{self, Debug, Formatter};

use crate::backend::Backend;

/// Program and entry point to build on a cache miss.
#[derive(Debug, Clone, Copy)]
pub struct KernelSource<'a> {
    pub program_name: &'a str,
    pub kernel_name: &'a str,
    pub local_work_size: &'a [usize],
    pub global_work_size: &'a [usize],
    pub build_parameters: &'a str,
}

impl<'a> KernelSource<'a> {
    pub fn new(
        program_name: &'a str,
        kernel_name: &'a str,
        local_work_size: &'a [usize],
        global_work_size: &'a [usize],
    ) -> Self {
        Self {
            program_name,
            kernel_name,
            local_work_size,
            global_work_size,
            build_parameters: "",
        }
    }

    pub fn with_build_parameters(
        self,
        build_parameters: &'a str,
    ) -> Self {
        Self {
            build_parameters,
            ..self
        }
    }
}

/// A compiled entry point with the launch sizes it was created with.
pub struct Kernel<B: Backend> {
    program: B::Program,
    handle: B::KernelHandle,
    program_name: String,
    kernel_name: String,
    local_work_size: Vec<usize>,
    global_work_size: Vec<usize>,
}

impl<B: Backend> Kernel<B> {
    pub(crate) fn new(
        program: B::Program,
        handle: B::KernelHandle,
        source: &KernelSource<'_>,
    ) -> Self {
        Self {
            program,
            handle,
            program_name: source.program_name.to_string(),
            kernel_name: source.kernel_name.to_string(),
            local_work_size: source.local_work_size.to_vec(),
            global_work_size: source.global_work_size.to_vec(),
        }
    }

    pub fn program(&self) -> &B::Program {
        &self.program
    }

    pub fn handle(&self) -> &B::KernelHandle {
        &self.handle
    }

    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    pub fn kernel_name(&self) -> &str {
        &self.kernel_name
    }

    pub fn local_work_size(&self) -> &[usize] {
        &self.local_work_size
    }

    pub fn global_work_size(&self) -> &[usize] {
        &self.global_work_size
    }
}

impl<B: Backend> Clone for Kernel<B> {
    fn clone(&self) -> Self {
        Self {
            program: self.program.clone(),
            handle: self.handle.clone(),
            program_name: self.program_name.clone(),
            kernel_name: self.kernel_name.clone(),
            local_work_size: self.local_work_size.clone(),
            global_work_size: self.global_work_size.clone(),
        }
    }
}

impl<B: Backend> Debug for Kernel<B> {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("Kernel")
            .field("program_name", &self.program_name)
            .field("kernel_name", &self.kernel_name)
            .field("local_work_size", &self.local_work_size)
            .field("global_work_size", &self.global_work_size)
            .finish_non_exhaustive()
    }
}
