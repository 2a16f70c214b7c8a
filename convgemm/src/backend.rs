use std::error::Error;

/// Device program loading and kernel creation, provided by the GPU layer.
pub trait Backend: Sized {
    type Context;
    type Device;
    type Queue: CommandQueue<Backend = Self>;
    type Program: Clone;
    type KernelHandle: Clone;
    type Error: Error + Send + Sync + 'static;

    /// Compiles `program_name` for `device`. Fails on any compile error.
    fn load_program(
        context: &Self::Context,
        device: &Self::Device,
        program_name: &str,
        build_parameters: &str,
    ) -> Result<Self::Program, Self::Error>;

    fn create_kernel(
        program: &Self::Program,
        kernel_name: &str,
    ) -> Result<Self::KernelHandle, Self::Error>;
}

pub trait CommandQueue: Sized {
    type Backend: Backend<Queue = Self>;

    fn context(&self) -> &<Self::Backend as Backend>::Context;

    fn device(&self) -> &<Self::Backend as Backend>::Device;
}
