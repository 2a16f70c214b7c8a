/// Extents of an NCHW tensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nchw {
    pub batch: usize,
    pub channels: usize,
    pub height: usize,
    pub width: usize,
}

impl Nchw {
    pub fn new(
        batch: usize,
        channels: usize,
        height: usize,
        width: usize,
    ) -> Self {
        Self {
            batch,
            channels,
            height,
            width,
        }
    }

    pub fn spatial_size(&self) -> usize {
        self.height * self.width
    }
}

/// Read-only access to the lengths of a tensor descriptor.
///
/// Only extents are consumed here; strides and element buffers stay with the
/// descriptor owner.
pub trait TensorShape {
    fn lengths(&self) -> Nchw;
}

impl TensorShape for Nchw {
    fn lengths(&self) -> Nchw {
        *self
    }
}

impl TensorShape for [usize; 4] {
    fn lengths(&self) -> Nchw {
        let [batch, channels, height, width] = *self;
        Nchw::new(batch, channels, height, width)
    }
}

impl TensorShape for (usize, usize, usize, usize) {
    fn lengths(&self) -> Nchw {
        let (batch, channels, height, width) = *self;
        Nchw::new(batch, channels, height, width)
    }
}

impl<T: TensorShape + ?Sized> TensorShape for &T {
    fn lengths(&self) -> Nchw {
        (**self).lengths()
    }
}
