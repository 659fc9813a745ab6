//! Growable typed GPU buffers.
//!
//! The billboard instance list changes length every time the visible
//! count steps, so the buffer grows automatically (2x strategy) and
//! never shrinks - GPU buffers cannot be resized in place.

/// A typed GPU buffer that grows to fit the data written into it.
pub struct TypedBuffer<T> {
    buffer: wgpu::Buffer,
    /// Capacity in bytes.
    capacity: usize,
    count: usize,
    usage: wgpu::BufferUsages,
    label: String,
    _marker: std::marker::PhantomData<T>,
}

impl<T: bytemuck::Pod> TypedBuffer<T> {
    /// Buffer with capacity for `capacity` items.
    #[must_use]
    pub fn with_capacity(
        device: &wgpu::Device,
        label: &str,
        capacity: usize,
        usage: wgpu::BufferUsages,
    ) -> Self {
        let byte_capacity = (size_of::<T>() * capacity).max(64);
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: byte_capacity as u64,
            usage: usage | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        Self {
            buffer,
            capacity: byte_capacity,
            count: 0,
            usage,
            label: label.to_owned(),
            _marker: std::marker::PhantomData,
        }
    }

    /// Write `data`, reallocating if it exceeds the current capacity.
    ///
    /// Returns `true` if the buffer was reallocated (any bind group
    /// referencing it must be recreated).
    pub fn write(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        data: &[T],
    ) -> bool {
        let data_bytes: &[u8] = bytemuck::cast_slice(data);
        let needed = data_bytes.len();

        let reallocated = if needed > self.capacity {
            let new_capacity = (needed * 2).max(self.capacity + 1024);
            self.buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(&self.label),
                size: new_capacity as u64,
                usage: self.usage | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            self.capacity = new_capacity;
            true
        } else {
            false
        };

        if needed > 0 {
            queue.write_buffer(&self.buffer, 0, data_bytes);
        }
        self.count = data.len();

        reallocated
    }

    /// The underlying wgpu buffer.
    #[must_use]
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Number of items from the most recent write.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether the most recent write was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
