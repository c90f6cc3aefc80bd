use super::camera::Camera;
use super::pipeline::{CameraUniform, MeshPipeline, ModelUniform};
use crate::geometry::MeshData;
use crate::math::Transform;

/// Buffer size for `byte_len` bytes, rounded up to the 4-byte copy alignment.
pub fn aligned_size(byte_len: u64) -> u64 {
    (byte_len + 3) & !3
}

/// Allocates a buffer mapped at creation, copies `contents` in and unmaps it.
fn create_mapped_buffer(
    device: &wgpu::Device,
    label: &str,
    contents: &[u8],
    usage: wgpu::BufferUsages,
) -> wgpu::Buffer {
    let buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: aligned_size(contents.len() as u64),
        usage,
        mapped_at_creation: true,
    });
    if !contents.is_empty() {
        let mut mapped = buffer.slice(..).get_mapped_range_mut();
        mapped[..contents.len()].copy_from_slice(contents);
    }
    buffer.unmap();
    buffer
}

/// GPU-resident copy of one [`MeshData`] with its own pipeline and uniforms.
pub struct Mesh {
    pub position_buffer: wgpu::Buffer,
    pub color_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
    pipeline: MeshPipeline,
    camera_buffer: wgpu::Buffer,
    model_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    transform: Transform,
}

impl Mesh {
    pub fn new(device: &wgpu::Device, color_format: wgpu::TextureFormat, data: &MeshData) -> Self {
        let position_buffer = create_mapped_buffer(
            device,
            "Position Buffer",
            bytemuck::cast_slice(&data.positions),
            wgpu::BufferUsages::VERTEX,
        );
        let color_buffer = create_mapped_buffer(
            device,
            "Color Buffer",
            bytemuck::cast_slice(&data.colors),
            wgpu::BufferUsages::VERTEX,
        );
        let index_buffer = create_mapped_buffer(
            device,
            "Index Buffer",
            bytemuck::cast_slice(&data.indices),
            wgpu::BufferUsages::INDEX,
        );

        let pipeline = MeshPipeline::new(device, color_format);

        let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Camera Uniform Buffer"),
            size: std::mem::size_of::<CameraUniform>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let model_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Model Uniform Buffer"),
            size: std::mem::size_of::<ModelUniform>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Mesh Bind Group"),
            layout: &pipeline.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: model_buffer.as_entire_binding(),
                },
            ],
        });

        log::debug!(
            "mesh created: {} vertices, {} indices",
            data.vertex_count(),
            data.index_count()
        );

        Self {
            position_buffer,
            color_buffer,
            index_buffer,
            index_count: data.indices.len() as u32,
            pipeline,
            camera_buffer,
            model_buffer,
            bind_group,
            transform: Transform::IDENTITY,
        }
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    /// Uploads the current camera and model matrices, then records an indexed
    /// draw of every index. The queue writes land before the submission that
    /// carries this pass.
    pub fn render(&self, pass: &mut wgpu::RenderPass<'_>, queue: &wgpu::Queue, camera: &Camera) {
        let camera_uniform = CameraUniform::new(
            camera.projection_matrix(),
            camera.view_matrix(),
            camera.position(),
        );
        let model_uniform = ModelUniform::new(self.transform.to_matrix());
        queue.write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&camera_uniform));
        queue.write_buffer(&self.model_buffer, 0, bytemuck::bytes_of(&model_uniform));

        if self.index_count == 0 {
            return;
        }

        pass.set_pipeline(&self.pipeline.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.position_buffer.slice(..));
        pass.set_vertex_buffer(1, self.color_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_round_up_to_four_bytes() {
        let cases = [(1, 4), (3, 4), (4, 4), (5, 8), (11, 12), (12, 12)];
        for (len, expected) in cases {
            assert_eq!(aligned_size(len), expected, "byte length {len}");
            assert_eq!(aligned_size(len) % 4, 0);
        }
        assert_eq!(aligned_size(0), 0);
    }

    #[test]
    fn odd_index_count_needs_padding() {
        let indices: [u16; 3] = [0, 1, 2];
        let bytes: &[u8] = bytemuck::cast_slice(&indices);
        assert_eq!(bytes.len(), 6);
        assert_eq!(aligned_size(bytes.len() as u64), 8);
    }
}
