use artifact_core::{MaterialParams, MeshData};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Vertex {
    pub(crate) position: [f32; 3],
    pub(crate) normal: [f32; 3],
}

impl Vertex {
    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        const ATTRS: [wgpu::VertexAttribute; 2] =
            wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRS,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct MaterialUniforms {
    base_color: [f32; 4],
    params: [f32; 4],
}

impl MaterialUniforms {
    pub(crate) fn new(base_color: [f32; 4], m: &MaterialParams) -> Self {
        Self {
            base_color,
            params: [m.metalness, m.roughness, m.env_intensity, 0.0],
        }
    }
}

/// GPU buffers for one artifact mesh.
pub(crate) struct GpuMesh {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
    pub(crate) material_bind_group: wgpu::BindGroup,
}

pub(crate) fn upload_mesh(
    device: &wgpu::Device,
    material_layout: &wgpu::BindGroupLayout,
    mesh: &MeshData,
) -> GpuMesh {
    let vertices: Vec<Vertex> = mesh
        .positions
        .iter()
        .zip(mesh.normals.iter())
        .map(|(p, n)| Vertex {
            position: *p,
            normal: *n,
        })
        .collect();
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("artifact_vb"),
        contents: bytemuck::cast_slice(&vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("artifact_ib"),
        contents: bytemuck::cast_slice(&mesh.indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    let material = MaterialUniforms::new(mesh.base_color, &mesh.material);
    let material_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("material_ubo"),
        contents: bytemuck::bytes_of(&material),
        usage: wgpu::BufferUsages::UNIFORM,
    });
    let material_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("material_bg"),
        layout: material_layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: material_buffer.as_entire_binding(),
        }],
    });
    GpuMesh {
        vertex_buffer,
        index_buffer,
        index_count: mesh.indices.len() as u32,
        material_bind_group,
    }
}
