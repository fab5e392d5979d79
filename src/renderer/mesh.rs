// src/renderer/mesh.rs
use crate::renderer::vertex::QuadVertex;
use wgpu::util::DeviceExt;

pub struct Mesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub num_indices: u32,
}

impl Mesh {
    // Uploads the unit quad that every circle instance is scaled from.
    pub fn new_quad(device: &wgpu::Device) -> Self {
        let (vertices, indices) = generate_unit_quad();

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Quad Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Quad Index Buffer"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            num_indices: indices.len() as u32,
        }
    }
}

/// Two triangles covering [-1, 1] x [-1, 1].
fn generate_unit_quad() -> ([QuadVertex; 4], [u16; 6]) {
    let vertices = [
        QuadVertex { corner: [-1.0, -1.0] },
        QuadVertex { corner: [1.0, -1.0] },
        QuadVertex { corner: [1.0, 1.0] },
        QuadVertex { corner: [-1.0, 1.0] },
    ];
    let indices = [0, 1, 2, 0, 2, 3];
    (vertices, indices)
}
