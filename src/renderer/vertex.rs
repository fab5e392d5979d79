use std::mem;

/// Corner of the unit quad every circle is stamped from.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    pub corner: [f32; 2],
}

impl QuadVertex {
    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // Corner: @location(0) in shader
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// One disc (`thickness == 0`) or ring drawn in scene units.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CircleInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub thickness: f32,
    pub color: [f32; 4],
}

impl CircleInstance {
    pub fn disc(center: glam::Vec2, radius: f32, color: [f32; 4]) -> Self {
        Self {
            center: center.to_array(),
            radius,
            thickness: 0.0,
            color,
        }
    }

    pub fn ring(center: glam::Vec2, radius: f32, thickness: f32, color: [f32; 4]) -> Self {
        Self {
            center: center.to_array(),
            radius,
            thickness,
            color,
        }
    }

    pub fn is_ring(&self) -> bool {
        self.thickness > 0.0
    }

    const ATTRIBUTES: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        1 => Float32x2, // center
        2 => Float32,   // radius
        3 => Float32,   // thickness
        4 => Float32x4 // color
    ];

    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<CircleInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_layout_is_tightly_packed() {
        assert_eq!(mem::size_of::<CircleInstance>(), 32);
        assert_eq!(mem::size_of::<QuadVertex>(), 8);
        let layout = CircleInstance::desc();
        assert_eq!(layout.array_stride, 32);
        assert_eq!(layout.attributes.last().map(|a| a.offset), Some(16));
    }
}
