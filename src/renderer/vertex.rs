//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.133, 0.133, 0.133, 1.0]; // #222
    pub const LANE_LINE: [f32; 4] = [0.533, 0.533, 0.533, 1.0]; // #888
    pub const PLAYER_BODY: [f32; 4] = [0.298, 0.686, 0.314, 1.0]; // #4caf50
    pub const SKIN: [f32; 4] = [1.0, 0.878, 0.698, 1.0]; // #ffe0b2
    pub const FACE: [f32; 4] = [0.133, 0.133, 0.133, 1.0];
    pub const HAT: [f32; 4] = [0.133, 0.133, 0.133, 1.0];
    pub const BARREL: [f32; 4] = [0.627, 0.322, 0.176, 1.0]; // #a0522d
    pub const BARREL_BAND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
