// src/renderer/mesh.rs
use crate::constants::{ELECTRON_MARKER_RADIUS, NUCLEUS_RADIUS, SHELL_GUIDE_RADII};
use crate::renderer::vertex::Vertex;
use glam::{DVec2, Vec2, Vec4};
use std::f32::consts::TAU;
use wgpu::util::DeviceExt;

pub const NUCLEUS_COLOR: Vec4 = Vec4::new(1.0, 0.0, 0.0, 0.8);
pub const SHELL_COLOR: Vec4 = Vec4::new(0.5, 0.5, 0.5, 0.6);
pub const ELECTRON_COLOR: Vec4 = Vec4::new(0.0, 0.0, 1.0, 1.0);

const DISC_SEGMENTS: u32 = 48;
const MARKER_SEGMENTS: u32 = 16;
const SHELL_DASHES: u32 = 36;
const SHELL_LINE_WIDTH: f32 = 0.03;

/// Static triangle-list geometry uploaded once.
pub struct Mesh {
    pub vertex_buffer: wgpu::Buffer,
    pub num_vertices: u32,
}

impl Mesh {
    pub fn new(device: &wgpu::Device, label: &str, vertices: &[Vertex]) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            vertex_buffer,
            num_vertices: vertices.len() as u32,
        }
    }
}

/// Vertex buffer rewritten every frame, grown in powers of two.
pub struct DynamicMesh {
    label: &'static str,
    pub vertex_buffer: wgpu::Buffer,
    capacity: usize,
    pub num_vertices: u32,
}

impl DynamicMesh {
    pub fn new(device: &wgpu::Device, label: &'static str) -> Self {
        Self {
            label,
            vertex_buffer: create_vertex_buffer(device, label, 1),
            capacity: 1,
            num_vertices: 0,
        }
    }

    pub fn write(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, vertices: &[Vertex]) {
        if vertices.is_empty() {
            self.num_vertices = 0;
            return;
        }

        if vertices.len() > self.capacity {
            self.capacity = next_capacity(vertices.len());
            self.vertex_buffer = create_vertex_buffer(device, self.label, self.capacity);
        }

        queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(vertices));
        self.num_vertices = vertices.len() as u32;
    }
}

fn create_vertex_buffer(device: &wgpu::Device, label: &str, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: (capacity * std::mem::size_of::<Vertex>()) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn next_capacity(current: usize) -> usize {
    current.max(1).next_power_of_two()
}

/// Nucleus disc followed by the dashed shell guides.
pub fn backdrop() -> Vec<Vertex> {
    let mut vertices = disc(Vec2::ZERO, NUCLEUS_RADIUS, DISC_SEGMENTS, NUCLEUS_COLOR);
    for radius in SHELL_GUIDE_RADII {
        vertices.extend(dashed_ring(radius, SHELL_LINE_WIDTH, SHELL_DASHES, SHELL_COLOR));
    }
    vertices
}

pub fn electron_markers(positions: &[DVec2]) -> Vec<Vertex> {
    positions
        .iter()
        .flat_map(|p| {
            disc(
                p.as_vec2(),
                ELECTRON_MARKER_RADIUS,
                MARKER_SEGMENTS,
                ELECTRON_COLOR,
            )
        })
        .collect()
}

/// Filled circle as a triangle list: three vertices per segment.
pub fn disc(center: Vec2, radius: f32, segments: u32, color: Vec4) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(segments as usize * 3);
    for i in 0..segments {
        let a0 = i as f32 * TAU / segments as f32;
        let a1 = (i + 1) as f32 * TAU / segments as f32;
        vertices.push(Vertex::new(center, color));
        vertices.push(Vertex::new(center + Vec2::from_angle(a0) * radius, color));
        vertices.push(Vertex::new(center + Vec2::from_angle(a1) * radius, color));
    }
    vertices
}

/// Ring around the origin split into `dashes` arcs with equal gaps.
pub fn dashed_ring(radius: f32, width: f32, dashes: u32, color: Vec4) -> Vec<Vertex> {
    const STEPS_PER_DASH: u32 = 4;

    let inner = radius - width / 2.0;
    let outer = radius + width / 2.0;
    let period = TAU / dashes as f32;
    let dash = period / 2.0;

    let mut vertices = Vec::with_capacity((dashes * STEPS_PER_DASH * 6) as usize);
    for d in 0..dashes {
        let start = d as f32 * period;
        for s in 0..STEPS_PER_DASH {
            let a0 = start + dash * s as f32 / STEPS_PER_DASH as f32;
            let a1 = start + dash * (s + 1) as f32 / STEPS_PER_DASH as f32;
            let (u0, u1) = (Vec2::from_angle(a0), Vec2::from_angle(a1));
            let quad = [u0 * inner, u0 * outer, u1 * outer, u0 * inner, u1 * outer, u1 * inner];
            vertices.extend(quad.into_iter().map(|p| Vertex::new(p, color)));
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn radius_of(v: &Vertex) -> f32 {
        Vec2::from_array(v.position).length()
    }

    #[test]
    fn disc_stays_within_radius() {
        let vertices = disc(Vec2::new(1.0, -2.0), 0.5, 12, ELECTRON_COLOR);
        assert_eq!(vertices.len(), 36);
        for v in &vertices {
            let d = (Vec2::from_array(v.position) - Vec2::new(1.0, -2.0)).length();
            assert!(d <= 0.5 + 1e-5);
        }
    }

    #[test]
    fn dashed_ring_hugs_its_radius() {
        let vertices = dashed_ring(3.0, 0.1, 10, SHELL_COLOR);
        assert_eq!(vertices.len(), 10 * 4 * 6);
        for v in &vertices {
            let r = radius_of(v);
            assert!((2.95 - 1e-4..=3.05 + 1e-4).contains(&r), "radius {r}");
        }
    }

    #[test]
    fn dashes_leave_gaps() {
        // Angle just past the first dash must not be covered.
        let vertices = dashed_ring(1.5, 0.03, 4, SHELL_COLOR);
        let gap_mid = TAU / 4.0 * 0.75;
        let covered = vertices.iter().any(|v| {
            let angle = v.position[1].atan2(v.position[0]).rem_euclid(TAU);
            (angle - gap_mid).abs() < 0.05
        });
        assert!(!covered);
    }

    #[test]
    fn backdrop_contains_nucleus_and_both_guides() {
        let vertices = backdrop();
        let max_r = vertices.iter().map(radius_of).fold(0.0, f32::max);
        assert_relative_eq!(max_r, 3.0 + SHELL_LINE_WIDTH / 2.0, epsilon = 1e-4);
        assert!(vertices.iter().any(|v| v.color == NUCLEUS_COLOR.to_array()));
    }

    #[test]
    fn one_marker_per_position() {
        let positions = [DVec2::new(1.5, 0.0), DVec2::new(-3.0, 0.0)];
        let vertices = electron_markers(&positions);
        assert_eq!(vertices.len(), 2 * MARKER_SEGMENTS as usize * 3);
        assert_eq!(vertices[0].position, [1.5, 0.0]);
    }

    #[test]
    fn capacity_grows_in_powers_of_two() {
        assert_eq!(next_capacity(1), 1);
        assert_eq!(next_capacity(384), 512);
        assert_eq!(next_capacity(512), 512);
    }

    #[test]
    fn no_positions_no_markers() {
        assert!(electron_markers(&[]).is_empty());
    }
}
