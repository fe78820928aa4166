// CPU-side vertex assembly for the 3D scene. Kept free of web types so the
// host tests can include it directly.

use folio_core::constants::STREAM_POINT_SIZE;
use folio_core::Scene;
use glam::Vec3;

/// Opacity of the data-stream particles.
pub const STREAM_OPACITY: f32 = 0.8;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    #[inline]
    pub fn new(position: Vec3, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            color,
        }
    }
}

/// Picks the render target format. Vertex colours are already sRGB, so an
/// `*Srgb` target would encode them twice; a plain one is preferred.
pub fn surface_format(formats: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .copied()
        .find(|f| !f.is_srgb())
        .or_else(|| formats.first().copied())
}

/// Line-list vertices for every object's edges, in world space.
pub fn wireframe_vertices(scene: &Scene, out: &mut Vec<Vertex>) {
    out.clear();
    for object in &scene.objects {
        let m = object.transform();
        for [a, b] in &object.mesh.edges {
            let (Some(va), Some(vb)) = (
                object.mesh.vertices.get(*a as usize),
                object.mesh.vertices.get(*b as usize),
            ) else {
                continue;
            };
            out.push(Vertex::new(m.transform_point3(*va), object.color));
            out.push(Vertex::new(m.transform_point3(*vb), object.color));
        }
    }
}

/// Camera-facing quads (two triangles each) for the stream particles.
pub fn stream_vertices(scene: &Scene, out: &mut Vec<Vertex>) {
    out.clear();
    let group = scene.stream_transform();
    let (right, up) = scene.camera.billboard_axes();
    let (r, u) = (right * STREAM_POINT_SIZE * 0.5, up * STREAM_POINT_SIZE * 0.5);
    for p in &scene.stream {
        let c = group.transform_point3(p.pos);
        let color = [p.color[0], p.color[1], p.color[2], STREAM_OPACITY];
        let corners = [c - r - u, c + r - u, c + r + u, c - r + u];
        for i in [0, 1, 2, 0, 2, 3] {
            out.push(Vertex::new(corners[i], color));
        }
    }
}
