//! Unit wireframe solids used by the 3D scene.
//!
//! Vertices are centred on the origin; triangles are used for picking and
//! edges for the wireframe renderer.

use glam::Vec3;

#[derive(Clone, Debug)]
pub struct MeshGeometry {
    pub vertices: Vec<Vec3>,
    pub triangles: Vec<[u16; 3]>,
    pub edges: Vec<[u16; 2]>,
    /// Distance of the farthest vertex from the origin.
    pub bounding_radius: f32,
}

impl MeshGeometry {
    fn from_triangles(vertices: Vec<Vec3>, triangles: Vec<[u16; 3]>) -> Self {
        let mut edges: Vec<[u16; 2]> = Vec::new();
        for tri in &triangles {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                let e = if a < b { [a, b] } else { [b, a] };
                if !edges.contains(&e) {
                    edges.push(e);
                }
            }
        }
        let bounding_radius = vertices.iter().map(|v| v.length()).fold(0.0, f32::max);
        Self {
            vertices,
            triangles,
            edges,
            bounding_radius,
        }
    }

    /// Axis-aligned cube with the given edge length.
    pub fn cube(size: f32) -> Self {
        let h = size * 0.5;
        let vertices = vec![
            Vec3::new(-h, -h, -h),
            Vec3::new(h, -h, -h),
            Vec3::new(h, h, -h),
            Vec3::new(-h, h, -h),
            Vec3::new(-h, -h, h),
            Vec3::new(h, -h, h),
            Vec3::new(h, h, h),
            Vec3::new(-h, h, h),
        ];
        let triangles = vec![
            [0, 2, 1],
            [0, 3, 2],
            [4, 5, 6],
            [4, 6, 7],
            [0, 1, 5],
            [0, 5, 4],
            [3, 7, 6],
            [3, 6, 2],
            [0, 4, 7],
            [0, 7, 3],
            [1, 2, 6],
            [1, 6, 5],
        ];
        // Box wireframes include the face diagonals.
        Self::from_triangles(vertices, triangles)
    }

    pub fn octahedron(radius: f32) -> Self {
        let r = radius;
        let vertices = vec![
            Vec3::new(r, 0.0, 0.0),
            Vec3::new(-r, 0.0, 0.0),
            Vec3::new(0.0, r, 0.0),
            Vec3::new(0.0, -r, 0.0),
            Vec3::new(0.0, 0.0, r),
            Vec3::new(0.0, 0.0, -r),
        ];
        let triangles = vec![
            [0, 2, 4],
            [0, 4, 3],
            [0, 3, 5],
            [0, 5, 2],
            [1, 2, 5],
            [1, 5, 3],
            [1, 3, 4],
            [1, 4, 2],
        ];
        Self::from_triangles(vertices, triangles)
    }

    pub fn tetrahedron(radius: f32) -> Self {
        let s = radius / 3f32.sqrt();
        let vertices = vec![
            Vec3::new(s, s, s),
            Vec3::new(-s, -s, s),
            Vec3::new(-s, s, -s),
            Vec3::new(s, -s, -s),
        ];
        let triangles = vec![[2, 1, 0], [0, 3, 2], [1, 3, 0], [2, 3, 1]];
        Self::from_triangles(vertices, triangles)
    }
}
