// Host-side tests for 3D vertex assembly.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod vertices {
    include!("../src/render/vertices.rs");
}

use folio_core::effects::SceneParams;
use folio_core::{Scene, Viewport};
use vertices::*;

fn scene() -> Scene {
    Scene::new(Viewport::new(800.0, 600.0), SceneParams::default(), 17)
}

#[test]
fn vertex_layout_is_tightly_packed() {
    assert_eq!(std::mem::size_of::<Vertex>(), 28);
}

#[test]
fn wireframe_has_two_vertices_per_edge() {
    let scene = scene();
    let mut out = Vec::new();
    wireframe_vertices(&scene, &mut out);
    let edges: usize = scene.objects.iter().map(|o| o.mesh.edges.len()).sum();
    assert_eq!(out.len(), edges * 2);
    // cube 12 + 6 face diagonals, octahedron 12, tetrahedron 6
    assert_eq!(edges, 15 * 18 + 10 * 12 + 8 * 6);
}

#[test]
fn wireframe_carries_object_colour() {
    let scene = scene();
    let mut out = Vec::new();
    wireframe_vertices(&scene, &mut out);
    let first_edges = scene.objects[0].mesh.edges.len() * 2;
    assert!(out[..first_edges]
        .iter()
        .all(|v| v.color == scene.objects[0].color));
}

#[test]
fn stream_is_one_quad_per_particle() {
    let scene = scene();
    let mut out = vec![Vertex::new(glam::Vec3::ZERO, [0.0; 4]); 3];
    stream_vertices(&scene, &mut out);
    assert_eq!(out.len(), 800 * 6);
    assert!(out.iter().all(|v| v.color[3] == STREAM_OPACITY));
}

#[test]
fn stream_quads_face_the_camera() {
    let scene = scene();
    let mut out = Vec::new();
    stream_vertices(&scene, &mut out);
    // default camera looks down -z, so each quad is flat in z
    for quad in out.chunks(6) {
        let z = quad[0].position[2];
        assert!(quad.iter().all(|v| (v.position[2] - z).abs() < 1e-5));
    }
}

#[test]
fn surface_format_avoids_double_srgb_encoding() {
    use wgpu::TextureFormat::*;
    assert_eq!(surface_format(&[Bgra8UnormSrgb, Bgra8Unorm]), Some(Bgra8Unorm));
    assert_eq!(surface_format(&[Rgba8Unorm, Bgra8UnormSrgb]), Some(Rgba8Unorm));
    assert_eq!(surface_format(&[Rgba8UnormSrgb]), Some(Rgba8UnormSrgb));
    assert_eq!(surface_format(&[]), None);
}
