//! The 3D layer of the classic theme: a rotating cloud of data-stream
//! particles and floating wireframe solids that lean toward the pointer and
//! grow when hovered.

use super::{rand_centered, rand_span, FrameInput, Simulation};
use crate::camera::Camera;
use crate::constants::*;
use crate::mesh::MeshGeometry;
use crate::picking::{
    pick_nearest, ray_sphere, ray_triangle, HoverChange, HoverState, Pickable, Ray,
};
use crate::pointer::falloff;
use crate::policy::wrap;
use crate::Viewport;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};
use rand::prelude::*;

/// The three families of floating solids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    DataCube,
    NetworkNode,
    AlgorithmTree,
}

/// Generation ranges for one [`ShapeKind`]; `(min, span)` pairs sample
/// uniformly in `[min, min + span)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeSpec {
    pub count: usize,
    /// Edge length for cubes, circumradius otherwise.
    pub size: (f32, f32),
    /// Side of the cube the home positions are drawn from.
    pub spread: f32,
    pub rotation_speed: (f32, f32),
    pub float_speed: (f32, f32),
    pub float_amplitude: (f32, f32),
    pub influence: (f32, f32),
    /// HSL, each in \[0, 1\]; the hue is a range.
    pub hue: (f32, f32),
    pub saturation: f32,
    pub lightness: f32,
    pub opacity: f32,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [
        ShapeKind::DataCube,
        ShapeKind::NetworkNode,
        ShapeKind::AlgorithmTree,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::DataCube => "data",
            ShapeKind::NetworkNode => "network",
            ShapeKind::AlgorithmTree => "algorithm",
        }
    }

    pub fn spec(self) -> ShapeSpec {
        match self {
            ShapeKind::DataCube => ShapeSpec {
                count: 15,
                size: (0.1, 0.3),
                spread: 15.0,
                rotation_speed: (0.005, 0.02),
                float_speed: (0.3, 0.5),
                float_amplitude: (0.2, 0.5),
                influence: (1.0, 2.0),
                hue: (0.3, 0.2),
                saturation: 0.8,
                lightness: 0.6,
                opacity: 0.7,
            },
            ShapeKind::NetworkNode => ShapeSpec {
                count: 10,
                size: (0.2, 0.0),
                spread: 12.0,
                rotation_speed: (0.01, 0.03),
                float_speed: (0.2, 0.4),
                float_amplitude: (0.1, 0.3),
                influence: (2.0, 3.0),
                hue: (0.6, 0.0),
                saturation: 0.9,
                lightness: 0.7,
                opacity: 0.8,
            },
            ShapeKind::AlgorithmTree => ShapeSpec {
                count: 8,
                size: (0.15, 0.0),
                spread: 10.0,
                rotation_speed: (0.01, 0.025),
                float_speed: (0.4, 0.6),
                float_amplitude: (0.2, 0.4),
                influence: (1.5, 2.5),
                hue: (0.8, 0.0),
                saturation: 0.8,
                lightness: 0.6,
                opacity: 0.6,
            },
        }
    }

    fn geometry(self, size: f32) -> MeshGeometry {
        match self {
            ShapeKind::DataCube => MeshGeometry::cube(size),
            ShapeKind::NetworkNode => MeshGeometry::octahedron(size),
            ShapeKind::AlgorithmTree => MeshGeometry::tetrahedron(size),
        }
    }
}

/// HSL in \[0, 1\] to sRGB in \[0, 1\].
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    if s <= 0.0 {
        return [l, l, l];
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let channel = |t: f32| {
        let t = t.rem_euclid(1.0);
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    };
    [channel(h + 1.0 / 3.0), channel(h), channel(h - 1.0 / 3.0)]
}

#[derive(Clone, Debug)]
pub struct SceneObject {
    pub kind: ShapeKind,
    pub mesh: MeshGeometry,
    /// Where the object floats around.
    pub home: Vec3,
    pub position: Vec3,
    /// Euler angles, XYZ order.
    pub rotation: Vec3,
    pub scale: f32,
    pub rotation_speed: f32,
    pub float_speed: f32,
    pub float_amplitude: f32,
    pub influence: f32,
    pub color: [f32; 4],
}

impl SceneObject {
    fn generate<R: Rng>(kind: ShapeKind, rng: &mut R) -> Self {
        let spec = kind.spec();
        let size = rand_span(rng, spec.size.0, spec.size.1);
        let home = Vec3::new(
            rand_centered(rng, spec.spread),
            rand_centered(rng, spec.spread),
            rand_centered(rng, spec.spread),
        );
        let hue = rand_span(rng, spec.hue.0, spec.hue.1);
        let [r, g, b] = hsl_to_rgb(hue, spec.saturation, spec.lightness);
        Self {
            kind,
            mesh: kind.geometry(size),
            home,
            position: home,
            rotation: Vec3::ZERO,
            scale: REST_SCALE,
            rotation_speed: rand_span(rng, spec.rotation_speed.0, spec.rotation_speed.1),
            float_speed: rand_span(rng, spec.float_speed.0, spec.float_speed.1),
            float_amplitude: rand_span(rng, spec.float_amplitude.0, spec.float_amplitude.1),
            influence: rand_span(rng, spec.influence.0, spec.influence.1),
            color: [r, g, b, spec.opacity],
        }
    }

    pub fn transform(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z),
            self.position,
        )
    }

    /// Point on the float path for object number `index` at time `t`.
    pub fn float_target(&self, index: usize, t: f32) -> Vec2 {
        let phase = index as f32;
        Vec2::new(
            self.home.x + (t * self.float_speed * 0.7 + phase).cos() * self.float_amplitude * 0.5,
            self.home.y + (t * self.float_speed + phase).sin() * self.float_amplitude,
        )
    }

    /// Spin, float and pointer attraction for one frame. `pointer` is in
    /// world units on the z = 0 plane.
    pub fn step(&mut self, index: usize, t: f32, pointer: Vec3, params: &SceneParams) {
        self.rotation.x += self.rotation_speed;
        self.rotation.y += self.rotation_speed;
        self.rotation.z += self.rotation_speed * 0.5;

        let target = self.float_target(index, t);
        let delta = pointer - self.position;
        let weight = falloff(delta.length(), params.pointer_radius, SCENE_POINTER_EXPONENT);
        if weight > 0.0 {
            let dir = delta.normalize_or_zero();
            let pull = weight * self.influence * params.pointer_strength;
            self.position.x = target.x + dir.x * pull;
            self.position.y = target.y + dir.y * pull;
        } else {
            self.position.x += (target.x - self.position.x) * params.relax_rate;
            self.position.y += (target.y - self.position.y) * params.relax_rate;
        }
    }
}

impl Pickable for SceneObject {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        ray_sphere(ray, self.position, self.mesh.bounding_radius * self.scale)?;
        let m = self.transform();
        let vertex = |i: u16| m.transform_point3(self.mesh.vertices[i as usize]);
        self.mesh
            .triangles
            .iter()
            .filter_map(|&[a, b, c]| ray_triangle(ray, vertex(a), vertex(b), vertex(c)))
            .min_by(f32::total_cmp)
    }

    fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }
}

#[derive(Clone, Copy, Debug)]
pub struct StreamParticle {
    /// Position inside the rotating stream group.
    pub pos: Vec3,
    pub color: [f32; 3],
}

#[derive(Clone, Debug)]
pub struct SceneParams {
    pub particle_count: usize,
    pub pointer_radius: f32,
    pub pointer_strength: f32,
    pub pointer_world_scale: f32,
    pub relax_rate: f32,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            particle_count: STREAM_PARTICLE_COUNT,
            pointer_radius: SCENE_POINTER_RADIUS,
            pointer_strength: SCENE_POINTER_STRENGTH,
            pointer_world_scale: SCENE_POINTER_WORLD_SCALE,
            relax_rate: SCENE_RELAX_RATE,
        }
    }
}

pub struct Scene {
    pub params: SceneParams,
    pub camera: Camera,
    pub objects: Vec<SceneObject>,
    pub stream: Vec<StreamParticle>,
    /// Accumulated group rotation of the stream (x, y radians).
    pub stream_rotation: Vec2,
    pub elapsed_sec: f32,
    hover: HoverState,
    // Off until the layer is actually drawn.
    picking: bool,
    viewport: Viewport,
}

impl Scene {
    pub fn new(viewport: Viewport, params: SceneParams, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let stream = (0..params.particle_count)
            .map(|_| {
                let extent = STREAM_HALF_EXTENT * 2.0;
                let pos = Vec3::new(
                    rand_centered(&mut rng, extent),
                    rand_centered(&mut rng, extent),
                    rand_centered(&mut rng, extent),
                );
                let color = if rng.gen::<f32>() < STREAM_GREEN_SHARE {
                    [0.1, rand_span(&mut rng, 0.8, 0.2), 0.2]
                } else {
                    [0.1, 0.4, rand_span(&mut rng, 0.8, 0.2)]
                };
                StreamParticle { pos, color }
            })
            .collect();
        let objects = ShapeKind::ALL
            .iter()
            .flat_map(|&kind| std::iter::repeat(kind).take(kind.spec().count))
            .map(|kind| SceneObject::generate(kind, &mut rng))
            .collect();
        Self {
            params,
            camera: Camera::for_viewport(viewport),
            objects,
            stream,
            stream_rotation: Vec2::ZERO,
            elapsed_sec: 0.0,
            hover: HoverState::default(),
            picking: false,
            viewport,
        }
    }

    /// Model matrix of the stream group.
    pub fn stream_transform(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.stream_rotation.x, self.stream_rotation.y, 0.0)
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hover.hovered()
    }

    /// Lets [`Scene::pick`] hover objects. Call once the scene is on screen.
    pub fn enable_picking(&mut self) {
        self.picking = true;
    }

    /// Casts a ray through `ndc` and moves the hover highlight to the
    /// nearest object hit. Always `Unchanged` before
    /// [`Scene::enable_picking`].
    pub fn pick(&mut self, ndc: Vec2) -> HoverChange {
        if !self.picking {
            return HoverChange::Unchanged;
        }
        let ray = self.camera.ray_from_ndc(ndc);
        let hit = pick_nearest(&ray, &self.objects).map(|(i, _)| i);
        let change = self.hover.apply(hit, &mut self.objects);
        if change != HoverChange::Unchanged {
            log::debug!("[scene] hover {:?}", change);
        }
        change
    }

    fn step_stream(&mut self, t: f32) {
        self.stream_rotation.y += STREAM_SPIN_Y;
        self.stream_rotation.x += STREAM_SPIN_X;
        let h = STREAM_HALF_EXTENT;
        for p in &mut self.stream {
            p.pos.y += (t * 0.001 + p.pos.x).sin() * STREAM_DRIFT_Y;
            p.pos.x += (t * 0.0005 + p.pos.z).cos() * STREAM_DRIFT_X;
            p.pos.x = wrap(p.pos.x + h, 2.0 * h, 0.0) - h;
            p.pos.y = wrap(p.pos.y + h, 2.0 * h, 0.0) - h;
        }
    }
}

impl Simulation for Scene {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.aspect = viewport.aspect();
    }

    fn step(&mut self, input: &FrameInput) {
        let t = input.elapsed_sec;
        self.elapsed_sec = t;
        self.step_stream(t);
        let ndc = input.pointer.smoothed * self.params.pointer_world_scale;
        let pointer = Vec3::new(ndc.x, ndc.y, 0.0);
        for (i, o) in self.objects.iter_mut().enumerate() {
            o.step(i, t, pointer, &self.params);
        }
    }

    fn pointer_smoothing(&self) -> f32 {
        SCENE_POINTER_SMOOTHING
    }
}
