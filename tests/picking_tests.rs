// Host-side tests for ray casting and the hover highlight.

use folio_core::camera::pixel_to_ndc;
use folio_core::constants::{HOVER_SCALE, REST_SCALE};
use folio_core::effects::SceneParams;
use folio_core::picking::{pick_nearest, ray_sphere, ray_triangle, Pickable};
use folio_core::{Camera, HoverChange, HoverState, Ray, Scene, Viewport};
use glam::{Vec2, Vec3};

struct Ball {
    center: Vec3,
    radius: f32,
    scale: f32,
}

impl Ball {
    fn at(z: f32) -> Self {
        Self {
            center: Vec3::new(0.0, 0.0, z),
            radius: 0.5,
            scale: REST_SCALE,
        }
    }
}

impl Pickable for Ball {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        ray_sphere(ray, self.center, self.radius)
    }

    fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }
}

fn down_z() -> Ray {
    Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0))
}

#[test]
fn ray_sphere_hits_front_surface() {
    let t = ray_sphere(&down_z(), Vec3::ZERO, 2.0).unwrap();
    assert!((t - 8.0).abs() < 1e-4);
    assert!(ray_sphere(&down_z(), Vec3::new(5.0, 0.0, 0.0), 2.0).is_none());
}

#[test]
fn ray_triangle_hits_inside_and_misses_outside() {
    let (a, b, c) = (
        Vec3::new(-1.0, -1.0, 0.0),
        Vec3::new(1.0, -1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    );
    let t = ray_triangle(&down_z(), a, b, c).unwrap();
    assert!((t - 10.0).abs() < 1e-4);

    let off = Ray::new(Vec3::new(3.0, 3.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
    assert!(ray_triangle(&off, a, b, c).is_none());
}

#[test]
fn nearest_candidate_wins() {
    let balls = [Ball::at(0.0), Ball::at(4.0), Ball::at(2.0)];
    let (index, t) = pick_nearest(&down_z(), &balls).unwrap();
    assert_eq!(index, 1);
    assert!((t - 5.5).abs() < 1e-4);
}

#[test]
fn miss_returns_none() {
    let balls = [Ball::at(0.0)];
    let away = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, 1.0));
    assert!(pick_nearest(&away, &balls).is_none());
}

#[test]
fn switching_resets_previous_before_enlarging_next() {
    let mut balls = vec![Ball::at(0.0), Ball::at(1.0)];
    let mut hover = HoverState::default();

    let entered = hover.apply(Some(0), &mut balls);
    assert_eq!(entered, HoverChange::Entered(0));
    assert_eq!(entered.cursor(), Some("pointer"));
    assert_eq!(balls[0].scale, HOVER_SCALE);

    assert_eq!(hover.apply(Some(0), &mut balls), HoverChange::Unchanged);
    assert_eq!(HoverChange::Unchanged.cursor(), None);

    let switched = hover.apply(Some(1), &mut balls);
    assert_eq!(switched, HoverChange::Switched { from: 0, to: 1 });
    assert_eq!(balls[0].scale, REST_SCALE);
    assert_eq!(balls[1].scale, HOVER_SCALE);

    let left = hover.apply(None, &mut balls);
    assert_eq!(left, HoverChange::Left(1));
    assert_eq!(left.cursor(), Some("default"));
    assert!(balls.iter().all(|b| b.scale == REST_SCALE));
    assert_eq!(hover.hovered(), None);
}

#[test]
fn out_of_range_hit_is_treated_as_miss() {
    let mut balls = vec![Ball::at(0.0)];
    let mut hover = HoverState::default();
    assert_eq!(hover.apply(Some(7), &mut balls), HoverChange::Unchanged);
    assert_eq!(hover.hovered(), None);
}

#[test]
fn centre_ray_points_at_target() {
    let camera = Camera::default();
    let ray = camera.ray_from_ndc(Vec2::ZERO);
    assert!(ray.dir.normalize().dot(Vec3::new(0.0, 0.0, -1.0)) > 0.9999);
}

#[test]
fn pixels_map_to_ndc_with_y_up() {
    let vp = Viewport::new(800.0, 600.0);
    assert_eq!(pixel_to_ndc(Vec2::new(400.0, 300.0), vp), Vec2::ZERO);
    assert_eq!(pixel_to_ndc(Vec2::new(0.0, 0.0), vp), Vec2::new(-1.0, 1.0));
    assert_eq!(pixel_to_ndc(Vec2::new(800.0, 600.0), vp), Vec2::new(1.0, -1.0));
    assert_eq!(pixel_to_ndc(Vec2::new(5.0, 5.0), Viewport::default()), Vec2::ZERO);
}

#[test]
fn scene_pick_highlights_object_under_pointer() {
    let mut scene = Scene::new(Viewport::new(800.0, 600.0), SceneParams::default(), 3);
    for o in scene.objects.iter_mut() {
        o.position = Vec3::new(100.0, 100.0, 0.0);
    }
    // Off the face diagonals so the centre ray crosses a triangle interior.
    scene.objects[0].position = Vec3::new(0.02, 0.01, 0.0);
    scene.enable_picking();

    let change = scene.pick(Vec2::ZERO);
    assert_eq!(change, HoverChange::Entered(0));
    assert_eq!(scene.hovered(), Some(0));
    assert_eq!(scene.objects[0].scale, HOVER_SCALE);

    let change = scene.pick(Vec2::new(0.9, 0.9));
    assert_eq!(change, HoverChange::Left(0));
    assert_eq!(scene.objects[0].scale, REST_SCALE);
}

#[test]
fn scene_ignores_pointer_until_picking_is_enabled() {
    let mut scene = Scene::new(Viewport::new(800.0, 600.0), SceneParams::default(), 3);
    let positions: Vec<Vec3> = scene.objects.iter().map(|o| o.position).collect();
    let view_proj = scene.camera.view_projection();
    for p in &positions {
        let ndc = view_proj.project_point3(*p).truncate();
        assert_eq!(scene.pick(ndc), HoverChange::Unchanged);
    }
    assert_eq!(scene.hovered(), None);
    assert!(scene.objects.iter().all(|o| o.scale == REST_SCALE));

    for o in scene.objects.iter_mut() {
        o.position = Vec3::new(100.0, 100.0, 0.0);
    }
    scene.objects[0].position = Vec3::new(0.02, 0.01, 0.0);
    scene.enable_picking();
    assert_eq!(scene.pick(Vec2::ZERO), HoverChange::Entered(0));
}
