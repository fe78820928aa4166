use crate::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_Z};
use crate::picking::Ray;
use crate::Viewport;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

impl Camera {
    /// Default scene camera with its aspect taken from `viewport`.
    pub fn for_viewport(viewport: Viewport) -> Self {
        Self {
            aspect: viewport.aspect(),
            ..Self::default()
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray through a point in normalized device coordinates.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_projection().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        Ray::new(self.eye, p1 - self.eye)
    }

    /// Right and up vectors of the view, used to build camera-facing quads.
    pub fn billboard_axes(&self) -> (Vec3, Vec3) {
        let forward = (self.target - self.eye).normalize_or_zero();
        let right = forward.cross(self.up).normalize_or_zero();
        let up = right.cross(forward);
        (right, up)
    }
}

/// Pointer pixel coordinates to normalized device coordinates (\[-1, 1\], y up).
///
/// A degenerate viewport maps every point to the centre.
#[inline]
pub fn pixel_to_ndc(px: Vec2, viewport: Viewport) -> Vec2 {
    if viewport.is_empty() {
        return Vec2::ZERO;
    }
    Vec2::new(
        (2.0 * px.x / viewport.width) - 1.0,
        1.0 - (2.0 * px.y / viewport.height),
    )
}
