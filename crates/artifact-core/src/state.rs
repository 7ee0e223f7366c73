//! Visual-side state types shared with the web frontend.
//!
//! These types avoid platform-specific APIs. The web frontend consumes them to
//! build camera matrices and light uniforms.

use crate::config::ZoomLimits;
use crate::constants::*;
use glam::{Mat4, Vec3};

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

impl Camera {
    /// Camera on the +Z axis at `distance`, looking at the origin.
    pub fn looking_at_origin(distance: f32, aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
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

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Distance along the view axis.
    #[inline]
    pub fn distance(&self) -> f32 {
        self.eye.z
    }

    /// Step the distance by one wheel tick in the direction of `delta`'s sign.
    /// A zero delta leaves the camera where it is.
    pub fn zoom(&mut self, delta: f32, limits: &ZoomLimits) {
        let dir = if delta > 0.0 {
            1.0
        } else if delta < 0.0 {
            -1.0
        } else {
            return;
        };
        self.eye.z = (self.eye.z + dir * limits.step).clamp(limits.min, limits.max);
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: [f32; 3],
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub color: [f32; 3],
    pub intensity: f32,
    /// Distance at which the light's contribution reaches zero.
    pub range: f32,
    pub position: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lights {
    pub ambient: AmbientLight,
    pub point: PointLight,
}

impl Default for Lights {
    fn default() -> Self {
        Self {
            ambient: AmbientLight {
                color: rgb_hex(AMBIENT_COLOR),
                intensity: AMBIENT_INTENSITY,
            },
            point: PointLight {
                color: rgb_hex(POINT_LIGHT_COLOR),
                intensity: POINT_LIGHT_INTENSITY,
                range: POINT_LIGHT_RANGE,
                position: Vec3::from_array(POINT_LIGHT_POSITION),
            },
        }
    }
}

/// Pitch (about X) and yaw (about Y) in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orientation {
    pub pitch: f32,
    pub yaw: f32,
}

impl Orientation {
    /// Target orientation for a pointer at normalized device coords `nx`, `ny`.
    #[inline]
    pub fn from_pointer(nx: f32, ny: f32) -> Self {
        Self {
            pitch: ny * POINTER_ANGLE_RANGE,
            yaw: nx * POINTER_ANGLE_RANGE,
        }
    }

    /// Move `factor` of the remaining distance toward `target` on each axis.
    #[inline]
    pub fn approach(&mut self, target: Orientation, factor: f32) {
        self.yaw += (target.yaw - self.yaw) * factor;
        self.pitch += (target.pitch - self.pitch) * factor;
    }

    pub fn rotation_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.pitch) * Mat4::from_rotation_y(self.yaw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_ignores_magnitude_and_zero() {
        let limits = ZoomLimits::default();
        let mut cam = Camera::looking_at_origin(15.0, 1.0);
        cam.zoom(0.01, &limits);
        assert_eq!(cam.distance(), 17.0);
        cam.zoom(-500.0, &limits);
        assert_eq!(cam.distance(), 15.0);
        cam.zoom(0.0, &limits);
        assert_eq!(cam.distance(), 15.0);
    }

    #[test]
    fn viewport_updates_aspect_only() {
        let mut cam = Camera::looking_at_origin(15.0, 1.0);
        cam.set_viewport(1600, 800);
        assert_eq!(cam.aspect, 2.0);
        cam.set_viewport(0, 800);
        assert_eq!(cam.aspect, 2.0);
        assert_eq!(cam.distance(), 15.0);
    }

    #[test]
    fn lights_unpack_hex_colors() {
        let l = Lights::default();
        assert!((l.ambient.color[0] - 64.0 / 255.0).abs() < 1e-6);
        assert_eq!(l.point.color[0], 1.0);
        assert!((l.point.color[2] - 179.0 / 255.0).abs() < 1e-6);
        assert_eq!(l.point.position, Vec3::new(5.0, 10.0, 15.0));
    }
}
