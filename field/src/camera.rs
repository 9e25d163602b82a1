//! Perspective camera and world → screen projection.
//!
//! The camera sits on the z axis at [`CAMERA_Z`] looking toward the origin
//! (down −z), with +y up. Matrices are `glam` `DMat4`; the projection is
//! cached and only rebuilt by [`PerspectiveCamera::update_projection_matrix`],
//! so a resize must call it after changing the aspect ratio.

use glam::{DMat4, DVec3};

use crate::consts::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_Z};
use crate::particles::Particle;

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

/// A projected point in CSS pixels, with its distance-attenuated edge length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct PerspectiveCamera {
    pub fov_deg: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
    pub position_z: f64,
    projection: DMat4,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new(CAMERA_FOV_DEG, 1.0, CAMERA_NEAR, CAMERA_FAR)
    }
}

impl PerspectiveCamera {
    #[must_use]
    pub fn new(fov_deg: f64, aspect: f64, near: f64, far: f64) -> Self {
        let mut camera = Self { fov_deg, aspect, near, far, position_z: CAMERA_Z, projection: DMat4::IDENTITY };
        camera.update_projection_matrix();
        camera
    }

    /// Set the aspect ratio from viewport dimensions.
    ///
    /// A zero or negative height is treated as one pixel. A zero width gives
    /// an aspect of 0, for which [`project`](Self::project) culls everything.
    pub fn set_aspect(&mut self, width: f64, height: f64) {
        self.aspect = width.max(0.0) / height.max(1.0);
    }

    /// Rebuild the cached projection matrix from fov, aspect and clip planes.
    pub fn update_projection_matrix(&mut self) {
        self.projection = DMat4::perspective_rh_gl(self.fov_deg.to_radians(), self.aspect, self.near, self.far);
    }

    #[must_use]
    pub fn projection_matrix(&self) -> &DMat4 {
        &self.projection
    }

    /// World → view: the camera sits on +z looking at the origin, +y up.
    #[must_use]
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(DVec3::new(0.0, 0.0, self.position_z), DVec3::ZERO, DVec3::Y)
    }

    /// Project a world point to normalized device coordinates.
    ///
    /// Returns `None` for points outside the near/far range, and for every
    /// point while the viewport has no width.
    #[must_use]
    pub fn project(&self, p: &Particle) -> Option<DVec3> {
        if self.aspect <= 0.0 {
            return None;
        }
        let depth = self.position_z - p.z;
        if depth < self.near || depth > self.far {
            return None;
        }
        let clip = self.projection * self.view_matrix();
        Some(clip.project_point3(DVec3::new(p.x, p.y, p.z)))
    }

    /// Project a world point to viewport pixels.
    ///
    /// `size` follows size attenuation: `world_size * (height / 2) / depth`.
    #[must_use]
    pub fn to_screen(&self, p: &Particle, viewport_w: f64, viewport_h: f64, world_size: f64) -> Option<ScreenPoint> {
        let ndc = self.project(p)?;
        let depth = self.position_z - p.z;
        Some(ScreenPoint {
            x: (ndc.x + 1.0) * 0.5 * viewport_w,
            y: (1.0 - ndc.y) * 0.5 * viewport_h,
            size: world_size * (viewport_h * 0.5) / depth,
        })
    }
}
