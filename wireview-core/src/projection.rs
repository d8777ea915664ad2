/// Camera, viewport and perspective divide utilities
use nalgebra::{Matrix4, Point3, Vector3, Vector4};

/// Below this magnitude a homogeneous w is treated as zero
pub const W_EPSILON: f32 = 1e-6;

/// Projection mode for rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectionMode {
    Orthographic,
    Perspective,
}

/// Camera configuration for 3D rendering
///
/// View and projection are derived from the public fields on demand; the
/// viewport matrix is stored and replaced by `set_viewport`.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub mode: ProjectionMode,
    viewport: Matrix4<f32>,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            position: Point3::new(0.0, 0.0, 5.0),
            target: Point3::new(0.0, 0.0, 0.0),
            up: Vector3::new(0.0, 1.0, 0.0),
            fov: std::f32::consts::PI / 4.0, // 45 degrees
            aspect: width as f32 / height.max(1) as f32,
            near: 0.1,
            far: 100.0,
            mode: ProjectionMode::Perspective,
            viewport: viewport_matrix(width, height),
        }
    }

    /// Camera looking down -Z at the target with an orthographic projection
    pub fn orthographic(width: u32, height: u32, position: Point3<f32>, target: Point3<f32>) -> Self {
        Self {
            position,
            target,
            mode: ProjectionMode::Orthographic,
            ..Self::new(width, height)
        }
    }

    pub fn set_clip_planes(&mut self, near: f32, far: f32) {
        if near <= 0.0 {
            log::warn!("Near is not positive: `{}`", near);
        }
        if far <= 0.0 {
            log::warn!("Far is not positive: `{}`", far);
        }
        if far < near {
            log::warn!("Far is closer than near: `{}` `{}`", far, near);
        }
        self.near = near;
        self.far = far;
    }

    /// Replace the viewport matrix for a new pixel resolution
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::warn!("Degenerate viewport: {}x{}", width, height);
        }
        self.aspect = width as f32 / height.max(1) as f32;
        self.viewport = viewport_matrix(width, height);
    }

    /// Create the view matrix (camera transformation)
    pub fn view_transformation(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    /// Create the projection matrix
    pub fn projection_transformation(&self) -> Matrix4<f32> {
        match self.mode {
            ProjectionMode::Perspective => {
                Matrix4::new_perspective(self.aspect, self.fov, self.near, self.far)
            }
            ProjectionMode::Orthographic => {
                let height = (self.position - self.target).norm();
                let width = height * self.aspect;
                Matrix4::new_orthographic(
                    -width / 2.0,
                    width / 2.0,
                    -height / 2.0,
                    height / 2.0,
                    self.near,
                    self.far,
                )
            }
        }
    }

    pub fn viewport_transformation(&self) -> Matrix4<f32> {
        self.viewport
    }

    /// viewport * projection * view
    pub fn clip_to_screen(&self) -> Matrix4<f32> {
        self.viewport * self.projection_transformation() * self.view_transformation()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

/// Map normalized device coordinates [-1, 1] onto [0, width] x [0, height]
///
/// Y grows upward: row 0 of the pixel buffer is the bottom of the image.
pub fn viewport_matrix(width: u32, height: u32) -> Matrix4<f32> {
    let half_w = width as f32 / 2.0;
    let half_h = height as f32 / 2.0;
    Matrix4::new_translation(&Vector3::new(half_w, half_h, 0.0))
        * Matrix4::new_nonuniform_scaling(&Vector3::new(half_w, half_h, 1.0))
}

/// Divide every component by w.
///
/// Returns `None` when w is too close to zero or the result is not finite.
pub fn perspective_divide(v: &Vector4<f32>) -> Option<Vector4<f32>> {
    if v.w.abs() < W_EPSILON {
        return None;
    }

    let divided = v / v.w;
    if divided.iter().all(|c| c.is_finite()) {
        Some(divided)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_creation() {
        let camera = Camera::new(800, 600);
        assert_eq!(camera.mode, ProjectionMode::Perspective);
        assert!((camera.aspect - 800.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn test_view_matrix() {
        let camera = Camera::new(800, 600);
        let view = camera.view_transformation();
        // View matrix should be non-zero
        assert!(view.norm() > 0.0);
        let eye = view * Vector4::new(0.0, 0.0, 5.0, 1.0);
        assert!((eye - Vector4::new(0.0, 0.0, 0.0, 1.0)).norm() < 1e-6);
    }

    #[test]
    fn test_perspective_divide_exact() {
        let divided = perspective_divide(&Vector4::new(2.0, 4.0, 6.0, 2.0));
        assert_eq!(divided, Some(Vector4::new(1.0, 2.0, 3.0, 1.0)));
    }

    #[test]
    fn test_perspective_divide_rejects_zero_w() {
        assert_eq!(perspective_divide(&Vector4::new(1.0, 1.0, 1.0, 0.0)), None);
        assert_eq!(perspective_divide(&Vector4::new(1.0, 1.0, 1.0, 1e-9)), None);
        assert_eq!(perspective_divide(&Vector4::new(f32::NAN, 1.0, 1.0, 1.0)), None);
    }

    #[test]
    fn test_viewport_maps_ndc_corners() {
        let viewport = viewport_matrix(64, 32);
        let low = viewport * Vector4::new(-1.0, -1.0, 0.0, 1.0);
        let high = viewport * Vector4::new(1.0, 1.0, 0.0, 1.0);
        let mid = viewport * Vector4::new(0.0, 0.0, 0.5, 1.0);
        assert_eq!(low, Vector4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(high, Vector4::new(64.0, 32.0, 0.0, 1.0));
        assert_eq!(mid, Vector4::new(32.0, 16.0, 0.5, 1.0));
    }

    #[test]
    fn test_orthographic_keeps_w() {
        let camera = Camera::orthographic(64, 64, Point3::new(0.0, 0.0, 4.0), Point3::origin());
        let clip = camera.clip_to_screen() * Vector4::new(1.0, 1.0, 1.0, 1.0);
        assert!((clip.w - 1.0).abs() < 1e-6);
        assert!((clip.x - 48.0).abs() < 1e-4);
        assert!((clip.y - 48.0).abs() < 1e-4);
    }

    #[test]
    fn test_set_viewport_updates_aspect() {
        let mut camera = Camera::new(100, 100);
        camera.set_viewport(200, 100);
        assert!((camera.aspect - 2.0).abs() < 1e-6);
        let corner = camera.viewport_transformation() * Vector4::new(1.0, 1.0, 0.0, 1.0);
        assert_eq!(corner, Vector4::new(200.0, 100.0, 0.0, 1.0));
    }

    #[test]
    fn test_set_clip_planes_stores_suspicious_values() {
        let mut camera = Camera::new(64, 64);
        camera.set_clip_planes(0.5, 50.0);
        assert_eq!((camera.near, camera.far), (0.5, 50.0));

        // Non-positive or inverted planes are logged but still applied.
        camera.set_clip_planes(-1.0, -5.0);
        assert_eq!((camera.near, camera.far), (-1.0, -5.0));
        camera.set_clip_planes(10.0, 2.0);
        assert_eq!((camera.near, camera.far), (10.0, 2.0));
    }
}
