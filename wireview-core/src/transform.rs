/// 3D transformation matrices and per-model transform state
use nalgebra::{Matrix4, Vector3, Vector4};

/// Last rotation angle set around each axis (in degrees)
///
/// Setting an axis replaces its previous angle; angles never accumulate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationState {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    pub fn with_x(self, degrees: f32) -> Self {
        Self { x: degrees, ..self }
    }

    pub fn with_y(self, degrees: f32) -> Self {
        Self { y: degrees, ..self }
    }

    pub fn with_z(self, degrees: f32) -> Self {
        Self { z: degrees, ..self }
    }

    /// Combined rotation, applied to a point as Rx * Ry * Rz * p
    pub fn matrix(&self) -> Matrix4<f32> {
        Transform::rotation_x(self.x) * Transform::rotation_y(self.y) * Transform::rotation_z(self.z)
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

/// Scale, translation and rotation for one space (local or world)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpaceTransform {
    scale: f32,
    translation: Vector3<f32>,
    rotation: RotationState,
    translate_scale: Matrix4<f32>,
    rotation_matrix: Matrix4<f32>,
}

impl SpaceTransform {
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            translation: Vector3::zeros(),
            rotation: RotationState::zero(),
            translate_scale: Matrix4::identity(),
            rotation_matrix: Matrix4::identity(),
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn translation(&self) -> Vector3<f32> {
        self.translation
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    /// Scale composed after translation: S * T
    pub fn translate_scale(&self) -> Matrix4<f32> {
        self.translate_scale
    }

    pub fn rotation_matrix(&self) -> Matrix4<f32> {
        self.rotation_matrix
    }

    /// S * T * Rx * Ry * Rz
    pub fn matrix(&self) -> Matrix4<f32> {
        self.translate_scale * self.rotation_matrix
    }

    fn with_translation(self, translation: Vector3<f32>) -> Self {
        Self {
            translation,
            translate_scale: compose_translate_scale(self.scale, &translation),
            ..self
        }
    }

    fn with_scale(self, scale: f32) -> Self {
        Self {
            scale,
            translate_scale: compose_translate_scale(scale, &self.translation),
            ..self
        }
    }

    fn with_rotation(self, rotation: RotationState) -> Self {
        Self {
            rotation,
            rotation_matrix: rotation.matrix(),
            ..self
        }
    }
}

impl Default for SpaceTransform {
    fn default() -> Self {
        Self::identity()
    }
}

fn compose_translate_scale(scale: f32, translation: &Vector3<f32>) -> Matrix4<f32> {
    Transform::uniform_scale_matrix(scale)
        * Transform::translation_matrix(translation.x, translation.y, translation.z)
}

/// Complete transform state of a mesh model
///
/// Values are immutable: every operation returns a new state with the
/// composed matrix already recomputed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    local: SpaceTransform,
    world: SpaceTransform,
    matrix: Matrix4<f32>,
}

impl TransformState {
    pub fn identity() -> Self {
        Self {
            local: SpaceTransform::identity(),
            world: SpaceTransform::identity(),
            matrix: Matrix4::identity(),
        }
    }

    pub fn local(&self) -> &SpaceTransform {
        &self.local
    }

    pub fn world(&self) -> &SpaceTransform {
        &self.world
    }

    /// world TS * world Rx Ry Rz * local TS * local Rx Ry Rz
    pub fn matrix(&self) -> Matrix4<f32> {
        self.matrix
    }

    /// Apply the full composition to a homogeneous point (no divide)
    pub fn transform(&self, point: &Vector4<f32>) -> Vector4<f32> {
        self.matrix * point
    }

    pub fn with_local_translation(self, dx: f32, dy: f32, dz: f32) -> Self {
        Self::compose(self.local.with_translation(Vector3::new(dx, dy, dz)), self.world)
    }

    pub fn with_local_scale(self, scale: f32) -> Self {
        Self::compose(self.local.with_scale(scale), self.world)
    }

    pub fn with_local_rotation_x(self, degrees: f32) -> Self {
        Self::compose(self.local.with_rotation(self.local.rotation.with_x(degrees)), self.world)
    }

    pub fn with_local_rotation_y(self, degrees: f32) -> Self {
        Self::compose(self.local.with_rotation(self.local.rotation.with_y(degrees)), self.world)
    }

    pub fn with_local_rotation_z(self, degrees: f32) -> Self {
        Self::compose(self.local.with_rotation(self.local.rotation.with_z(degrees)), self.world)
    }

    pub fn with_world_translation(self, dx: f32, dy: f32, dz: f32) -> Self {
        Self::compose(self.local, self.world.with_translation(Vector3::new(dx, dy, dz)))
    }

    pub fn with_world_scale(self, scale: f32) -> Self {
        Self::compose(self.local, self.world.with_scale(scale))
    }

    pub fn with_world_rotation_x(self, degrees: f32) -> Self {
        Self::compose(self.local, self.world.with_rotation(self.world.rotation.with_x(degrees)))
    }

    pub fn with_world_rotation_y(self, degrees: f32) -> Self {
        Self::compose(self.local, self.world.with_rotation(self.world.rotation.with_y(degrees)))
    }

    pub fn with_world_rotation_z(self, degrees: f32) -> Self {
        Self::compose(self.local, self.world.with_rotation(self.world.rotation.with_z(degrees)))
    }

    fn compose(local: SpaceTransform, world: SpaceTransform) -> Self {
        Self {
            local,
            world,
            matrix: world.matrix() * local.matrix(),
        }
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::identity()
    }
}

/// Transform builder for 3D transformations
pub struct Transform;

impl Transform {
    /// Rotation about the X axis, angle in degrees
    pub fn rotation_x(degrees: f32) -> Matrix4<f32> {
        Matrix4::new_rotation(Vector3::new(degrees_to_radians(degrees), 0.0, 0.0))
    }

    /// Rotation about the Y axis, angle in degrees
    pub fn rotation_y(degrees: f32) -> Matrix4<f32> {
        Matrix4::new_rotation(Vector3::new(0.0, degrees_to_radians(degrees), 0.0))
    }

    /// Rotation about the Z axis, angle in degrees
    pub fn rotation_z(degrees: f32) -> Matrix4<f32> {
        Matrix4::new_rotation(Vector3::new(0.0, 0.0, degrees_to_radians(degrees)))
    }

    /// Create a translation matrix
    pub fn translation_matrix(x: f32, y: f32, z: f32) -> Matrix4<f32> {
        Matrix4::new_translation(&Vector3::new(x, y, z))
    }

    /// Create a scale matrix
    pub fn scale_matrix(sx: f32, sy: f32, sz: f32) -> Matrix4<f32> {
        Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz))
    }

    pub fn uniform_scale_matrix(s: f32) -> Matrix4<f32> {
        Self::scale_matrix(s, s, s)
    }
}

pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * (std::f32::consts::PI / 180.0)
}
